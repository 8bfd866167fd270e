use common::{ExtractReply, Request, text};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue, prelude::wasm_bindgen};
use web_sys::{HtmlElement, window};

const SUBTITLE_CONTAINER: &str = ".player-timedtext";
const TOAST_ID: &str = "kioku-toast";
const TOAST_VISIBLE_MS: u32 = 2_500;
const TOAST_FADE_MS: u32 = 300;
const PREVIEW_CHARS: usize = 40;

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let browser = match webext::browser() {
		Ok(b) => b,
		Err(e) => {
			log::error!("[content] Failed to initialize: {e}");
			return;
		},
	};

	match browser.runtime().and_then(|r| r.on_message::<Request>()) {
		Ok(on_message) => match on_message.add_listener(|request, _| {
			if matches!(request, Request::Capture) {
				log::info!("[content] Starting capture");
				wasm_bindgen_futures::spawn_local(capture_and_send());
			}
		}) {
			Ok(handle) => handle.forget(),
			Err(e) => log::error!("[content] Failed to attach message listener: {e}"),
		},
		Err(e) => log::error!("[content] Runtime API unavailable: {e}"),
	}

	let href = window().and_then(|w| w.location().href().ok()).unwrap_or_default();
	log::info!("[content] Observer loaded on: {href}");
}

fn current_subtitle() -> String {
	let Some(document) = window().and_then(|w| w.document()) else {
		return String::new();
	};
	let Ok(Some(container)) = document.query_selector(SUBTITLE_CONTAINER) else {
		return String::new();
	};
	let Ok(spans) = container.query_selector_all("span") else {
		return String::new();
	};
	let fragments = (0..spans.length()).filter_map(|i| spans.item(i)).filter_map(|node| node.text_content());
	text::join_fragments(fragments)
}

async fn capture_and_send() {
	let subtitle = current_subtitle();
	if subtitle.is_empty() {
		show_toast("No subtitle visible", true);
		return;
	}

	show_toast(&format!("Capturing: {}...", text::preview(&subtitle, PREVIEW_CHARS)), false);

	match send_to_relay(subtitle).await {
		Ok(count) => show_toast(&format!("Captured {count} card(s) - Open popup to review"), false),
		Err(message) => {
			show_toast(&format!("Error: {message}"), true);
			// The staged text is still stored, so the panel opens in its
			// correction view. The browser refuses outside a user gesture.
			request_popup().await;
		},
	}
}

async fn send_to_relay(text: String) -> Result<usize, String> {
	let browser = webext::browser().map_err(|e| e.to_string())?;
	let runtime = browser.runtime().map_err(|e| e.to_string())?;
	let reply: ExtractReply = runtime.send_message(&Request::SendToApi { text }).await.map_err(|e| e.to_string())?;
	reply.into_result().map(|cards| cards.len())
}

async fn request_popup() {
	if let Err(e) = try_request_popup().await {
		log::info!("[content] Popup request failed: {e}");
	}
}

async fn try_request_popup() -> Result<(), webext::Error> {
	webext::browser()?.runtime()?.send_message(&Request::OpenPopup).await
}

fn show_toast(message: &str, is_error: bool) {
	if let Err(e) = render_toast(message, is_error) {
		log::warn!("[content] Toast failed: {e:?}");
	}
}

/// One banner at a time: a new call replaces any existing one.
fn render_toast(message: &str, is_error: bool) -> Result<(), JsValue> {
	let Some(document) = window().and_then(|w| w.document()) else {
		return Ok(());
	};
	let Some(body) = document.body() else {
		return Ok(());
	};

	if let Some(existing) = document.get_element_by_id(TOAST_ID) {
		existing.remove();
	}

	let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
	toast.set_id(TOAST_ID);
	toast.set_text_content(Some(message));

	let background = if is_error { "#c62828" } else { "#2e7d32" };
	toast.style().set_css_text(&format!(
		"position: fixed; top: 20px; right: 20px; padding: 12px 20px; border-radius: 8px; background: {background}; color: #fff; font-size: 14px; font-family: system-ui, sans-serif; z-index: 999999; opacity: 0.95; transition: opacity 0.3s; max-width: 400px;"
	));

	body.append_child(&toast)?;

	wasm_bindgen_futures::spawn_local(async move {
		TimeoutFuture::new(TOAST_VISIBLE_MS).await;
		let _ = toast.style().set_property("opacity", "0");
		TimeoutFuture::new(TOAST_FADE_MS).await;
		toast.remove();
	});

	Ok(())
}
