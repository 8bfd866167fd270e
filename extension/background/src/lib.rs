//! Every outbound HTTP call happens here: mixed-content rules on the player
//! page keep the other contexts from reaching the extraction service.

use common::{
	ExtractReply, Flashcard, GenerateReply, RelayError, Request,
	api::{ApiErrorBody, EXTRACT_TEXT_PATH, ExtractTextRequest, ExtractTextResponse, GENERATE_PATH, GenerateRequest, GenerateResponse},
	keys,
	settings::DEFAULT_API_URL,
};
use reqwest::Client;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use webext::{Browser, StorageArea};

pub const CAPTURE_COMMAND: &str = "capture-subtitle";

/// Serializes to whichever wire shape the request called for.
#[derive(Serialize)]
#[serde(untagged)]
enum Reply {
	Extract(ExtractReply),
	Generate(GenerateReply),
	None,
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let browser = match webext::browser() {
		Ok(b) => b,
		Err(e) => {
			log::error!("[background] Failed to initialize: {e}");
			return;
		},
	};

	match browser.commands().and_then(|c| c.on_command()) {
		Ok(on_command) => match on_command.add_listener(on_command_fired) {
			// Both listeners live for the whole worker lifetime.
			Ok(handle) => handle.forget(),
			Err(e) => log::error!("[background] Failed to attach command listener: {e}"),
		},
		Err(e) => log::error!("[background] Commands API unavailable: {e}"),
	}

	match browser.runtime().and_then(|r| r.on_message::<Request>()) {
		Ok(on_message) => match on_message.add_listener_with_reply(|request, _| handle_request(request)) {
			Ok(handle) => handle.forget(),
			Err(e) => log::error!("[background] Failed to attach message listener: {e}"),
		},
		Err(e) => log::error!("[background] Runtime API unavailable: {e}"),
	}

	log::info!("[background] Service worker loaded");
}

fn on_command_fired(command: String) {
	log::info!("[background] Command received: {command}");
	if command == CAPTURE_COMMAND {
		wasm_bindgen_futures::spawn_local(async {
			if let Err(e) = dispatch_capture().await {
				log::warn!("[background] Capture dispatch failed: {e}");
			}
		});
	}
}

async fn dispatch_capture() -> Result<(), webext::Error> {
	let browser = webext::browser()?;
	let tabs = browser.tabs()?;
	let tab = tabs.active_tab().await?;
	let Some(tab_id) = tab.id else {
		log::warn!("[background] Active tab has no id");
		return Ok(());
	};
	log::info!("[background] Sending capture to tab {tab_id}");
	tabs.send_message::<_, ()>(tab_id, &Request::Capture).await
}

async fn handle_request(request: Request) -> Reply {
	match request {
		Request::SendToApi { text } => Reply::Extract(match extract_text(text).await {
			Ok(cards) => ExtractReply::ok(cards),
			Err(e) => ExtractReply::err(e.to_string()),
		}),
		Request::GenerateCards { cards, deck_name } => Reply::Generate(match generate_cards(cards, deck_name).await {
			Ok(added) => GenerateReply::ok(added),
			Err(e) => GenerateReply::err(e.to_string()),
		}),
		Request::OpenPopup => {
			if let Err(e) = open_popup().await {
				log::info!("[background] Could not open popup: {e}");
			}
			Reply::None
		},
		Request::Capture => {
			log::warn!("[background] Ignoring capture request addressed to a tab");
			Reply::None
		},
	}
}

/// The staged text is only cleared on success, so a failed call leaves it
/// for the panel's correction view.
async fn extract_text(text: String) -> Result<Vec<Flashcard>, RelayError> {
	let browser = browser()?;
	let storage = local_storage(&browser)?;

	storage.set(keys::PENDING_TEXT, &text).await.map_err(extension_error)?;

	let base = api_url(&storage).await;
	let response =
		Client::new().post(format!("{base}{EXTRACT_TEXT_PATH}")).json(&ExtractTextRequest { text }).send().await.map_err(|_| RelayError::Network)?;

	if !response.status().is_success() {
		let status = response.status().as_u16();
		let detail = response.json::<ApiErrorBody>().await.unwrap_or_default().detail;
		return Err(RelayError::from_status(status, detail));
	}

	let cards = response.json::<ExtractTextResponse>().await.map_err(|_| RelayError::Network)?.cards;
	log::info!("[background] Extraction returned {} card(s)", cards.len());

	storage.set(keys::CARDS, &cards).await.map_err(extension_error)?;
	storage.set(keys::TIMESTAMP, &chrono::Utc::now().timestamp_millis()).await.map_err(extension_error)?;
	storage.remove(keys::PENDING_TEXT).await.map_err(extension_error)?;
	refresh_badge(&browser, cards.len()).await;

	Ok(cards)
}

async fn generate_cards(cards: Vec<Flashcard>, deck_name: String) -> Result<u32, RelayError> {
	let browser = browser()?;
	let storage = local_storage(&browser)?;

	let base = api_url(&storage).await;
	let response =
		Client::new().post(format!("{base}{GENERATE_PATH}")).json(&GenerateRequest { cards, deck_name }).send().await.map_err(|_| RelayError::Network)?;

	if !response.status().is_success() {
		let status = response.status().as_u16();
		let detail = response.json::<ApiErrorBody>().await.unwrap_or_default().detail;
		return Err(RelayError::from_status(status, detail));
	}

	let added = response.json::<GenerateResponse>().await.map_err(|_| RelayError::Network)?.added;
	log::info!("[background] Anki accepted {added} card(s)");
	Ok(added)
}

async fn open_popup() -> Result<(), webext::Error> {
	webext::browser()?.action()?.open_popup().await
}

async fn refresh_badge(browser: &Browser, count: usize) {
	match browser.action() {
		Ok(action) => {
			let updated = if count == 0 { action.clear_badge().await } else { action.set_badge_text(&count.to_string()).await };
			if let Err(e) = updated {
				log::warn!("[background] Badge update failed: {e}");
			}
		},
		Err(e) => log::warn!("[background] Action API unavailable: {e}"),
	}
}

async fn api_url(storage: &StorageArea) -> String {
	match storage.get::<String>(keys::API_URL).await {
		Ok(Some(url)) if !url.is_empty() => url,
		Ok(_) => DEFAULT_API_URL.to_owned(),
		Err(e) => {
			log::warn!("[background] Could not read API URL, using default: {e}");
			DEFAULT_API_URL.to_owned()
		},
	}
}

fn browser() -> Result<Browser, RelayError> {
	webext::browser().map_err(extension_error)
}

fn local_storage(browser: &Browser) -> Result<StorageArea, RelayError> {
	browser.storage().and_then(|s| s.local()).map_err(extension_error)
}

fn extension_error(e: webext::Error) -> RelayError {
	RelayError::Extension(e.to_string())
}
