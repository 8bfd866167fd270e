use chrono::{Local, TimeZone};
use common::{
	CardField, ExtractReply, Flashcard, GenerateReply, Request, keys,
	settings::{CardMode, DEFAULT_API_URL, DEFAULT_DECK, Theme, validate_api_url},
	time,
};
use dioxus::{
	prelude::*,
	web::{Config, launch::launch_cfg},
};
use gloo_timers::future::TimeoutFuture;
use strum::IntoEnumIterator;
use tailwind_fuse::tw_join;
use wasm_bindgen::prelude::*;

const CONFIRM_DELAY_MS: u32 = 1_500;

#[derive(Clone, PartialEq)]
enum Status {
	Idle,
	Info(String),
	Success(String),
	Error(String),
}

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

#[component]
fn App() -> Element {
	let mut cards = use_signal(Vec::<Flashcard>::new);
	// Rows on display. Refiltered on load, mode change, delete and new
	// batches, never while typing, so an edit that breaks the filter keeps
	// its row until the next filter event.
	let mut visible = use_signal(Vec::<usize>::new);
	let mut pending_text = use_signal(|| None::<String>);
	let mut captured_at = use_signal(|| None::<i64>);
	let mut card_mode = use_signal(CardMode::default);
	let mut theme = use_signal(Theme::default);
	let mut api_url = use_signal(|| DEFAULT_API_URL.to_owned());
	let deck_name = use_signal(|| DEFAULT_DECK.to_owned());
	let mut status = use_signal(|| Status::Idle);
	let show_settings = use_signal(|| false);
	let busy = use_signal(|| false);

	use_effect(move || apply_theme(theme()));

	use_effect(move || {
		spawn(async move {
			let storage = match webext::browser().and_then(|b| b.storage()).and_then(|s| s.local()) {
				Ok(storage) => storage,
				Err(e) => {
					status.set(Status::Error(format!("Error: {e}")));
					return;
				},
			};
			if let Ok(Some(stored)) = storage.get::<Vec<Flashcard>>(keys::CARDS).await {
				cards.set(stored);
			}
			if let Ok(Some(ts)) = storage.get::<i64>(keys::TIMESTAMP).await {
				captured_at.set(Some(ts));
			}
			if let Ok(Some(mode)) = storage.get::<CardMode>(keys::CARD_MODE).await {
				card_mode.set(mode);
			}
			if let Ok(Some(saved)) = storage.get::<Theme>(keys::THEME).await {
				theme.set(saved);
			}
			if let Ok(Some(url)) = storage.get::<String>(keys::API_URL).await {
				api_url.set(url);
			}
			if let Ok(Some(text)) = storage.get::<String>(keys::PENDING_TEXT).await {
				pending_text.set(Some(text));
			}
			visible.set(common::cards::visible_indices(&cards.read(), card_mode()));
		});
	});

	rsx! {
		div { class: "panel",
			Header { cards, theme, show_settings, status, captured_at }
			if show_settings() {
				SettingsPanel { cards, card_mode, visible, api_url, status }
			}
			if pending_text().is_some() {
				ExtractionView { pending_text, cards, card_mode, visible, captured_at, status, busy }
			} else {
				CardView { cards, card_mode, visible, deck_name, status, busy }
			}
		}
	}
}

#[component]
fn Header(cards: Signal<Vec<Flashcard>>, mut theme: Signal<Theme>, mut show_settings: Signal<bool>, mut status: Signal<Status>, captured_at: Signal<Option<i64>>) -> Element {
	let capture_note = if cards.read().is_empty() {
		None
	} else {
		captured_at().and_then(|ms| Local.timestamp_millis_opt(ms).single()).map(time::capture_label)
	};

	let on_toggle_theme = move |_| async move {
		let next = theme().toggled();
		theme.set(next);
		if let Err(e) = save_setting(keys::THEME, &next).await {
			status.set(Status::Error(format!("Error: {e}")));
		}
	};

	rsx! {
		header { class: "header",
			h1 { class: "title", "Kioku" }
			div { class: "header-actions",
				if let Some(note) = capture_note {
					span { class: "capture-note", "{note}" }
				}
				button { class: "icon-btn", title: "Toggle theme", onclick: on_toggle_theme, "{theme().toggle_icon()}" }
				button { class: "icon-btn", title: "Settings", onclick: move |_| show_settings.set(!show_settings()), "⚙" }
			}
		}
	}
}

#[component]
fn SettingsPanel(
	cards: Signal<Vec<Flashcard>>,
	card_mode: Signal<CardMode>,
	visible: Signal<Vec<usize>>,
	mut api_url: Signal<String>,
	mut status: Signal<Status>,
) -> Element {
	let mut url_input = use_signal(|| api_url());

	let on_save_url = move |_| async move {
		match validate_api_url(&url_input()) {
			Ok(normalized) => match save_setting(keys::API_URL, &normalized).await {
				Ok(()) => {
					api_url.set(normalized.clone());
					url_input.set(normalized);
					status.set(Status::Success("API URL saved".into()));
				},
				Err(e) => status.set(Status::Error(format!("Error: {e}"))),
			},
			// Leaves the stored endpoint untouched.
			Err(e) => status.set(Status::Error(format!("Error: {e}"))),
		}
	};

	rsx! {
		div { class: "settings",
			div { class: "setting-row",
				span { class: "setting-label", "Cards shown" }
				div { class: "toggle-group",
					ModeButton { cards, card_mode, visible, status, mode: CardMode::All, label: "All" }
					ModeButton { cards, card_mode, visible, status, mode: CardMode::Sentence, label: "Sentences" }
				}
			}
			div { class: "setting-row",
				span { class: "setting-label", "API URL" }
				input {
					class: "url-input",
					r#type: "text",
					value: "{url_input}",
					placeholder: DEFAULT_API_URL,
					oninput: move |evt| url_input.set(evt.value()),
				}
				button { class: "ghost-btn", onclick: on_save_url, "Save" }
			}
		}
	}
}

#[component]
fn ModeButton(
	cards: Signal<Vec<Flashcard>>,
	mut card_mode: Signal<CardMode>,
	mut visible: Signal<Vec<usize>>,
	mut status: Signal<Status>,
	mode: CardMode,
	label: String,
) -> Element {
	let active = card_mode() == mode;

	rsx! {
		button {
			class: tw_join!("toggle-btn", if active { "active" } else { "" }),
			onclick: move |_| async move {
				card_mode.set(mode);
				visible.set(common::cards::visible_indices(&cards.read(), mode));
				if let Err(e) = save_setting(keys::CARD_MODE, &mode).await {
					status.set(Status::Error(format!("Error: {e}")));
				}
			},
			"{label}"
		}
	}
}

#[component]
fn ExtractionView(
	mut pending_text: Signal<Option<String>>,
	mut cards: Signal<Vec<Flashcard>>,
	card_mode: Signal<CardMode>,
	mut visible: Signal<Vec<usize>>,
	mut captured_at: Signal<Option<i64>>,
	mut status: Signal<Status>,
	mut busy: Signal<bool>,
) -> Element {
	let mut draft = use_signal(|| pending_text().unwrap_or_default());

	let on_process = move |_| async move {
		let text = draft();
		if text.trim().is_empty() {
			status.set(Status::Info("Nothing to process".into()));
			return;
		}
		busy.set(true);
		status.set(Status::Info("Processing captured text...".into()));
		match process_text(text).await {
			Ok(batch) => {
				visible.set(common::cards::visible_indices(&batch, card_mode()));
				cards.set(batch);
				pending_text.set(None);
				captured_at.set(read_timestamp().await);
				status.set(Status::Idle);
			},
			Err(message) => status.set(Status::Error(format!("Error: {message}"))),
		}
		busy.set(false);
	};

	let on_cancel = move |_| async move {
		if let Err(e) = remove_pending().await {
			status.set(Status::Error(format!("Error: {e}")));
			return;
		}
		pending_text.set(None);
		status.set(Status::Idle);
	};

	rsx! {
		div { class: "extraction",
			p { class: "hint", "This capture was not processed yet. Fix the text, then turn it into cards." }
			textarea {
				class: "extraction-text",
				rows: "4",
				value: "{draft}",
				oninput: move |evt| draft.set(evt.value()),
			}
			div { class: "actions",
				button { class: "primary-btn", disabled: busy(), onclick: on_process, "Make cards" }
				button { class: "ghost-btn", disabled: busy(), onclick: on_cancel, "Discard" }
			}
			StatusLine { status }
		}
	}
}

#[component]
fn CardView(
	cards: Signal<Vec<Flashcard>>,
	card_mode: Signal<CardMode>,
	visible: Signal<Vec<usize>>,
	mut deck_name: Signal<String>,
	mut status: Signal<Status>,
	mut busy: Signal<bool>,
) -> Element {
	let on_add = move |_| async move {
		// Submits the rows on display, edits included, even when an edit no
		// longer matches the filter.
		let batch = common::cards::cards_at(&cards.read(), &visible());
		if batch.is_empty() {
			status.set(Status::Info("No cards to add".into()));
			return;
		}
		let deck = deck_name();
		let deck = if deck.trim().is_empty() { DEFAULT_DECK.to_owned() } else { deck };
		busy.set(true);
		status.set(Status::Info("Adding to Anki...".into()));
		match submit_cards(batch, deck).await {
			Ok(added) => {
				status.set(Status::Success(format!("Successfully added {added} card(s) to Anki!")));
				TimeoutFuture::new(CONFIRM_DELAY_MS).await;
				clear_all(cards, visible, status).await;
			},
			Err(message) => status.set(Status::Error(format!("Error: {message}"))),
		}
		busy.set(false);
	};

	let on_clear = move |_| async move { clear_all(cards, visible, status).await };

	rsx! {
		if visible().is_empty() {
			p { class: "status", "No cards captured yet" }
		} else {
			div { class: "cards",
				for index in visible() {
					CardRow { key: "{index}", cards, card_mode, visible, index, status }
				}
			}
			div { class: "actions",
				input {
					class: "deck-input",
					r#type: "text",
					value: "{deck_name}",
					placeholder: "Deck name",
					oninput: move |evt| deck_name.set(evt.value()),
				}
				button { class: "primary-btn", disabled: busy(), onclick: on_add, "Add to Anki" }
				button { class: "ghost-btn", disabled: busy(), onclick: on_clear, "Clear" }
			}
		}
		StatusLine { status }
	}
}

/// One editable card. `index` addresses the full stored list, so rows keep
/// working when the view is filtered.
#[component]
fn CardRow(mut cards: Signal<Vec<Flashcard>>, card_mode: Signal<CardMode>, mut visible: Signal<Vec<usize>>, index: usize, mut status: Signal<Status>) -> Element {
	let card = cards.read().get(index).cloned().unwrap_or_default();

	let on_delete = move |_| async move {
		let remaining = {
			let mut list = cards.write();
			common::cards::remove_card(&mut list, index);
			list.clone()
		};
		visible.set(common::cards::visible_indices(&remaining, card_mode()));
		if let Err(e) = persist_cards(&remaining).await {
			status.set(Status::Error(format!("Error: {e}")));
		}
	};

	rsx! {
		div { class: "card",
			button { class: "delete-btn", title: "Delete card", onclick: on_delete, "×" }
			for field in CardField::iter() {
				div { class: "field",
					label { "{field}:" }
					input {
						r#type: "text",
						value: "{field.get(&card)}",
						oninput: move |evt| {
							cards.with_mut(|list| common::cards::edit_field(list, index, field, evt.value()));
						},
					}
				}
			}
		}
	}
}

#[component]
fn StatusLine(status: Signal<Status>) -> Element {
	match status() {
		Status::Idle => rsx! {},
		Status::Info(message) => rsx! {
			p { class: "status", "{message}" }
		},
		Status::Success(message) => rsx! {
			p { class: "status success", "{message}" }
		},
		Status::Error(message) => rsx! {
			p { class: "status error", "{message}" }
		},
	}
}

fn apply_theme(theme: Theme) {
	if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
		let _ = root.set_attribute("data-theme", &theme.to_string());
	}
}

async fn process_text(text: String) -> Result<Vec<Flashcard>, String> {
	let browser = webext::browser().map_err(|e| e.to_string())?;
	let runtime = browser.runtime().map_err(|e| e.to_string())?;
	let reply: ExtractReply = runtime.send_message(&Request::SendToApi { text }).await.map_err(|e| e.to_string())?;
	reply.into_result()
}

async fn submit_cards(cards: Vec<Flashcard>, deck_name: String) -> Result<u32, String> {
	let browser = webext::browser().map_err(|e| e.to_string())?;
	let runtime = browser.runtime().map_err(|e| e.to_string())?;
	let reply: GenerateReply = runtime.send_message(&Request::GenerateCards { cards, deck_name }).await.map_err(|e| e.to_string())?;
	reply.into_result()
}

async fn clear_all(mut cards: Signal<Vec<Flashcard>>, mut visible: Signal<Vec<usize>>, mut status: Signal<Status>) {
	cards.set(Vec::new());
	visible.set(Vec::new());
	match persist_cards(&[]).await {
		Ok(()) => status.set(Status::Idle),
		Err(e) => status.set(Status::Error(format!("Error: {e}"))),
	}
}

async fn persist_cards(cards: &[Flashcard]) -> Result<(), webext::Error> {
	let browser = webext::browser()?;
	browser.storage()?.local()?.set(keys::CARDS, &cards).await?;

	if let Ok(action) = browser.action() {
		let _ = if cards.is_empty() { action.clear_badge().await } else { action.set_badge_text(&cards.len().to_string()).await };
	}
	Ok(())
}

async fn save_setting<T: serde::Serialize>(key: &str, value: &T) -> Result<(), webext::Error> {
	webext::browser()?.storage()?.local()?.set(key, value).await
}

async fn remove_pending() -> Result<(), webext::Error> {
	webext::browser()?.storage()?.local()?.remove(keys::PENDING_TEXT).await
}

async fn read_timestamp() -> Option<i64> {
	let storage = webext::browser().and_then(|b| b.storage()).and_then(|s| s.local()).ok()?;
	storage.get::<i64>(keys::TIMESTAMP).await.ok().flatten()
}
