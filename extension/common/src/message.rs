use serde::{Deserialize, Serialize};

use crate::Flashcard;

/// The `action` tag and the field names are the wire protocol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
	Capture,
	SendToApi { text: String },
	#[serde(rename_all = "camelCase")]
	GenerateCards { cards: Vec<Flashcard>, deck_name: String },
	OpenPopup,
}

/// Reply to [`Request::SendToApi`]. Exactly one side is set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExtractReply {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cards: Option<Vec<Flashcard>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl ExtractReply {
	pub fn ok(cards: Vec<Flashcard>) -> Self {
		Self { cards: Some(cards), error: None }
	}

	pub fn err(message: impl Into<String>) -> Self {
		Self { cards: None, error: Some(message.into()) }
	}

	pub fn into_result(self) -> Result<Vec<Flashcard>, String> {
		match self {
			Self { error: Some(message), .. } => Err(message),
			Self { cards, .. } => Ok(cards.unwrap_or_default()),
		}
	}
}

/// Reply to [`Request::GenerateCards`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerateReply {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub added: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl GenerateReply {
	pub fn ok(added: u32) -> Self {
		Self { added: Some(added), error: None }
	}

	pub fn err(message: impl Into<String>) -> Self {
		Self { added: None, error: Some(message.into()) }
	}

	pub fn into_result(self) -> Result<u32, String> {
		match self {
			Self { error: Some(message), .. } => Err(message),
			Self { added, .. } => Ok(added.unwrap_or_default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn requests_serialize_to_action_tagged_forms() {
		assert_eq!(serde_json::to_value(Request::Capture).unwrap(), json!({"action": "capture"}));
		assert_eq!(serde_json::to_value(Request::OpenPopup).unwrap(), json!({"action": "openPopup"}));
		assert_eq!(serde_json::to_value(Request::SendToApi { text: "こんにちは".into() }).unwrap(), json!({"action": "sendToApi", "text": "こんにちは"}));
	}

	#[test]
	fn generate_request_uses_camel_case_deck_name() {
		let request = Request::GenerateCards { cards: vec![Flashcard::default()], deck_name: "Kioku".into() };
		let value = serde_json::to_value(&request).unwrap();

		assert_eq!(value["action"], "generateCards");
		assert_eq!(value["deckName"], "Kioku");
		assert!(value["cards"].is_array());
	}

	#[test]
	fn requests_parse_back_from_the_wire() {
		let parsed: Request = serde_json::from_value(json!({"action": "sendToApi", "text": "words"})).unwrap();
		assert_eq!(parsed, Request::SendToApi { text: "words".into() });

		let parsed: Request = serde_json::from_value(json!({"action": "capture"})).unwrap();
		assert_eq!(parsed, Request::Capture);
	}

	#[test]
	fn success_replies_omit_the_error_key() {
		let value = serde_json::to_value(ExtractReply::ok(vec![Flashcard::default()])).unwrap();
		assert!(value.get("error").is_none());
		assert_eq!(value["cards"].as_array().unwrap().len(), 1);

		let value = serde_json::to_value(GenerateReply::ok(3)).unwrap();
		assert!(value.get("error").is_none());
		assert_eq!(value["added"], 3);
	}

	#[test]
	fn error_replies_win_over_payloads() {
		let reply = ExtractReply { cards: Some(vec![]), error: Some("HTTP 500".into()) };
		assert_eq!(reply.into_result(), Err("HTTP 500".into()));

		let reply: GenerateReply = serde_json::from_value(json!({"error": "no deck"})).unwrap();
		assert_eq!(reply.into_result(), Err("no deck".into()));
	}

	#[test]
	fn empty_reply_reads_as_zero_cards() {
		let reply: ExtractReply = serde_json::from_value(json!({})).unwrap();
		assert_eq!(reply.into_result(), Ok(vec![]));
	}
}
