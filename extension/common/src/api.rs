//! Bodies for the extraction service. `deck_name` stays snake_case on this
//! wire while the message channel speaks camelCase.

use serde::{Deserialize, Serialize};

use crate::Flashcard;

pub const EXTRACT_TEXT_PATH: &str = "/api/extract-text";
pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExtractTextRequest {
	pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractTextResponse {
	#[serde(default)]
	pub cards: Vec<Flashcard>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
	pub cards: Vec<Flashcard>,
	pub deck_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateResponse {
	pub added: u32,
}

/// Tolerates any body, since failure paths must never fail to parse.
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
	#[serde(default)]
	pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn generate_request_keeps_snake_case_deck_name() {
		let request = GenerateRequest { cards: vec![], deck_name: "Kioku".into() };
		assert_eq!(serde_json::to_value(&request).unwrap(), json!({"cards": [], "deck_name": "Kioku"}));
	}

	#[test]
	fn extract_response_tolerates_missing_cards() {
		let response: ExtractTextResponse = serde_json::from_value(json!({})).unwrap();
		assert!(response.cards.is_empty());
	}

	#[test]
	fn error_body_parses_with_and_without_detail() {
		let body: ApiErrorBody = serde_json::from_value(json!({"detail": "deck not found"})).unwrap();
		assert_eq!(body.detail.as_deref(), Some("deck not found"));

		let body: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
		assert!(body.detail.is_none());
	}
}
