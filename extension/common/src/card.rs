use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The extraction service makes no promise about which fields it fills, so
/// absent fields deserialize to empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashcard {
	#[serde(default)]
	pub japanese: String,
	#[serde(default)]
	pub reading: String,
	#[serde(default)]
	pub meaning: String,
	#[serde(default)]
	pub example_sentence: String,
	#[serde(default)]
	pub example_translation: String,
}

impl Flashcard {
	pub fn is_sentence_card(&self) -> bool {
		self.japanese == self.example_sentence
	}
}

/// The editable fields in the order the panel renders them; `Display` yields
/// the row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CardField {
	Japanese,
	Reading,
	Meaning,
	#[strum(to_string = "Example")]
	ExampleSentence,
	#[strum(to_string = "Translation")]
	ExampleTranslation,
}

impl CardField {
	pub fn get(self, card: &Flashcard) -> &str {
		match self {
			Self::Japanese => &card.japanese,
			Self::Reading => &card.reading,
			Self::Meaning => &card.meaning,
			Self::ExampleSentence => &card.example_sentence,
			Self::ExampleTranslation => &card.example_translation,
		}
	}

	pub fn set(self, card: &mut Flashcard, value: String) {
		match self {
			Self::Japanese => card.japanese = value,
			Self::Reading => card.reading = value,
			Self::Meaning => card.meaning = value,
			Self::ExampleSentence => card.example_sentence = value,
			Self::ExampleTranslation => card.example_translation = value,
		}
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn missing_fields_deserialize_empty() {
		let card: Flashcard = serde_json::from_str(r#"{"japanese": "猫"}"#).unwrap();
		assert_eq!(card.japanese, "猫");
		assert_eq!(card.reading, "");
		assert_eq!(card.example_translation, "");
	}

	#[test]
	fn field_set_then_get_roundtrips() {
		let mut card = Flashcard::default();
		for (i, field) in CardField::iter().enumerate() {
			field.set(&mut card, format!("value-{i}"));
		}
		for (i, field) in CardField::iter().enumerate() {
			assert_eq!(field.get(&card), format!("value-{i}"));
		}
	}

	#[test]
	fn labels_match_panel_rows() {
		let labels: Vec<String> = CardField::iter().map(|f| f.to_string()).collect();
		assert_eq!(labels, ["Japanese", "Reading", "Meaning", "Example", "Translation"]);
	}

	#[test]
	fn sentence_card_when_term_is_the_sentence() {
		let card = Flashcard { japanese: "食べる".into(), example_sentence: "食べる".into(), ..Default::default() };
		assert!(card.is_sentence_card());

		let card = Flashcard { japanese: "食べる".into(), example_sentence: "毎日食べる".into(), ..Default::default() };
		assert!(!card.is_sentence_card());
	}
}
