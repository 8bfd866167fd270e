use crate::{CardField, Flashcard, settings::CardMode};

pub fn filter_cards(cards: &[Flashcard], mode: CardMode) -> Vec<Flashcard> {
	match mode {
		CardMode::All => cards.to_vec(),
		CardMode::Sentence => cards.iter().filter(|c| c.is_sentence_card()).cloned().collect(),
	}
}

/// Full-list positions of the cards `filter_cards` would keep. Row controls
/// in a filtered view act on these, never on display row numbers, so hidden
/// cards survive edits and deletes.
pub fn visible_indices(cards: &[Flashcard], mode: CardMode) -> Vec<usize> {
	match mode {
		CardMode::All => (0..cards.len()).collect(),
		CardMode::Sentence => cards.iter().enumerate().filter(|(_, c)| c.is_sentence_card()).map(|(i, _)| i).collect(),
	}
}

/// Cards addressed by a saved row set, in row order.
pub fn cards_at(cards: &[Flashcard], indices: &[usize]) -> Vec<Flashcard> {
	indices.iter().filter_map(|&i| cards.get(i).cloned()).collect()
}

pub fn edit_field(cards: &mut [Flashcard], index: usize, field: CardField, value: String) {
	if let Some(card) = cards.get_mut(index) {
		field.set(card, value);
	}
}

pub fn remove_card(cards: &mut Vec<Flashcard>, index: usize) {
	if index < cards.len() {
		cards.remove(index);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn word_card(term: &str, sentence: &str) -> Flashcard {
		Flashcard { japanese: term.into(), example_sentence: sentence.into(), ..Default::default() }
	}

	fn taberu_sentence() -> Flashcard {
		Flashcard {
			japanese: "食べる".into(),
			reading: "たべる".into(),
			meaning: "to eat".into(),
			example_sentence: "食べる".into(),
			example_translation: "to eat".into(),
		}
	}

	#[test]
	fn sentence_mode_keeps_term_equals_sentence_subset() {
		let cards = vec![taberu_sentence(), word_card("飲む", "水を飲む")];

		let filtered = filter_cards(&cards, CardMode::Sentence);
		assert_eq!(filtered, vec![taberu_sentence()]);

		let all = filter_cards(&cards, CardMode::All);
		assert_eq!(all, cards);
	}

	#[test]
	fn all_mode_is_identity_on_empty_and_mixed_lists() {
		assert!(filter_cards(&[], CardMode::All).is_empty());
		assert!(filter_cards(&[], CardMode::Sentence).is_empty());

		let cards = vec![word_card("a", "b"), word_card("c", "c")];
		assert_eq!(filter_cards(&cards, CardMode::All), cards);
	}

	#[test]
	fn visible_indices_map_to_full_list_positions() {
		let cards = vec![word_card("a", "x"), word_card("b", "b"), word_card("c", "y"), word_card("d", "d")];

		assert_eq!(visible_indices(&cards, CardMode::All), vec![0, 1, 2, 3]);
		assert_eq!(visible_indices(&cards, CardMode::Sentence), vec![1, 3]);
	}

	#[test]
	fn saved_rows_resolve_in_row_order() {
		let cards = vec![word_card("a", "x"), word_card("b", "b"), word_card("c", "y"), word_card("d", "d")];
		let visible = visible_indices(&cards, CardMode::Sentence);

		let batch = cards_at(&cards, &visible);
		assert_eq!(batch.iter().map(|c| c.japanese.as_str()).collect::<Vec<_>>(), ["b", "d"]);
	}

	#[test]
	fn edit_touches_only_the_addressed_field() {
		let mut cards = vec![taberu_sentence(), word_card("飲む", "水を飲む")];

		edit_field(&mut cards, 1, CardField::Meaning, "to drink".into());

		assert_eq!(cards[1].meaning, "to drink");
		assert_eq!(cards[1].japanese, "飲む");
		assert_eq!(cards[0], taberu_sentence());
	}

	#[test]
	fn edit_out_of_range_is_a_no_op() {
		let mut cards = vec![taberu_sentence()];
		edit_field(&mut cards, 5, CardField::Reading, "x".into());
		assert_eq!(cards[0], taberu_sentence());
	}

	#[test]
	fn edits_keep_their_row_until_the_next_filter_event() {
		let mut cards = vec![word_card("食べる", "食べる"), word_card("飲む", "水を飲む")];
		let visible = visible_indices(&cards, CardMode::Sentence);
		assert_eq!(visible, vec![0]);

		// Editing the term out of the sentence predicate must not hide the
		// row or drop the card from a submission built on the saved row set.
		edit_field(&mut cards, visible[0], CardField::Japanese, "食べます".into());
		assert!(filter_cards(&cards, CardMode::Sentence).is_empty());

		let batch = cards_at(&cards, &visible);
		assert_eq!(batch.len(), 1);
		assert_eq!(batch[0].japanese, "食べます");

		// The next filter event is when the row finally disappears.
		assert!(visible_indices(&cards, CardMode::Sentence).is_empty());
	}

	#[test]
	fn remove_preserves_order_of_the_rest() {
		let mut cards = vec![word_card("a", "1"), word_card("b", "2"), word_card("c", "3")];

		remove_card(&mut cards, 1);
		assert_eq!(cards.iter().map(|c| c.japanese.as_str()).collect::<Vec<_>>(), ["a", "c"]);

		remove_card(&mut cards, 9);
		assert_eq!(cards.len(), 2);
	}

	#[test]
	fn filtered_delete_keeps_hidden_cards() {
		// Sentence mode hides the word card at index 0; deleting the first
		// visible row must remove index 1, not index 0.
		let mut cards = vec![word_card("飲む", "水を飲む"), word_card("食べる", "食べる"), word_card("見る", "見る")];

		let visible = visible_indices(&cards, CardMode::Sentence);
		remove_card(&mut cards, visible[0]);

		assert_eq!(cards.iter().map(|c| c.japanese.as_str()).collect::<Vec<_>>(), ["飲む", "見る"]);
	}
}
