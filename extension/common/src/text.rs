pub fn join_fragments<I, S>(fragments: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut joined = String::new();
	for fragment in fragments {
		let fragment = fragment.as_ref().trim();
		if fragment.is_empty() {
			continue;
		}
		if !joined.is_empty() {
			joined.push(' ');
		}
		joined.push_str(fragment);
	}
	joined
}

/// Cuts on character boundaries, so multi-byte subtitles never panic.
pub fn preview(text: &str, limit: usize) -> &str {
	match text.char_indices().nth(limit) {
		Some((end, _)) => &text[..end],
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fragments_trim_and_join_with_single_spaces() {
		assert_eq!(join_fragments(["  こんにちは ", "", " 世界  "]), "こんにちは 世界");
		assert_eq!(join_fragments(["one line"]), "one line");
	}

	#[test]
	fn empty_and_blank_fragments_yield_empty() {
		assert_eq!(join_fragments(Vec::<String>::new()), "");
		assert_eq!(join_fragments(["   ", "\n", ""]), "");
	}

	#[test]
	fn preview_cuts_on_character_boundaries() {
		assert_eq!(preview("hello world", 5), "hello");
		assert_eq!(preview("食べることが好き", 3), "食べる");
		assert_eq!(preview("short", 40), "short");
	}
}
