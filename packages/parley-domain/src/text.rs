use unicode_segmentation::UnicodeSegmentation;

use crate::{LancasterStemmer, Language, Result, stop_words};

/// Tokenizer, stemmer, and stop-word lookup used to build search terms.
pub trait TextProcessor
where
	Self: Send + Sync,
{
	fn tokenize(&self, text: &str) -> Result<Vec<String>>;

	fn stem(&self, token: &str) -> Result<String>;

	/// The default stop-word set for `language`.
	fn stop_words(&self, language: Language) -> Result<Vec<String>>;
}

/// Word-boundary tokenizer with punctuation kept as tokens and a Lancaster stemmer.
#[derive(Clone, Debug, Default)]
pub struct NltkStyleProcessor {
	stemmer: LancasterStemmer,
}
impl NltkStyleProcessor {
	pub fn new() -> Self {
		Self { stemmer: LancasterStemmer::new() }
	}
}
impl TextProcessor for NltkStyleProcessor {
	fn tokenize(&self, text: &str) -> Result<Vec<String>> {
		Ok(tokenize_words(text))
	}

	fn stem(&self, token: &str) -> Result<String> {
		Ok(self.stemmer.stem(token))
	}

	fn stop_words(&self, language: Language) -> Result<Vec<String>> {
		Ok(stop_words::for_language(language).iter().map(|word| word.to_string()).collect())
	}
}

/// Splits on Unicode word boundaries, dropping whitespace and detaching a trailing `'s`.
pub fn tokenize_words(text: &str) -> Vec<String> {
	let mut out = Vec::new();

	for segment in text.split_word_bounds() {
		if segment.trim().is_empty() {
			continue;
		}

		match split_clitic(segment) {
			Some((head, clitic)) => {
				out.push(head.to_string());
				out.push(clitic.to_string());
			},
			None => out.push(segment.to_string()),
		}
	}

	out
}

fn split_clitic(segment: &str) -> Option<(&str, &str)> {
	for clitic in ["'s", "'S", "\u{2019}s", "\u{2019}S"] {
		if let Some(head) = segment.strip_suffix(clitic)
			&& !head.is_empty()
		{
			return Some((head, "'s"));
		}
	}

	None
}
