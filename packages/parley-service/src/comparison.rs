use std::{collections::HashSet, sync::Arc};

use crate::{Error, Result};
use parley_domain::{Language, Statement, TextProcessor};

/// Scores how similar a stored candidate is to the input. Higher is closer.
pub trait Comparator
where
	Self: Send + Sync,
{
	fn compare(&self, input: &Statement, candidate: &Statement) -> Result<f32>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparatorKind {
	Levenshtein,
	Jaccard,
}
impl ComparatorKind {
	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"levenshtein" => Ok(Self::Levenshtein),
			"jaccard" => Ok(Self::Jaccard),
			_ => Err(Error::InvalidConfig { message: format!("Unknown comparator kind: {name}.") }),
		}
	}

	pub fn build(
		self,
		language: Language,
		processor: Arc<dyn TextProcessor>,
	) -> Result<Box<dyn Comparator>> {
		match self {
			Self::Levenshtein => Ok(Box::new(LevenshteinDistance::new(language))),
			Self::Jaccard => Ok(Box::new(JaccardSimilarity::new(language, processor)?)),
		}
	}
}

/// Normalized edit-distance similarity of the lowercased texts, rounded to two decimals.
#[derive(Clone, Copy, Debug)]
pub struct LevenshteinDistance {
	language: Language,
}
impl LevenshteinDistance {
	pub fn new(language: Language) -> Self {
		Self { language }
	}

	pub fn language(&self) -> Language {
		self.language
	}
}
impl Comparator for LevenshteinDistance {
	fn compare(&self, input: &Statement, candidate: &Statement) -> Result<f32> {
		if input.text.is_empty() || candidate.text.is_empty() {
			return Ok(0.0);
		}

		let similarity = strsim::normalized_levenshtein(
			&input.text.to_lowercase(),
			&candidate.text.to_lowercase(),
		);

		Ok(((similarity * 100.0).round() / 100.0) as f32)
	}
}

/// Overlap of stemmed content words: `|a ∩ b| / |a ∪ b|`.
pub struct JaccardSimilarity {
	language: Language,
	processor: Arc<dyn TextProcessor>,
	stop_words: HashSet<String>,
}
impl JaccardSimilarity {
	pub fn new(language: Language, processor: Arc<dyn TextProcessor>) -> Result<Self> {
		let stop_words = processor.stop_words(language)?.into_iter().collect();

		Ok(Self { language, processor, stop_words })
	}

	pub fn language(&self) -> Language {
		self.language
	}

	fn content_terms(&self, text: &str) -> Result<HashSet<String>> {
		let mut terms = HashSet::new();

		for token in self.processor.tokenize(&text.to_lowercase())? {
			if !token.chars().all(char::is_alphanumeric) || self.stop_words.contains(&token) {
				continue;
			}

			terms.insert(self.processor.stem(&token)?);
		}

		Ok(terms)
	}
}
impl Comparator for JaccardSimilarity {
	fn compare(&self, input: &Statement, candidate: &Statement) -> Result<f32> {
		let a = self.content_terms(&input.text)?;
		let b = self.content_terms(&candidate.text)?;
		let union = a.union(&b).count();

		if union == 0 {
			return Ok(0.0);
		}

		Ok(a.intersection(&b).count() as f32 / union as f32)
	}
}
