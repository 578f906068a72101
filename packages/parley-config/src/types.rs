use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 1_000;
pub const DEFAULT_PERSONA_EXCLUDE_PREFIX: &str = "bot:";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub search: Search,
	pub comparison: Comparison,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// One of "indexed_text_search" or "text_search".
	pub algorithm: String,
	/// Upper bound on the candidates loaded by one retrieval call.
	pub page_size: usize,
	/// Stored statements whose persona starts with this prefix are never candidates.
	pub persona_exclude_prefix: String,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			algorithm: "indexed_text_search".to_string(),
			page_size: DEFAULT_PAGE_SIZE,
			persona_exclude_prefix: DEFAULT_PERSONA_EXCLUDE_PREFIX.to_string(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Comparison {
	/// One of "levenshtein" or "jaccard".
	pub kind: String,
	pub language: String,
	/// Callers stop draining matches once a yielded confidence reaches this value.
	pub maximum_similarity_threshold: f32,
}
impl Default for Comparison {
	fn default() -> Self {
		Self {
			kind: "levenshtein".to_string(),
			language: "en".to_string(),
			maximum_similarity_threshold: 0.95,
		}
	}
}
