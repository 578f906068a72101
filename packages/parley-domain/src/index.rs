use unicode_normalization::UnicodeNormalization;

/// Converts free text into the storage layer's indexable string form.
pub trait TextIndexer
where
	Self: Send + Sync,
{
	fn index_string(&self, text: &str) -> String;
}

/// NFKC-normalized, lowercased text with whitespace runs collapsed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseIndexer;
impl TextIndexer for LowercaseIndexer {
	fn index_string(&self, text: &str) -> String {
		let normalized: String = text.nfkc().collect();

		normalized.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
	}
}
