pub mod comparison;
pub mod query;
pub mod search;

mod error;

use std::sync::Arc;

pub use comparison::{Comparator, ComparatorKind, JaccardSimilarity, LevenshteinDistance};
pub use error::{Error, Result};
pub use query::{NOUN_TAG, QueryComposer, QueryPlan, TRIGGER_WORDS, plain_query_text};
pub use search::{
	DEFAULT_MAXIMUM_SIMILARITY_THRESHOLD, IndexedTextSearch, Matches, SearchAlgorithm, TextSearch,
};

use parley_config::Config;
use parley_domain::{Language, LowercaseIndexer, NltkStyleProcessor, TextIndexer, TextProcessor};
use parley_storage::StatementStore;

/// External services a search strategy delegates to.
#[derive(Clone)]
pub struct Collaborators {
	pub store: Arc<dyn StatementStore>,
	pub processor: Arc<dyn TextProcessor>,
	pub indexer: Arc<dyn TextIndexer>,
}
impl Collaborators {
	/// Uses the default tokenizer/stemmer and lowercase indexer.
	pub fn with_store(store: Arc<dyn StatementStore>) -> Self {
		Self {
			store,
			processor: Arc::new(NltkStyleProcessor::new()),
			indexer: Arc::new(LowercaseIndexer),
		}
	}
}

/// Builds the search strategy named by `cfg.search.algorithm`.
pub fn build_search(
	cfg: &Config,
	collaborators: &Collaborators,
) -> Result<Box<dyn SearchAlgorithm>> {
	parley_config::validate(cfg)?;

	let language = Language::from_code(&cfg.comparison.language)?;
	let kind = ComparatorKind::from_name(&cfg.comparison.kind)?;
	let comparator = kind.build(language, collaborators.processor.clone())?;
	let page_size = cfg.search.page_size;
	let prefix = cfg.search.persona_exclude_prefix.clone();
	let threshold = cfg.comparison.maximum_similarity_threshold;

	tracing::info!(
		algorithm = cfg.search.algorithm.as_str(),
		comparator = cfg.comparison.kind.as_str(),
		language = %language,
		page_size,
		maximum_similarity_threshold = threshold,
		"Search strategy configured."
	);

	match cfg.search.algorithm.as_str() {
		IndexedTextSearch::NAME => {
			let search = IndexedTextSearch::new(
				collaborators.store.clone(),
				collaborators.processor.clone(),
				collaborators.indexer.clone(),
				language,
			)?
			.with_comparator(comparator)
			.with_page_size(page_size)
			.with_persona_exclude_prefix(prefix)
			.with_maximum_similarity_threshold(threshold);

			Ok(Box::new(search))
		},
		TextSearch::NAME => {
			let search =
				TextSearch::new(collaborators.store.clone(), collaborators.indexer.clone(), language)
					.with_comparator(comparator)
					.with_page_size(page_size)
					.with_persona_exclude_prefix(prefix)
					.with_maximum_similarity_threshold(threshold);

			Ok(Box::new(search))
		},
		other =>
			Err(Error::InvalidConfig { message: format!("Unknown search algorithm: {other}.") }),
	}
}
