use std::{iter::FusedIterator, sync::Arc};

use crate::{
	Result,
	comparison::{Comparator, LevenshteinDistance},
	query::{QueryComposer, plain_query_text},
};
use parley_domain::{Language, Statement, TextIndexer, TextProcessor};
use parley_storage::{
	BOT_PERSONA_PREFIX, Candidates, DEFAULT_PAGE_SIZE, FilterOverrides, FilterParams,
	StatementStore,
};

pub const DEFAULT_MAXIMUM_SIMILARITY_THRESHOLD: f32 = 0.95;

/// A strategy producing progressively closer matches for an input statement.
pub trait SearchAlgorithm
where
	Self: Send + Sync,
{
	fn name(&self) -> &'static str;

	/// Issues one retrieval call and returns matches in strictly increasing confidence.
	fn search<'a>(
		&'a self,
		input: &'a Statement,
		overrides: FilterOverrides,
	) -> Result<Matches<'a>>;

	/// Confidence at which `closest` stops draining matches.
	fn maximum_similarity_threshold(&self) -> f32;

	/// The last match yielded before one reaches the configured threshold or the candidates
	/// run out.
	fn closest(&self, input: &Statement, overrides: FilterOverrides) -> Result<Option<Statement>> {
		self.search(input, overrides)?.closest(self.maximum_similarity_threshold())
	}
}

/// Lazily scans one candidate stream, yielding each candidate that beats every earlier one.
///
/// A comparator failure is yielded once as `Err` and ends the sequence.
pub struct Matches<'a> {
	input: &'a Statement,
	comparator: &'a dyn Comparator,
	candidates: Candidates,
	best_confidence: f32,
	finished: bool,
}
impl<'a> Matches<'a> {
	fn new(input: &'a Statement, comparator: &'a dyn Comparator, candidates: Candidates) -> Self {
		Self { input, comparator, candidates, best_confidence: 0.0, finished: false }
	}

	pub fn best_confidence(&self) -> f32 {
		self.best_confidence
	}

	/// Drains matches until one reaches `maximum_similarity_threshold` and returns the last
	/// yielded statement.
	pub fn closest(self, maximum_similarity_threshold: f32) -> Result<Option<Statement>> {
		let mut closest = None;

		for statement in self {
			let statement = statement?;
			let reached = statement.confidence >= maximum_similarity_threshold;

			closest = Some(statement);

			if reached {
				break;
			}
		}

		Ok(closest)
	}
}
impl Iterator for Matches<'_> {
	type Item = Result<Statement>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		for mut candidate in self.candidates.by_ref() {
			let confidence = match self.comparator.compare(self.input, &candidate) {
				Ok(confidence) => confidence,
				Err(err) => {
					self.finished = true;

					return Some(Err(err));
				},
			};

			if confidence > self.best_confidence {
				self.best_confidence = confidence;
				candidate.confidence = confidence;

				tracing::info!(text = %candidate.text, confidence, "Similar text found.");

				return Some(Ok(candidate));
			}
		}

		self.finished = true;

		None
	}
}
impl FusedIterator for Matches<'_> {}

/// Retrieval and comparison shared by every strategy.
struct Scanner {
	store: Arc<dyn StatementStore>,
	comparator: Box<dyn Comparator>,
	page_size: usize,
	persona_exclude_prefix: String,
	maximum_similarity_threshold: f32,
}
impl Scanner {
	fn new(store: Arc<dyn StatementStore>, language: Language) -> Self {
		Self {
			store,
			comparator: Box::new(LevenshteinDistance::new(language)),
			page_size: DEFAULT_PAGE_SIZE,
			persona_exclude_prefix: BOT_PERSONA_PREFIX.to_string(),
			maximum_similarity_threshold: DEFAULT_MAXIMUM_SIMILARITY_THRESHOLD,
		}
	}

	fn params(&self, query_text: String, overrides: FilterOverrides) -> FilterParams {
		let defaults = FilterParams {
			search_text_contains: Some(query_text),
			persona_not_startswith: Some(self.persona_exclude_prefix.clone()),
			page_size: self.page_size,
			..Default::default()
		};

		defaults.merge(overrides)
	}

	fn scan<'a>(
		&'a self,
		input: &'a Statement,
		query_text: String,
		overrides: FilterOverrides,
	) -> Result<Matches<'a>> {
		let params = self.params(query_text, overrides);

		tracing::info!(
			search_text_contains = params.search_text_contains.as_deref().unwrap_or_default(),
			page_size = params.page_size,
			"Search filter prepared."
		);

		let candidates = self.store.filter(&params)?;

		Ok(Matches::new(input, self.comparator.as_ref(), candidates))
	}
}

/// Best-match search whose query switches to tagged stems when trigger words appear.
pub struct IndexedTextSearch {
	scanner: Scanner,
	composer: QueryComposer,
	indexer: Arc<dyn TextIndexer>,
}
impl IndexedTextSearch {
	pub const NAME: &'static str = "indexed_text_search";

	pub fn new(
		store: Arc<dyn StatementStore>,
		processor: Arc<dyn TextProcessor>,
		indexer: Arc<dyn TextIndexer>,
		language: Language,
	) -> Result<Self> {
		let composer = QueryComposer::new(language, processor)?;

		Ok(Self { scanner: Scanner::new(store, language), composer, indexer })
	}

	pub fn with_comparator(mut self, comparator: Box<dyn Comparator>) -> Self {
		self.scanner.comparator = comparator;

		self
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.scanner.page_size = page_size;

		self
	}

	pub fn with_persona_exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.scanner.persona_exclude_prefix = prefix.into();

		self
	}

	pub fn with_composer(mut self, composer: QueryComposer) -> Self {
		self.composer = composer;

		self
	}

	pub fn composer(&self) -> &QueryComposer {
		&self.composer
	}

	pub fn with_maximum_similarity_threshold(mut self, threshold: f32) -> Self {
		self.scanner.maximum_similarity_threshold = threshold;

		self
	}

	pub fn page_size(&self) -> usize {
		self.scanner.page_size
	}
}
impl SearchAlgorithm for IndexedTextSearch {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn maximum_similarity_threshold(&self) -> f32 {
		self.scanner.maximum_similarity_threshold
	}

	fn search<'a>(
		&'a self,
		input: &'a Statement,
		overrides: FilterOverrides,
	) -> Result<Matches<'a>> {
		tracing::info!(algorithm = Self::NAME, "Beginning search for close text match.");

		let query_text = self.composer.compose(input, self.indexer.as_ref())?;

		self.scanner.scan(input, query_text, overrides)
	}
}

/// Best-match search that always filters on the input's own index string.
pub struct TextSearch {
	scanner: Scanner,
	indexer: Arc<dyn TextIndexer>,
}
impl TextSearch {
	pub const NAME: &'static str = "text_search";

	pub fn new(
		store: Arc<dyn StatementStore>,
		indexer: Arc<dyn TextIndexer>,
		language: Language,
	) -> Self {
		Self { scanner: Scanner::new(store, language), indexer }
	}

	pub fn with_comparator(mut self, comparator: Box<dyn Comparator>) -> Self {
		self.scanner.comparator = comparator;

		self
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.scanner.page_size = page_size;

		self
	}

	pub fn with_persona_exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.scanner.persona_exclude_prefix = prefix.into();

		self
	}

	pub fn with_maximum_similarity_threshold(mut self, threshold: f32) -> Self {
		self.scanner.maximum_similarity_threshold = threshold;

		self
	}

	pub fn page_size(&self) -> usize {
		self.scanner.page_size
	}
}
impl SearchAlgorithm for TextSearch {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn maximum_similarity_threshold(&self) -> f32 {
		self.scanner.maximum_similarity_threshold
	}

	fn search<'a>(
		&'a self,
		input: &'a Statement,
		overrides: FilterOverrides,
	) -> Result<Matches<'a>> {
		tracing::info!(algorithm = Self::NAME, "Beginning search for close text match.");

		let query_text = plain_query_text(input, self.indexer.as_ref());

		self.scanner.scan(input, query_text, overrides)
	}
}
