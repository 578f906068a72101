use std::{collections::HashSet, sync::Arc};

use crate::Result;
use parley_domain::{Language, Statement, TextIndexer, TextProcessor};

/// Words that route a query through tagged stems instead of the precomputed index string.
pub const TRIGGER_WORDS: &[&str] = &[
	"registry",
	"reigistry",
	"reigstry",
	"stores",
	"master",
	"file",
	"masterfile",
	"ini",
	"stored",
];
pub const NOUN_TAG: &str = "NOUN";

/// Survives stop-word filtering so that negated questions keep their negation.
const KEPT_NEGATION: &str = "ain";
const STOP_WORD_EXTENSIONS: &[&str] = &["'s", "whats", "what", "which", "that", "?", ".", ","];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryPlan {
	/// Tagged stems of the input's content words.
	TaggedStems(Vec<String>),
	/// The input's own precomputed index string.
	Precomputed(String),
	/// The input carries no index string; derive one from its text.
	Reindex,
}
impl QueryPlan {
	pub fn label(&self) -> &'static str {
		match self {
			Self::TaggedStems(_) => "tagged_stems",
			Self::Precomputed(_) => "precomputed",
			Self::Reindex => "reindex",
		}
	}

	pub fn render(self, statement: &Statement, indexer: &dyn TextIndexer) -> String {
		match self {
			Self::TaggedStems(terms) => terms.join(" "),
			Self::Precomputed(search_text) => search_text,
			Self::Reindex => indexer.index_string(&statement.text),
		}
	}
}

pub struct QueryComposer {
	processor: Arc<dyn TextProcessor>,
	trigger_words: HashSet<String>,
	stop_words: HashSet<String>,
}
impl QueryComposer {
	pub fn new(language: Language, processor: Arc<dyn TextProcessor>) -> Result<Self> {
		let mut stop_words: HashSet<String> = processor.stop_words(language)?.into_iter().collect();

		stop_words.remove(KEPT_NEGATION);
		stop_words.extend(STOP_WORD_EXTENSIONS.iter().map(|word| word.to_string()));

		let trigger_words = TRIGGER_WORDS.iter().map(|word| word.to_string()).collect();

		Ok(Self { processor, trigger_words, stop_words })
	}

	/// Replaces the trigger vocabulary. Words are matched against lowercased tokens.
	pub fn with_trigger_words<I, T>(mut self, words: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: AsRef<str>,
	{
		self.trigger_words = words.into_iter().map(|word| word.as_ref().to_lowercase()).collect();

		self
	}

	pub fn is_trigger_word(&self, token: &str) -> bool {
		self.trigger_words.contains(token)
	}

	pub fn is_stop_word(&self, token: &str) -> bool {
		self.stop_words.contains(token)
	}

	pub fn plan(&self, statement: &Statement) -> Result<QueryPlan> {
		let tokens = self.processor.tokenize(&statement.text.to_lowercase())?;
		let plan = if tokens.iter().any(|token| self.is_trigger_word(token)) {
			let mut terms = Vec::with_capacity(tokens.len());

			for token in tokens.iter().filter(|token| !self.is_stop_word(token)) {
				terms.push(format!("{NOUN_TAG}:{}", self.processor.stem(token)?));
			}

			QueryPlan::TaggedStems(terms)
		} else {
			QueryPlan::Precomputed(statement.search_text.clone())
		};

		if statement.search_text.is_empty() {
			return Ok(QueryPlan::Reindex);
		}

		Ok(plan)
	}

	pub fn compose(&self, statement: &Statement, indexer: &dyn TextIndexer) -> Result<String> {
		let plan = self.plan(statement)?;

		match &plan {
			QueryPlan::TaggedStems(_) => {
				tracing::info!(text = %statement.text, "Trigger words found in input.");
			},
			QueryPlan::Precomputed(_) => {
				tracing::info!("No trigger words found. Using precomputed search text.");
			},
			QueryPlan::Reindex => {
				tracing::warn!("No value for search_text was available on the provided input.");
			},
		}

		Ok(plan.render(statement, indexer))
	}
}

/// The input's precomputed index string, or a fresh one when it has none.
pub fn plain_query_text(statement: &Statement, indexer: &dyn TextIndexer) -> String {
	if statement.search_text.is_empty() {
		tracing::warn!("No value for search_text was available on the provided input.");

		return indexer.index_string(&statement.text);
	}

	statement.search_text.clone()
}
