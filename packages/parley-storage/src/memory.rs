use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Candidates, Error, FilterParams, Result, StatementStore};
use parley_domain::Statement;

#[derive(Debug, Default)]
struct Inner {
	statements: Vec<Statement>,
	next_id: u64,
}

/// Insertion-ordered in-process statement store.
#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_statements(statements: impl IntoIterator<Item = Statement>) -> Result<Self> {
		let store = Self::new();

		for statement in statements {
			store.create(statement)?;
		}

		Ok(store)
	}

	/// Stores `statement`, assigning the next id when it has none.
	pub fn create(&self, mut statement: Statement) -> Result<Statement> {
		let mut inner = self.write()?;

		match statement.id {
			Some(id) => inner.next_id = inner.next_id.max(id.saturating_add(1)),
			None => {
				statement.id = Some(inner.next_id);
				inner.next_id += 1;
			},
		}

		inner.statements.push(statement.clone());

		Ok(statement)
	}

	pub fn count(&self) -> Result<usize> {
		Ok(self.read()?.statements.len())
	}

	/// Replaces the stored statement with the same id.
	pub fn update(&self, statement: Statement) -> Result<()> {
		let Some(id) = statement.id else {
			return Err(Error::InvalidArgument("Statement id is required for update.".to_string()));
		};
		let mut inner = self.write()?;
		let Some(slot) = inner.statements.iter_mut().find(|stored| stored.id == Some(id)) else {
			return Err(Error::NotFound(format!("Statement {id} does not exist.")));
		};

		*slot = statement;

		Ok(())
	}

	/// Removes every statement whose text equals `text` and returns how many were removed.
	pub fn remove(&self, text: &str) -> Result<usize> {
		let mut inner = self.write()?;
		let before = inner.statements.len();

		inner.statements.retain(|stored| stored.text != text);

		Ok(before - inner.statements.len())
	}

	pub fn drop_all(&self) -> Result<()> {
		let mut inner = self.write()?;

		inner.statements.clear();

		Ok(())
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
		self.inner.read().map_err(|_| Error::Unavailable("Memory store lock poisoned.".to_string()))
	}

	fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
		self.inner.write().map_err(|_| Error::Unavailable("Memory store lock poisoned.".to_string()))
	}
}
impl StatementStore for MemoryStore {
	fn filter(&self, params: &FilterParams) -> Result<Candidates> {
		if params.page_size == 0 {
			return Err(Error::InvalidArgument("page_size must be greater than zero.".to_string()));
		}

		let inner = self.read()?;
		let page: Vec<Statement> = inner
			.statements
			.iter()
			.filter(|statement| matches_filter(statement, params))
			.take(params.page_size)
			.cloned()
			.collect();

		tracing::debug!(
			matched = page.len(),
			page_size = params.page_size,
			stored = inner.statements.len(),
			"Memory store filter completed."
		);

		Ok(Box::new(page.into_iter()))
	}
}

fn matches_filter(statement: &Statement, params: &FilterParams) -> bool {
	if let Some(query) = params.search_text_contains.as_deref()
		&& !contains_any_word(&statement.search_text, query)
	{
		return false;
	}
	if let Some(prefix) = params.persona_not_startswith.as_deref()
		&& !prefix.is_empty()
		&& statement.persona.starts_with(prefix)
	{
		return false;
	}
	if let Some(persona) = params.persona.as_deref()
		&& statement.persona != persona
	{
		return false;
	}
	if let Some(conversation) = params.conversation.as_deref()
		&& statement.conversation != conversation
	{
		return false;
	}
	if !params.tags.is_empty() && !statement.tags.iter().any(|tag| params.tags.contains(tag)) {
		return false;
	}
	if params.exclude_text.iter().any(|text| *text == statement.text) {
		return false;
	}

	let lowered = statement.text.to_lowercase();

	if params
		.exclude_text_words
		.iter()
		.filter(|word| !word.is_empty())
		.any(|word| lowered.contains(&word.to_lowercase()))
	{
		return false;
	}
	if let Some(query) = params.search_in_response_to_contains.as_deref()
		&& !contains_any_word(&statement.search_in_response_to, query)
	{
		return false;
	}

	true
}

/// A query with no words matches every value.
fn contains_any_word(value: &str, query: &str) -> bool {
	let mut words = query.split_whitespace().peekable();

	if words.peek().is_none() {
		return true;
	}

	words.any(|word| value.contains(word))
}
