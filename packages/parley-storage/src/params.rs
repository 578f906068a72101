pub const BOT_PERSONA_PREFIX: &str = "bot:";
pub const DEFAULT_PAGE_SIZE: usize = 1_000;

/// Filter criteria for one retrieval call. Unset predicates match everything.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
	/// Matches statements whose `search_text` contains any whitespace-separated word of this
	/// value.
	pub search_text_contains: Option<String>,
	pub persona_not_startswith: Option<String>,
	pub page_size: usize,
	pub conversation: Option<String>,
	pub persona: Option<String>,
	/// Matches statements carrying at least one of these tags.
	pub tags: Vec<String>,
	pub exclude_text: Vec<String>,
	pub exclude_text_words: Vec<String>,
	pub search_in_response_to_contains: Option<String>,
}
impl FilterParams {
	/// Applies `overrides` key by key. Every key the caller sets replaces the current value.
	pub fn merge(mut self, overrides: FilterOverrides) -> Self {
		let FilterOverrides {
			search_text_contains,
			persona_not_startswith,
			page_size,
			conversation,
			persona,
			tags,
			exclude_text,
			exclude_text_words,
			search_in_response_to_contains,
		} = overrides;

		if let Some(value) = search_text_contains {
			self.search_text_contains = Some(value);
		}
		if let Some(value) = persona_not_startswith {
			self.persona_not_startswith = Some(value);
		}
		if let Some(value) = page_size {
			self.page_size = value;
		}
		if let Some(value) = conversation {
			self.conversation = Some(value);
		}
		if let Some(value) = persona {
			self.persona = Some(value);
		}
		if let Some(value) = tags {
			self.tags = value;
		}
		if let Some(value) = exclude_text {
			self.exclude_text = value;
		}
		if let Some(value) = exclude_text_words {
			self.exclude_text_words = value;
		}
		if let Some(value) = search_in_response_to_contains {
			self.search_in_response_to_contains = Some(value);
		}

		self
	}
}
impl Default for FilterParams {
	fn default() -> Self {
		Self {
			search_text_contains: None,
			persona_not_startswith: None,
			page_size: DEFAULT_PAGE_SIZE,
			conversation: None,
			persona: None,
			tags: Vec::new(),
			exclude_text: Vec::new(),
			exclude_text_words: Vec::new(),
			search_in_response_to_contains: None,
		}
	}
}

/// Caller-supplied filter keys layered over a strategy's defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOverrides {
	pub search_text_contains: Option<String>,
	pub persona_not_startswith: Option<String>,
	pub page_size: Option<usize>,
	pub conversation: Option<String>,
	pub persona: Option<String>,
	pub tags: Option<Vec<String>>,
	pub exclude_text: Option<Vec<String>>,
	pub exclude_text_words: Option<Vec<String>>,
	pub search_in_response_to_contains: Option<String>,
}
impl FilterOverrides {
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}
