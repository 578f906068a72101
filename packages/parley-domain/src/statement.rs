use serde::{Deserialize, Serialize};

/// One stored or incoming utterance plus the metadata retrieval reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statement {
	pub id: Option<u64>,
	pub text: String,
	/// Precomputed index form of `text`. Empty when the producer never indexed it.
	pub search_text: String,
	pub conversation: String,
	pub persona: String,
	pub tags: Vec<String>,
	pub in_response_to: Option<String>,
	pub search_in_response_to: String,
	/// Written by search strategies on the statements they yield.
	pub confidence: f32,
}
impl Statement {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into(), ..Default::default() }
	}

	pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
		self.search_text = search_text.into();

		self
	}

	pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
		self.persona = persona.into();

		self
	}

	pub fn with_conversation(mut self, conversation: impl Into<String>) -> Self {
		self.conversation = conversation.into();

		self
	}

	pub fn with_tags<I, T>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();

		self
	}

	pub fn with_in_response_to(mut self, in_response_to: impl Into<String>) -> Self {
		self.in_response_to = Some(in_response_to.into());

		self
	}

	pub fn with_search_in_response_to(mut self, search_in_response_to: impl Into<String>) -> Self {
		self.search_in_response_to = search_in_response_to.into();

		self
	}
}
