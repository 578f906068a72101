use parley_domain::{
	Error, Language, LowercaseIndexer, NltkStyleProcessor, Statement, TextIndexer, TextProcessor,
};

#[test]
fn statement_deserializes_with_missing_fields() {
	let statement: Statement =
		serde_json::from_str(r#"{ "text": "Hello there", "persona": "user:ada" }"#).unwrap();

	assert_eq!(statement.text, "Hello there");
	assert_eq!(statement.persona, "user:ada");
	assert!(statement.search_text.is_empty());
	assert!(statement.tags.is_empty());
	assert_eq!(statement.in_response_to, None);
	assert_eq!(statement.confidence, 0.0);
}

#[test]
fn statement_builder_sets_metadata() {
	let statement = Statement::new("Where is the master file?")
		.with_search_text("where master file")
		.with_persona("user:grace")
		.with_conversation("support")
		.with_tags(["files", "ops"])
		.with_in_response_to("Hi")
		.with_search_in_response_to("hi");

	assert_eq!(statement.search_text, "where master file");
	assert_eq!(statement.conversation, "support");
	assert_eq!(statement.tags, vec!["files".to_string(), "ops".to_string()]);
	assert_eq!(statement.in_response_to.as_deref(), Some("Hi"));
	assert_eq!(statement.search_in_response_to, "hi");
}

#[test]
fn english_stop_words_include_negations() {
	let words = NltkStyleProcessor::new().stop_words(Language::English).unwrap();

	for word in ["ain", "not", "the", "what"] {
		assert!(words.iter().any(|w| w == word), "missing stop word {word}");
	}
}

#[test]
fn processor_tokenizes_lowercased_questions() {
	let processor = NltkStyleProcessor::new();
	let tokens = processor.tokenize(&"Where is the INI file?".to_lowercase()).unwrap();

	assert_eq!(tokens, vec!["where", "is", "the", "ini", "file", "?"]);
}

#[test]
fn indexer_output_is_stable() {
	let indexer = LowercaseIndexer;
	let once = indexer.index_string("The  Registry");

	assert_eq!(once, "the registry");
	assert_eq!(indexer.index_string(&once), once);
}

#[test]
fn language_code_round_trips_through_display() {
	let language: Language = "eng".parse().unwrap();

	assert_eq!(language.to_string(), "en");
	assert_eq!(language.name(), "english");
	assert!(matches!("xx".parse::<Language>(), Err(Error::UnsupportedLanguage { .. })));
}
