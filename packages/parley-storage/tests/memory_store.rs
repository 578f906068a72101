use parley_domain::Statement;
use parley_storage::{
	BOT_PERSONA_PREFIX, Error, FilterOverrides, FilterParams, MemoryStore, StatementStore,
};

const CORPUS_JSON: &str = r#"[
	{ "text": "Hello there", "search_text": "hello there", "persona": "user:ada", "conversation": "greetings", "tags": ["greeting"] },
	{ "text": "Hi! How can I help?", "search_text": "hi how can i help", "persona": "bot:parley", "conversation": "greetings" },
	{ "text": "The registry lives in the master file", "search_text": "NOUN:reg NOUN:mast NOUN:fil", "persona": "user:grace", "conversation": "ops", "tags": ["files"], "search_in_response_to": "where registry" },
	{ "text": "Hello again", "search_text": "hello again", "persona": "user:ada", "conversation": "greetings" }
]"#;

fn seeded_store() -> MemoryStore {
	let statements: Vec<Statement> = serde_json::from_str(CORPUS_JSON).unwrap();

	MemoryStore::with_statements(statements).unwrap()
}

fn texts(store: &MemoryStore, params: &FilterParams) -> Vec<String> {
	store.filter(params).unwrap().map(|statement| statement.text).collect()
}

#[test]
fn assigns_sequential_ids() {
	let store = seeded_store();
	let ids: Vec<_> =
		store.filter(&FilterParams::default()).unwrap().map(|statement| statement.id).collect();

	assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(3)]);
	assert_eq!(store.count().unwrap(), 4);
}

#[test]
fn search_text_contains_matches_any_word() {
	let store = seeded_store();
	let params = FilterParams {
		search_text_contains: Some("hello NOUN:fil".to_string()),
		..Default::default()
	};

	assert_eq!(
		texts(&store, &params),
		vec!["Hello there", "The registry lives in the master file", "Hello again"]
	);
}

#[test]
fn excludes_bot_personas() {
	let store = seeded_store();
	let params = FilterParams {
		persona_not_startswith: Some(BOT_PERSONA_PREFIX.to_string()),
		conversation: Some("greetings".to_string()),
		..Default::default()
	};

	assert_eq!(texts(&store, &params), vec!["Hello there", "Hello again"]);
}

#[test]
fn page_size_caps_a_single_call() {
	let store = seeded_store();
	let params = FilterParams { page_size: 2, ..Default::default() };

	assert_eq!(texts(&store, &params).len(), 2);
}

#[test]
fn rejects_zero_page_size() {
	let store = seeded_store();
	let params = FilterParams { page_size: 0, ..Default::default() };

	assert!(matches!(store.filter(&params), Err(Error::InvalidArgument(_))));
}

#[test]
fn applies_tag_and_exclusion_predicates() {
	let store = seeded_store();
	let tagged = FilterParams { tags: vec!["files".to_string()], ..Default::default() };

	assert_eq!(texts(&store, &tagged), vec!["The registry lives in the master file"]);

	let excluded = FilterParams::default().merge(FilterOverrides {
		exclude_text: Some(vec!["Hello there".to_string()]),
		exclude_text_words: Some(vec!["REGISTRY".to_string()]),
		persona: Some("user:ada".to_string()),
		..Default::default()
	});

	assert_eq!(texts(&store, &excluded), vec!["Hello again"]);
}

#[test]
fn filters_on_response_search_text() {
	let store = seeded_store();
	let params = FilterParams {
		search_in_response_to_contains: Some("registry".to_string()),
		..Default::default()
	};

	assert_eq!(texts(&store, &params), vec!["The registry lives in the master file"]);
}

#[test]
fn update_and_remove_change_contents() {
	let store = seeded_store();
	let mut first = store.filter(&FilterParams::default()).unwrap().next().unwrap();

	first.text = "Hello world".to_string();
	store.update(first).unwrap();

	let missing = Statement { id: Some(99), ..Statement::new("ghost") };

	assert!(matches!(store.update(missing), Err(Error::NotFound(_))));
	assert!(matches!(store.update(Statement::new("no id")), Err(Error::InvalidArgument(_))));
	assert_eq!(store.remove("Hello again").unwrap(), 1);
	assert_eq!(
		texts(&store, &FilterParams::default()),
		vec!["Hello world", "Hi! How can I help?", "The registry lives in the master file"]
	);

	store.drop_all().unwrap();

	assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn empty_persona_prefix_excludes_nothing() {
	let store = seeded_store();
	let params = FilterParams {
		persona_not_startswith: Some(BOT_PERSONA_PREFIX.to_string()),
		..Default::default()
	}
	.merge(FilterOverrides { persona_not_startswith: Some(String::new()), ..Default::default() });

	assert_eq!(texts(&store, &params).len(), 4);
}

#[test]
fn empty_exclusion_words_are_ignored() {
	let store = seeded_store();
	let params = FilterParams {
		exclude_text_words: vec![String::new(), "again".to_string()],
		..Default::default()
	};

	assert_eq!(
		texts(&store, &params),
		vec!["Hello there", "Hi! How can I help?", "The registry lives in the master file"]
	);
}
