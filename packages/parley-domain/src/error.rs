pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unsupported language code: {code}.")]
	UnsupportedLanguage { code: String },
	#[error("Tokenizer failed: {message}")]
	Tokenize { message: String },
	#[error("Stemmer failed: {message}")]
	Stem { message: String },
}
