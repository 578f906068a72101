pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Config(#[from] parley_config::Error),
	#[error(transparent)]
	Domain(#[from] parley_domain::Error),
	#[error(transparent)]
	Storage(#[from] parley_storage::Error),
	#[error("Comparison failed: {message}")]
	Comparison { message: String },
	#[error("Invalid configuration: {message}")]
	InvalidConfig { message: String },
}
