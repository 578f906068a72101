mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Comparison, Config, DEFAULT_PAGE_SIZE, DEFAULT_PERSONA_EXCLUDE_PREFIX, Search};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn from_toml_str(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw).map_err(|err| Error::ParseInline { source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if !matches!(cfg.search.algorithm.as_str(), "indexed_text_search" | "text_search") {
		return Err(Error::Validation {
			message: "search.algorithm must be one of indexed_text_search or text_search."
				.to_string(),
		});
	}
	if cfg.search.page_size == 0 {
		return Err(Error::Validation {
			message: "search.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.persona_exclude_prefix.is_empty() {
		return Err(Error::Validation {
			message: "search.persona_exclude_prefix must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.comparison.kind.as_str(), "levenshtein" | "jaccard") {
		return Err(Error::Validation {
			message: "comparison.kind must be one of levenshtein or jaccard.".to_string(),
		});
	}
	if cfg.comparison.language.is_empty() {
		return Err(Error::Validation {
			message: "comparison.language must be non-empty.".to_string(),
		});
	}

	let threshold = cfg.comparison.maximum_similarity_threshold;

	if !threshold.is_finite() {
		return Err(Error::Validation {
			message: "comparison.maximum_similarity_threshold must be a finite number."
				.to_string(),
		});
	}
	if !(0.0..=1.0).contains(&threshold) {
		return Err(Error::Validation {
			message: "comparison.maximum_similarity_threshold must be in the range 0.0-1.0."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.search.algorithm = cfg.search.algorithm.trim().to_ascii_lowercase();
	cfg.comparison.kind = cfg.comparison.kind.trim().to_ascii_lowercase();
	cfg.comparison.language = cfg.comparison.language.trim().to_string();
}
