use std::{fmt, str::FromStr};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
	English,
}
impl Language {
	pub fn from_code(code: &str) -> Result<Self> {
		match code.trim().to_ascii_lowercase().as_str() {
			"en" | "eng" | "english" => Ok(Self::English),
			_ => Err(Error::UnsupportedLanguage { code: code.to_string() }),
		}
	}

	/// ISO 639-1 code.
	pub fn code(self) -> &'static str {
		match self {
			Self::English => "en",
		}
	}

	/// Name used to look up language resources such as stop-word lists.
	pub fn name(self) -> &'static str {
		match self {
			Self::English => "english",
		}
	}
}
impl FromStr for Language {
	type Err = Error;

	fn from_str(code: &str) -> Result<Self> {
		Self::from_code(code)
	}
}
impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}
