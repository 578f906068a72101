pub mod index;
pub mod lancaster;
pub mod language;
pub mod statement;
pub mod stop_words;
pub mod text;

mod error;

pub use error::{Error, Result};
pub use index::{LowercaseIndexer, TextIndexer};
pub use lancaster::LancasterStemmer;
pub use language::Language;
pub use statement::Statement;
pub use text::{NltkStyleProcessor, TextProcessor};
