pub mod memory;
pub mod params;

mod error;

pub use error::Error;
pub use memory::MemoryStore;
pub use params::{BOT_PERSONA_PREFIX, DEFAULT_PAGE_SIZE, FilterOverrides, FilterParams};

use parley_domain::Statement;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A finite, single-pass stream of stored statements for one query.
pub type Candidates = Box<dyn Iterator<Item = Statement> + Send>;

pub trait StatementStore
where
	Self: Send + Sync,
{
	/// Returns at most `params.page_size` statements matching every set predicate. The order is
	/// store-defined.
	fn filter(&self, params: &FilterParams) -> Result<Candidates>;
}
