pub mod filter;
pub mod pipeline;
pub mod sort;

pub use filter::{FilterSpec, DEFAULT_MAX_RENT};
pub use pipeline::{search, SearchView};
pub use sort::SortKey;
