//! Rental marketplace core: property search, listing details, role
//! dashboards and a stub session.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod session;
pub mod source;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{MarketError, Result};
pub use search::{search, FilterSpec, SearchView, SortKey};
pub use session::Session;
