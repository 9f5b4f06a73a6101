use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Inquiry, Property};

/// Where listings and inquiries come from.
/// New backends (a database, a remote API) plug in behind this trait.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load every property listing
    async fn properties(&self) -> Result<Vec<Property>>;

    /// Load every inquiry
    async fn inquiries(&self) -> Result<Vec<Inquiry>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
