pub mod fixtures;
pub mod json;
pub mod traits;

pub use json::JsonFileSource;
pub use traits::PropertySource;

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Inquiry, Property};

/// Listings file from `config` (with its inquiries file, if any), else the fixtures
pub fn from_config(config: &Config) -> Box<dyn PropertySource> {
    match &config.properties_file {
        Some(path) => {
            let mut source = JsonFileSource::new(path);
            if let Some(inquiries) = &config.inquiries_file {
                source = source.with_inquiries(inquiries);
            }
            Box::new(source)
        }
        None => Box::new(FixtureSource),
    }
}

/// Source backed by the static fixtures
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

#[async_trait]
impl PropertySource for FixtureSource {
    async fn properties(&self) -> Result<Vec<Property>> {
        let properties = fixtures::mock_properties();
        info!("📋 Loaded {} fixture properties", properties.len());
        Ok(properties)
    }

    async fn inquiries(&self) -> Result<Vec<Inquiry>> {
        Ok(fixtures::mock_inquiries())
    }

    fn source_name(&self) -> &'static str {
        "fixtures"
    }
}
