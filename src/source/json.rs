use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Inquiry, Property};
use crate::source::traits::PropertySource;

/// Reads properties from a JSON array on disk.
///
/// Inquiries are read from a sibling file when one is configured; otherwise there are none.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    properties_path: PathBuf,
    inquiries_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(properties_path: impl Into<PathBuf>) -> Self {
        Self {
            properties_path: properties_path.into(),
            inquiries_path: None,
        }
    }

    pub fn with_inquiries(mut self, inquiries_path: impl Into<PathBuf>) -> Self {
        self.inquiries_path = Some(inquiries_path.into());
        self
    }

    pub fn properties_path(&self) -> &Path {
        &self.properties_path
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path).await?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(serde_json::from_str(&raw)?)
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn properties(&self) -> Result<Vec<Property>> {
        let properties: Vec<Property> = read_json(&self.properties_path).await?;
        info!(
            "Loaded {} properties from {}",
            properties.len(),
            self.properties_path.display()
        );
        Ok(properties)
    }

    async fn inquiries(&self) -> Result<Vec<Inquiry>> {
        match &self.inquiries_path {
            Some(path) => read_json(path).await,
            None => Ok(Vec::new()),
        }
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use crate::source::fixtures::{mock_inquiries, mock_properties};
    use testresult::TestResult;

    #[tokio::test]
    async fn reads_back_what_was_written() -> TestResult {
        let dir = tempfile::tempdir()?;
        let properties_path = dir.path().join("properties.json");
        let inquiries_path = dir.path().join("inquiries.json");
        tokio::fs::write(&properties_path, serde_json::to_string_pretty(&mock_properties())?).await?;
        tokio::fs::write(&inquiries_path, serde_json::to_string(&mock_inquiries())?).await?;

        let source = JsonFileSource::new(&properties_path).with_inquiries(&inquiries_path);
        assert_eq!(source.properties().await?, mock_properties());
        assert_eq!(source.inquiries().await?, mock_inquiries());
        Ok(())
    }

    #[tokio::test]
    async fn missing_inquiries_file_means_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let source = JsonFileSource::new(dir.path().join("properties.json"));
        assert!(source.inquiries().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_a_json_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("properties.json");
        tokio::fs::write(&path, "{ not json").await?;

        let result = JsonFileSource::new(&path).properties().await;
        assert!(matches!(result, Err(MarketError::Json(_))));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = JsonFileSource::new("/nonexistent/properties.json").properties().await;
        assert!(matches!(result, Err(MarketError::Io(_))));
    }
}
