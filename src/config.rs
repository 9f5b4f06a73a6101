use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime settings, read from the environment (and an optional `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory backing the session store
    pub data_dir: PathBuf,
    /// JSON listings file; fixtures are used when unset
    pub properties_file: Option<PathBuf>,
    /// JSON inquiries file read alongside `properties_file`
    pub inquiries_file: Option<PathBuf>,
    pub auth_delay: Duration,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".rental"),
            properties_file: None,
            inquiries_file: None,
            auth_delay: Duration::from_millis(1000),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup("RENTAL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.properties_file = lookup("RENTAL_PROPERTIES_FILE").map(PathBuf::from);
        config.inquiries_file = lookup("RENTAL_INQUIRIES_FILE").map(PathBuf::from);
        if let Some(delay) = lookup("RENTAL_AUTH_DELAY_MS") {
            let millis: u64 = delay
                .trim()
                .parse()
                .with_context(|| format!("RENTAL_AUTH_DELAY_MS must be milliseconds, got {delay:?}"))?;
            config.auth_delay = Duration::from_millis(millis);
        }
        if let Some(level) = lookup("RENTAL_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("RENTAL_DATA_DIR", "/tmp/rental"),
            ("RENTAL_PROPERTIES_FILE", "listings.json"),
            ("RENTAL_INQUIRIES_FILE", "inquiries.json"),
            ("RENTAL_AUTH_DELAY_MS", "250"),
            ("RENTAL_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/rental"));
        assert_eq!(config.properties_file, Some(PathBuf::from("listings.json")));
        assert_eq!(config.inquiries_file, Some(PathBuf::from("inquiries.json")));
        assert_eq!(config.auth_delay, Duration::from_millis(250));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_delay_is_reported() {
        let err = Config::from_lookup(lookup(&[("RENTAL_AUTH_DELAY_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("RENTAL_AUTH_DELAY_MS"));
    }
}
