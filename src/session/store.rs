use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::Result;

/// Durable string slots addressed by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store, gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.slots.lock().await.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No stored value at {}", path.display());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    async fn exercise(store: &dyn KeyValueStore) -> TestResult {
        assert_eq!(store.get("user").await?, None);

        store.set("user", "first").await?;
        store.set("user", "second").await?;
        assert_eq!(store.get("user").await?.as_deref(), Some("second"));

        store.remove("user").await?;
        store.remove("user").await?;
        assert_eq!(store.get("user").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn memory_store_last_write_wins() -> TestResult {
        exercise(&MemoryStore::new()).await
    }

    #[tokio::test]
    async fn file_store_last_write_wins() -> TestResult {
        let dir = tempfile::tempdir()?;
        exercise(&FileStore::new(dir.path().join("nested"))).await
    }

    #[tokio::test]
    async fn file_store_survives_reopen() -> TestResult {
        let dir = tempfile::tempdir()?;
        FileStore::new(dir.path()).set("user", "{}").await?;
        assert_eq!(FileStore::new(dir.path()).get("user").await?.as_deref(), Some("{}"));
        Ok(())
    }
}
