//! File-based token store
//!
//! Persists the session's bearer token to a JSON file in the application
//! data directory. Besides settings this is the only state the client keeps
//! between runs.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use cd_core::ports::TokenStorePort;

pub const DEFAULT_TOKEN_FILE: &str = ".session_token";

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

pub struct FileTokenStore {
    token_file_path: PathBuf,
}

impl FileTokenStore {
    /// Create store with custom file path
    pub fn new(token_file_path: PathBuf) -> Self {
        Self { token_file_path }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            token_file_path: base_dir.join(DEFAULT_TOKEN_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.token_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStorePort for FileTokenStore {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        if !self.token_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.token_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredToken = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stored token: {}", e))?;
        Ok(Some(stored.token))
    }

    async fn store(&self, token: &str) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;

        let mut file = fs::File::create(&self.token_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create token file: {}", e))?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.token_file_path.exists() {
            fs::remove_file(&self.token_file_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_means_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(temp_dir.path().join("nonexistent"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::with_defaults(temp_dir.path().to_path_buf());

        store.store("jwt-abc").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("jwt-abc"));
    }

    #[tokio::test]
    async fn clear_deletes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::with_defaults(temp_dir.path().to_path_buf());

        store.store("jwt-abc").await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        // Clearing an absent session is fine too.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn empty_file_reads_as_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token");
        fs::write(&path, "").await.unwrap();

        let store = FileTokenStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("token");
        fs::write(&path, "{broken").await.unwrap();

        let store = FileTokenStore::new(path);
        let result = store.load().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
