//! TOML-backed settings store
//!
//! Loads [`Settings`] from a TOML file in the application data directory,
//! falling back to defaults when the file does not exist yet.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use cd_core::ports::SettingsPort;
use cd_core::settings::Settings;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

pub struct TomlSettingsStore {
    settings_file_path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(settings_file_path: PathBuf) -> Self {
        Self { settings_file_path }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            settings_file_path: base_dir.join(DEFAULT_SETTINGS_FILE),
        }
    }
}

#[async_trait]
impl SettingsPort for TomlSettingsStore {
    async fn load(&self) -> anyhow::Result<Settings> {
        if !self.settings_file_path.exists() {
            debug!(path = %self.settings_file_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.settings_file_path).await?;
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings: {}", e))?;
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.settings_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.settings_file_path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::with_defaults(temp_dir.path().to_path_buf());

        let settings = store.load().await.unwrap();
        assert_eq!(settings.per_page, Settings::default().per_page);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlSettingsStore::with_defaults(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api.base_url = "https://admin.example.org/api".into();
        settings.per_page = 50;
        store.save(&settings).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.api.base_url, "https://admin.example.org/api");
        assert_eq!(loaded.per_page, 50);
    }

    #[tokio::test]
    async fn unparseable_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "not [valid").await.unwrap();

        let store = TomlSettingsStore::new(path);
        assert!(store.load().await.is_err());
    }
}
