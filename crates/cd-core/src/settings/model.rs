use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the administration API, without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Upper bound on rows accepted from one sheet.
    pub max_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub import: ImportSettings,

    /// Default page size for the list views.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_per_page() -> u32 {
    20
}
