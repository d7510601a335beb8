use std::time::Duration;

use super::model::*;

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { max_rows: 5_000 }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            api: ApiSettings::default(),
            import: ImportSettings::default(),
            per_page: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(settings.api.base_url.starts_with("http"));
        assert_eq!(settings.per_page, 20);
        assert!(settings.import.max_rows > 0);
    }
}
