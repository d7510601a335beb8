//! Adapter wiring
//!
//! Builds the [`AppDeps`] grouping from the infrastructure adapters: load
//! settings, construct the shared REST client, install any stored token.

use std::sync::Arc;

use cd_app::AppDeps;
use cd_core::ports::{SettingsPort, TokenStorePort};
use cd_core::settings::Settings;
use cd_infra::{
    paths, CsvTabularSource, FileTokenStore, HttpAccountApi, HttpClientDirectory, HttpCohortApi,
    HttpDocumentApi, HttpNotificationApi, RestClient, TomlSettingsStore,
};

pub struct AppContext {
    pub deps: AppDeps,
    pub settings: Settings,
    /// Whether a stored session token was found and installed.
    pub has_session: bool,
}

pub async fn build() -> anyhow::Result<AppContext> {
    let data_dir = paths::data_dir();

    let settings_store = Arc::new(TomlSettingsStore::with_defaults(data_dir.clone()));
    let settings = settings_store.load().await?;

    let rest = Arc::new(RestClient::new(
        settings.api.base_url.clone(),
        settings.api.request_timeout,
    )?);

    let token_store = Arc::new(FileTokenStore::with_defaults(data_dir));
    let token = token_store.load().await.unwrap_or(None);
    let has_session = token.is_some();
    if let Some(token) = token {
        rest.set_token(token).await;
    }

    let deps = AppDeps {
        account: Arc::new(HttpAccountApi::new(rest.clone())),
        clients: Arc::new(HttpClientDirectory::new(rest.clone())),
        cohorts: Arc::new(HttpCohortApi::new(rest.clone())),
        documents: Arc::new(HttpDocumentApi::new(rest.clone())),
        notifications: Arc::new(HttpNotificationApi::new(rest)),
        token_store,
        settings: settings_store,
        tabular: Arc::new(CsvTabularSource::new()),
    };

    Ok(AppContext {
        deps,
        settings,
        has_session,
    })
}
