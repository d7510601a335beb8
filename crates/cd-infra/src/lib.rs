//! # cd-infra
//!
//! Infrastructure adapters for CohortDesk: the reqwest-backed REST surfaces,
//! the file-based token and settings stores, and the CSV tabular source.

pub mod http;
pub mod paths;
pub mod session;
pub mod settings;
pub mod tabular;

pub use http::{
    HttpAccountApi, HttpClientDirectory, HttpCohortApi, HttpDocumentApi, HttpNotificationApi,
    RestClient,
};
pub use session::FileTokenStore;
pub use settings::TomlSettingsStore;
pub use tabular::CsvTabularSource;
