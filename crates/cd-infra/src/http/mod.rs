//! REST adapters
//!
//! One adapter per API surface, all sharing the [`RestClient`] wrapper that
//! owns the base URL, the bearer token, and the error mapping.

mod account;
mod clients;
mod cohorts;
mod documents;
mod notifications;
mod rest_client;

pub use account::HttpAccountApi;
pub use clients::HttpClientDirectory;
pub use cohorts::HttpCohortApi;
pub use documents::HttpDocumentApi;
pub use notifications::HttpNotificationApi;
pub use rest_client::RestClient;
