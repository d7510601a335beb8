//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of the REST collaborator and the local filesystem.

mod account;
mod clients;
mod cohorts;
mod documents;
mod notifications;
mod session;
mod settings;
mod tabular;

pub use account::AccountApiPort;
pub use clients::ClientDirectoryPort;
pub use cohorts::CohortApiPort;
pub use documents::DocumentApiPort;
pub use notifications::NotificationApiPort;
pub use session::TokenStorePort;
pub use settings::SettingsPort;
pub use tabular::TabularSourcePort;
