//! # cd-core
//!
//! Core domain models and business logic for CohortDesk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod account;
pub mod client;
pub mod cohort;
pub mod document;
pub mod error;
pub mod imports;
pub mod notification;
pub mod onboarding;
pub mod page;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use account::{AuthSession, Credentials, DetailsUpdate, UserProfile};
pub use client::{ClientDraft, ClientRecord, ClientStatus, ClientUpdate};
pub use cohort::{Cohort, CohortDraft, CohortUpdate};
pub use document::{DocumentKind, DocumentUpload, StoredDocument};
pub use error::ApiError;
pub use notification::{BroadcastAudience, BroadcastDraft, Notification, NotificationKind};
pub use onboarding::{DocumentFlags, FlagsPatch, Navigation, ProgressState};
pub use page::{Page, PageRequest};
