//! Business logic use cases
//!
//! One module per dashboard area. Each use case is a small struct over the
//! ports it needs, with an `execute` entry point; the onboarding area adds
//! the stateful [`onboarding::ProgressSession`], which owns the local mirror
//! of the milestone record.

pub mod clients;
pub mod cohorts;
pub mod documents;
pub mod imports;
pub mod notifications;
pub mod onboarding;
pub mod session;

pub use imports::ImportClients;
pub use onboarding::ProgressSession;
pub use session::{Login, Logout, SessionGuard};
