//! Application dependency grouping
//!
//! Not a builder: no build steps, no defaults, no hidden logic, just the
//! struct the shell packs its adapters into.

use std::sync::Arc;

use cd_core::ports::*;

pub struct AppDeps {
    // REST surfaces
    pub account: Arc<dyn AccountApiPort>,
    pub clients: Arc<dyn ClientDirectoryPort>,
    pub cohorts: Arc<dyn CohortApiPort>,
    pub documents: Arc<dyn DocumentApiPort>,
    pub notifications: Arc<dyn NotificationApiPort>,

    // Local state
    pub token_store: Arc<dyn TokenStorePort>,
    pub settings: Arc<dyn SettingsPort>,

    // Import pipeline
    pub tabular: Arc<dyn TabularSourcePort>,
}
