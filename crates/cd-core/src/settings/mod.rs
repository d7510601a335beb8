//! Client settings models.

mod defaults;
mod model;

pub use model::{ApiSettings, ImportSettings, Settings, CURRENT_SCHEMA_VERSION};
