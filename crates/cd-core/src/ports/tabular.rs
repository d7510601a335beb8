//! Tabular parser port
//!
//! The spreadsheet formats themselves are a black box; whatever parses them
//! only has to produce a header row plus data rows of cells.

use std::path::Path;

use async_trait::async_trait;

use crate::error::TabularError;
use crate::imports::TabularSheet;

#[async_trait]
pub trait TabularSourcePort: Send + Sync {
    async fn read(&self, path: &Path) -> Result<TabularSheet, TabularError>;
}
