use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use cd_core::client::ClientRecord;
use cd_core::imports::{detect_columns, map_rows, ColumnMap, RowIssue};
use cd_core::ports::{ClientDirectoryPort, TabularSourcePort};

/// What came out of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub column_map: ColumnMap,
    pub created: Vec<ClientRecord>,
    /// Rows rejected before any request was made (mapping/validation).
    pub skipped: Vec<RowIssue>,
    /// Rows the server rejected; the run keeps going past them.
    pub failed: Vec<RowIssue>,
    /// Rows dropped because the sheet exceeded the configured cap.
    pub truncated: usize,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty() && self.truncated == 0
    }
}

/// Use case for importing clients from an uploaded sheet.
///
/// Parse, detect the column mapping, validate rows, then create each valid
/// row through the directory endpoint. Row-level failures are collected in
/// the report rather than aborting the run.
pub struct ImportClients {
    tabular: Arc<dyn TabularSourcePort>,
    clients: Arc<dyn ClientDirectoryPort>,
    max_rows: usize,
}

impl ImportClients {
    pub fn new(
        tabular: Arc<dyn TabularSourcePort>,
        clients: Arc<dyn ClientDirectoryPort>,
        max_rows: usize,
    ) -> Self {
        Self {
            tabular,
            clients,
            max_rows,
        }
    }

    pub async fn execute(&self, path: &Path) -> anyhow::Result<ImportReport> {
        let sheet = self.tabular.read(path).await?;
        let column_map = detect_columns(&sheet.headers)?;

        let truncated = sheet.rows.len().saturating_sub(self.max_rows);
        if truncated > 0 {
            warn!(truncated, max_rows = self.max_rows, "sheet exceeds row cap");
        }
        let rows = &sheet.rows[..sheet.rows.len().min(self.max_rows)];

        let mapped = map_rows(rows, &column_map);
        let mut report = ImportReport {
            column_map,
            skipped: mapped.skipped,
            truncated,
            ..Default::default()
        };

        for mapped_row in &mapped.drafts {
            match self.clients.create(&mapped_row.draft).await {
                Ok(record) => report.created.push(record),
                Err(error) => {
                    warn!(email = %mapped_row.draft.email, %error, "import row rejected by server");
                    report.failed.push(RowIssue {
                        row: mapped_row.row,
                        reason: error.to_string(),
                    });
                }
            }
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "import finished"
        );
        Ok(report)
    }
}
