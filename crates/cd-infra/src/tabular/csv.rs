//! CSV tabular source
//!
//! Reads a comma-separated file into a header row plus data rows. Handles
//! quoted fields, doubled quotes inside them, and CRLF line endings. An
//! unclosed quote at end of line is reported rather than silently swallowed;
//! multi-line quoted fields are not supported by the dashboards that feed
//! sheets into this client.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use cd_core::error::TabularError;
use cd_core::imports::TabularSheet;
use cd_core::ports::TabularSourcePort;

pub struct CsvTabularSource;

impl CsvTabularSource {
    pub fn new() -> Self {
        CsvTabularSource
    }
}

impl Default for CsvTabularSource {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<String>, TabularError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(TabularError::Malformed {
            line: line_no,
            message: "unclosed quote".into(),
        });
    }

    fields.push(current);
    Ok(fields)
}

#[async_trait]
impl TabularSourcePort for CsvTabularSource {
    async fn read(&self, path: &Path) -> Result<TabularSheet, TabularError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension != "csv" {
            return Err(TabularError::Unsupported(extension));
        }

        let content = fs::read_to_string(path).await?;
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (first_no, header_line) = lines.next().ok_or(TabularError::Empty)?;
        let headers = parse_row(header_line, first_no + 1)?;

        let mut rows = Vec::new();
        for (idx, line) in lines {
            rows.push(parse_row(line, idx + 1)?);
        }

        debug!(path = %path.display(), rows = rows.len(), "sheet parsed");
        Ok(TabularSheet { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_sheet(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn reads_headers_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(
            &dir,
            "clients.csv",
            "Name,Email\r\nAda Lovelace,ada@example.org\r\nAlan Turing,alan@example.org\r\n",
        )
        .await;

        let sheet = CsvTabularSource::new().read(&path).await.unwrap();
        assert_eq!(sheet.headers, vec!["Name", "Email"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][0], "Alan Turing");
    }

    #[tokio::test]
    async fn quoted_fields_keep_commas_and_doubled_quotes() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(
            &dir,
            "clients.csv",
            "Name,Email\n\"Lovelace, Ada\",ada@example.org\n\"The \"\"Countess\"\"\",c@example.org\n",
        )
        .await;

        let sheet = CsvTabularSource::new().read(&path).await.unwrap();
        assert_eq!(sheet.rows[0][0], "Lovelace, Ada");
        assert_eq!(sheet.rows[1][0], "The \"Countess\"");
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(
            &dir,
            "clients.csv",
            "Name,Email\n\nAda Lovelace,ada@example.org\n\n",
        )
        .await;

        let sheet = CsvTabularSource::new().read(&path).await.unwrap();
        assert_eq!(sheet.rows.len(), 1);
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(&dir, "clients.csv", "").await;

        let error = CsvTabularSource::new().read(&path).await.unwrap_err();
        assert!(matches!(error, TabularError::Empty));
    }

    #[tokio::test]
    async fn unclosed_quote_reports_the_line() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(&dir, "clients.csv", "Name,Email\n\"broken,ada@example.org\n").await;

        let error = CsvTabularSource::new().read(&path).await.unwrap_err();
        match error {
            TabularError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_extensions_are_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_sheet(&dir, "clients.xlsx", "zip bytes").await;

        let error = CsvTabularSource::new().read(&path).await.unwrap_err();
        assert!(matches!(error, TabularError::Unsupported(ext) if ext == "xlsx"));
    }
}
