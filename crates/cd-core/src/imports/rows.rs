//! Row mapping and validation
//!
//! Turns raw sheet rows into client drafts using a detected [`ColumnMap`].
//! Rows that cannot be mapped are collected with their reason instead of
//! aborting the run.

use crate::client::ClientDraft;

use super::ColumnMap;

/// A row skipped during mapping, with its 1-based data row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub row: usize,
    pub reason: String,
}

/// A draft together with the 1-based sheet row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRow {
    pub row: usize,
    pub draft: ClientDraft,
}

/// Result of mapping a whole sheet.
#[derive(Debug, Clone, Default)]
pub struct MappedRows {
    pub drafts: Vec<MappedRow>,
    pub skipped: Vec<RowIssue>,
}

fn cell(row: &[String], idx: Option<usize>) -> Option<String> {
    let value = row.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Minimal shape check; real validation is the server's job.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Split "Ada Lovelace" into first/last; a single token becomes the first
/// name with an empty last name.
fn split_full_name(full: &str) -> (String, String) {
    match full.rsplit_once(' ') {
        Some((first, last)) => (first.trim().to_string(), last.trim().to_string()),
        None => (full.to_string(), String::new()),
    }
}

/// Map data rows into drafts, skipping rows with missing or malformed
/// required fields and deduplicating by email within the sheet.
pub fn map_rows(rows: &[Vec<String>], map: &ColumnMap) -> MappedRows {
    let mut mapped = MappedRows::default();
    let mut seen_emails: Vec<String> = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let row_no = idx + 1;

        let email = match cell(row, map.email) {
            Some(value) if looks_like_email(&value) => value.to_lowercase(),
            Some(value) => {
                mapped.skipped.push(RowIssue {
                    row: row_no,
                    reason: format!("malformed email: {value}"),
                });
                continue;
            }
            None => {
                mapped.skipped.push(RowIssue {
                    row: row_no,
                    reason: "missing email".into(),
                });
                continue;
            }
        };

        if seen_emails.contains(&email) {
            mapped.skipped.push(RowIssue {
                row: row_no,
                reason: format!("duplicate email: {email}"),
            });
            continue;
        }

        let (first_name, last_name) = match (cell(row, map.first_name), cell(row, map.last_name)) {
            (Some(first), Some(last)) => (first, last),
            _ => match cell(row, map.full_name) {
                Some(full) => split_full_name(&full),
                None => {
                    mapped.skipped.push(RowIssue {
                        row: row_no,
                        reason: "missing name".into(),
                    });
                    continue;
                }
            },
        };

        seen_emails.push(email.clone());
        mapped.drafts.push(MappedRow {
            row: row_no,
            draft: ClientDraft {
                first_name,
                last_name,
                email,
                phone: cell(row, map.phone),
                cohort_id: cell(row, map.cohort),
            },
        });
    }

    mapped
}
