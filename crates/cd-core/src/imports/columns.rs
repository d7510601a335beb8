//! Column auto-detection
//!
//! Headers arrive in whatever shape the uploaded sheet used ("E-Mail",
//! "first name", "Telefon"). Detection normalizes each header and matches it
//! against per-role synonym tables; the first match wins per role, and a
//! header is consumed by at most one role.

use crate::error::ImportError;

/// Client fields a sheet column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Cohort,
}

const ROLE_SYNONYMS: &[(ColumnRole, &[&str])] = &[
    (
        ColumnRole::FirstName,
        &["firstname", "givenname", "vorname", "first"],
    ),
    (
        ColumnRole::LastName,
        &["lastname", "surname", "familyname", "nachname", "last"],
    ),
    (ColumnRole::FullName, &["name", "fullname", "client", "participant"]),
    (ColumnRole::Email, &["email", "mail", "emailaddress"]),
    (
        ColumnRole::Phone,
        &["phone", "phonenumber", "mobile", "telefon", "tel"],
    ),
    (ColumnRole::Cohort, &["cohort", "group", "gruppe", "batch"]),
];

/// Which sheet column (by index) feeds which client field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub first_name: Option<usize>,
    pub last_name: Option<usize>,
    pub full_name: Option<usize>,
    pub email: Option<usize>,
    pub phone: Option<usize>,
    pub cohort: Option<usize>,
}

impl ColumnMap {
    /// A mapping is usable once it can produce an email and some name.
    pub fn is_usable(&self) -> bool {
        self.email.is_some()
            && (self.full_name.is_some()
                || (self.first_name.is_some() && self.last_name.is_some()))
    }

    fn slot(&mut self, role: ColumnRole) -> &mut Option<usize> {
        match role {
            ColumnRole::FirstName => &mut self.first_name,
            ColumnRole::LastName => &mut self.last_name,
            ColumnRole::FullName => &mut self.full_name,
            ColumnRole::Email => &mut self.email,
            ColumnRole::Phone => &mut self.phone,
            ColumnRole::Cohort => &mut self.cohort,
        }
    }
}

/// Lowercase and strip everything that is not a letter or digit, so
/// "E-Mail Address" and "emailaddress" compare equal.
fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Detect the column mapping from a header row.
///
/// Returns an error when no usable mapping exists; the caller surfaces the
/// missing roles so the operator can fix the sheet.
pub fn detect_columns(headers: &[String]) -> Result<ColumnMap, ImportError> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize(h)).collect();
    let mut map = ColumnMap::default();
    let mut consumed = vec![false; headers.len()];

    for (role, synonyms) in ROLE_SYNONYMS {
        for (idx, header) in normalized.iter().enumerate() {
            if consumed[idx] || header.is_empty() {
                continue;
            }
            if synonyms.contains(&header.as_str()) {
                *map.slot(*role) = Some(idx);
                consumed[idx] = true;
                break;
            }
        }
    }

    if !map.is_usable() {
        let mut missing = Vec::new();
        if map.email.is_none() {
            missing.push("email");
        }
        if map.full_name.is_none() && (map.first_name.is_none() || map.last_name.is_none()) {
            missing.push("name");
        }
        return Err(ImportError::UnmappedColumns(missing.join(", ")));
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn detects_canonical_headers() {
        let map =
            detect_columns(&headers(&["First Name", "Last Name", "Email", "Phone"])).unwrap();
        assert_eq!(map.first_name, Some(0));
        assert_eq!(map.last_name, Some(1));
        assert_eq!(map.email, Some(2));
        assert_eq!(map.phone, Some(3));
        assert!(map.is_usable());
    }

    #[test]
    fn detection_ignores_case_and_punctuation() {
        let map = detect_columns(&headers(&["E-Mail Address", "VORNAME", "nach_name"])).unwrap();
        assert_eq!(map.email, Some(0));
        assert_eq!(map.first_name, Some(1));
        assert_eq!(map.last_name, Some(2));
    }

    #[test]
    fn full_name_column_satisfies_the_name_requirement() {
        let map = detect_columns(&headers(&["Participant", "Mail", "Group"])).unwrap();
        assert_eq!(map.full_name, Some(0));
        assert_eq!(map.cohort, Some(2));
        assert!(map.is_usable());
    }

    #[test]
    fn a_header_feeds_at_most_one_role() {
        // "name" could be full-name; it must not also be claimed as last name.
        let map = detect_columns(&headers(&["name", "email"])).unwrap();
        assert_eq!(map.full_name, Some(0));
        assert_eq!(map.last_name, None);
    }

    #[test]
    fn missing_email_column_is_rejected() {
        let err = detect_columns(&headers(&["First Name", "Last Name"])).unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
