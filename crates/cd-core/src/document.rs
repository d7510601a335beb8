//! Uploaded document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which onboarding milestone an uploaded file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    IdentityDocument,
    ParticipationContract,
    ConsultingContract,
    AuthorityDocument,
}

impl DocumentKind {
    /// The onboarding step this document kind completes.
    pub fn step(&self) -> u8 {
        match self {
            DocumentKind::IdentityDocument => 1,
            DocumentKind::ParticipationContract => 2,
            DocumentKind::ConsultingContract => 3,
            DocumentKind::AuthorityDocument => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::IdentityDocument => "identity_document",
            DocumentKind::ParticipationContract => "participation_contract",
            DocumentKind::ConsultingContract => "consulting_contract",
            DocumentKind::AuthorityDocument => "authority_document",
        }
    }
}

/// Server-side record of an uploaded file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    #[serde(alias = "_id")]
    pub id: String,
    pub kind: DocumentKind,
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Payload for a multipart document upload.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub kind: DocumentKind,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_gate_order() {
        assert_eq!(DocumentKind::IdentityDocument.step(), 1);
        assert_eq!(DocumentKind::AuthorityDocument.step(), 4);
    }

    #[test]
    fn kind_round_trips_through_its_wire_name() {
        let json = serde_json::to_string(&DocumentKind::ConsultingContract).unwrap();
        assert_eq!(json, r#""consulting_contract""#);
        let kind: DocumentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, DocumentKind::ConsultingContract);
    }
}
