//! Onboarding domain models
//!
//! This module defines the core domain models for the client onboarding flow:
//! the server-held document milestone flags, the progress state derived from
//! them, and the step navigation rules that gate the dashboard's step cards.

mod navigator;
mod progress;
mod reconcile;
mod steps;

pub use navigator::{request_step, Navigation};
pub use progress::compute_progress;
pub use reconcile::{force_early_milestones, reconcile};
pub use steps::{step_definitions, StepDefinition};

use serde::{Deserialize, Serialize};

/// Number of onboarding milestones contributing to the completion percentage.
pub const MILESTONE_COUNT: u8 = 5;

/// Last reachable step value. Only four step cards are rendered; the
/// app-install milestone acts as an implicit final step.
pub const FINAL_STEP: u8 = 5;

/// Server-held document milestone record for a single client.
///
/// Field names mirror the `documents` object on the user record; fields the
/// server omits read as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentFlags {
    pub identity_document_uploaded: bool,
    /// Paired with `participation_contract_signed`; kept for wire
    /// compatibility, never consulted on its own.
    pub participation_contract_generated: bool,
    pub participation_contract_signed: bool,
    pub consulting_contract_signed: bool,
    pub authority_document_signed: bool,
    pub app_installed: bool,
}

impl DocumentFlags {
    /// Milestones counted towards the completion percentage, in gate order.
    pub fn milestones(&self) -> [bool; MILESTONE_COUNT as usize] {
        [
            self.identity_document_uploaded,
            self.participation_contract_signed,
            self.consulting_contract_signed,
            self.authority_document_signed,
            self.app_installed,
        ]
    }

    /// The prerequisite flag for being on `step` (1-based).
    pub fn milestone_for_step(&self, step: u8) -> bool {
        match step {
            1 => self.identity_document_uploaded,
            2 => self.participation_contract_signed,
            3 => self.consulting_contract_signed,
            4 => self.authority_document_signed,
            _ => self.app_installed,
        }
    }

    /// Apply a partial update, leaving unset fields untouched.
    pub fn apply(&self, patch: &FlagsPatch) -> DocumentFlags {
        DocumentFlags {
            identity_document_uploaded: patch
                .identity_document_uploaded
                .unwrap_or(self.identity_document_uploaded),
            participation_contract_generated: patch
                .participation_contract_generated
                .unwrap_or(self.participation_contract_generated),
            participation_contract_signed: patch
                .participation_contract_signed
                .unwrap_or(self.participation_contract_signed),
            consulting_contract_signed: patch
                .consulting_contract_signed
                .unwrap_or(self.consulting_contract_signed),
            authority_document_signed: patch
                .authority_document_signed
                .unwrap_or(self.authority_document_signed),
            app_installed: patch.app_installed.unwrap_or(self.app_installed),
        }
    }
}

/// Partial counterpart of [`DocumentFlags`] used for update requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlagsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_document_uploaded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_contract_generated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_contract_signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consulting_contract_signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_document_signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_installed: Option<bool>,
}

impl FlagsPatch {
    pub fn is_empty(&self) -> bool {
        *self == FlagsPatch::default()
    }

    /// Patch that marks a single milestone as reached.
    pub fn milestone_reached(step: u8) -> FlagsPatch {
        let mut patch = FlagsPatch::default();
        match step {
            1 => patch.identity_document_uploaded = Some(true),
            2 => {
                patch.participation_contract_signed = Some(true);
                patch.participation_contract_generated = Some(true);
            }
            3 => patch.consulting_contract_signed = Some(true),
            4 => patch.authority_document_signed = Some(true),
            _ => patch.app_installed = Some(true),
        }
        patch
    }
}

/// Progress derived from [`DocumentFlags`]. Recomputed on every fetch and
/// after every successful flag mutation; never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    /// Completed milestones as a rounded percentage of all five.
    pub percent_complete: u8,
    /// First step whose prerequisite flag is unmet; [`FINAL_STEP`] if all are.
    pub current_step: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_false() {
        let flags: DocumentFlags =
            serde_json::from_str(r#"{"identityDocumentUploaded":true}"#).unwrap();
        assert!(flags.identity_document_uploaded);
        assert!(!flags.participation_contract_signed);
        assert!(!flags.app_installed);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = FlagsPatch {
            identity_document_uploaded: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"identityDocumentUploaded":true}"#);
    }

    #[test]
    fn apply_leaves_unset_fields_untouched() {
        let flags = DocumentFlags {
            identity_document_uploaded: true,
            app_installed: true,
            ..Default::default()
        };
        let patched = flags.apply(&FlagsPatch {
            participation_contract_signed: Some(true),
            ..Default::default()
        });
        assert!(patched.identity_document_uploaded);
        assert!(patched.participation_contract_signed);
        assert!(patched.app_installed);
        assert!(!patched.consulting_contract_signed);
    }

    #[test]
    fn milestone_reached_pairs_the_generated_flag() {
        let patch = FlagsPatch::milestone_reached(2);
        assert_eq!(patch.participation_contract_signed, Some(true));
        assert_eq!(patch.participation_contract_generated, Some(true));
        assert!(patch.identity_document_uploaded.is_none());
    }
}
