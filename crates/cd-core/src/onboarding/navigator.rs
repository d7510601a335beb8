//! Step navigation
//!
//! Decides whether a viewer-requested step jump is admitted, and which flags
//! have to be synthesized to let it through.

use tracing::debug;

use super::{force_early_milestones, reconcile, DocumentFlags, FlagsPatch, FINAL_STEP};

/// Outcome of a step navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// The step the viewer actually lands on.
    pub admitted_step: u8,
    /// Flags fabricated to admit the jump; the caller must persist these with
    /// `next_step` forced to `admitted_step`.
    pub synthesized: Option<FlagsPatch>,
}

/// Gate a requested jump to `target` against the milestone record.
///
/// The record is reconciled first, so a repairable inconsistency can satisfy
/// a gate on its own. A jump whose immediately-prior milestone is unmet is
/// rejected and lands on step one, not on the nearest admissible step; this
/// mirrors the dashboard's long-standing behavior. An admitted jump to step
/// three or later additionally synthesizes the two early milestones when
/// either is still unset, so the viewer cannot be bounced back by a record
/// the server has not caught up on yet.
pub fn request_step(target: u8, flags: &DocumentFlags) -> Navigation {
    let target = target.clamp(1, FINAL_STEP);
    let repaired = reconcile(*flags);

    if target == 1 {
        return Navigation {
            admitted_step: 1,
            synthesized: None,
        };
    }

    if !repaired.milestone_for_step(target - 1) {
        debug!(target, "step jump rejected, prior milestone unmet");
        return Navigation {
            admitted_step: 1,
            synthesized: None,
        };
    }

    let synthesized = if target >= 3
        && !(repaired.identity_document_uploaded && repaired.participation_contract_signed)
    {
        let forced = force_early_milestones(repaired);
        debug!(target, "synthesizing early milestones to admit step jump");
        Some(FlagsPatch {
            identity_document_uploaded: Some(forced.identity_document_uploaded),
            participation_contract_generated: Some(forced.participation_contract_generated),
            participation_contract_signed: Some(forced.participation_contract_signed),
            ..Default::default()
        })
    } else {
        None
    };

    Navigation {
        admitted_step: target,
        synthesized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_always_admitted() {
        let nav = request_step(1, &DocumentFlags::default());
        assert_eq!(nav.admitted_step, 1);
        assert!(nav.synthesized.is_none());
    }

    #[test]
    fn jump_past_unmet_gate_snaps_back_to_step_one() {
        let nav = request_step(3, &DocumentFlags::default());
        assert_eq!(nav.admitted_step, 1);
        assert!(nav.synthesized.is_none());
    }

    #[test]
    fn second_step_requires_identity_document() {
        let nav = request_step(2, &DocumentFlags::default());
        assert_eq!(nav.admitted_step, 1);

        let nav = request_step(
            2,
            &DocumentFlags {
                identity_document_uploaded: true,
                ..Default::default()
            },
        );
        assert_eq!(nav.admitted_step, 2);
        assert!(nav.synthesized.is_none());
    }

    #[test]
    fn admitted_jump_synthesizes_missing_early_milestones() {
        // The signed consulting contract repairs the participation flag, which
        // satisfies the gate for step three; the identity flag is still unset
        // and gets fabricated alongside.
        let record = DocumentFlags {
            consulting_contract_signed: true,
            ..Default::default()
        };
        let nav = request_step(3, &record);
        assert_eq!(nav.admitted_step, 3);
        let patch = nav.synthesized.expect("early milestones synthesized");
        assert_eq!(patch.identity_document_uploaded, Some(true));
        assert_eq!(patch.participation_contract_signed, Some(true));
        assert_eq!(patch.participation_contract_generated, Some(true));
    }

    #[test]
    fn consistent_records_navigate_without_synthesis() {
        let record = DocumentFlags {
            identity_document_uploaded: true,
            participation_contract_generated: true,
            participation_contract_signed: true,
            consulting_contract_signed: true,
            ..Default::default()
        };
        let nav = request_step(4, &record);
        assert_eq!(nav.admitted_step, 4);
        assert!(nav.synthesized.is_none());
    }

    #[test]
    fn final_step_requires_authority_document() {
        let record = DocumentFlags {
            identity_document_uploaded: true,
            participation_contract_generated: true,
            participation_contract_signed: true,
            consulting_contract_signed: true,
            authority_document_signed: true,
            ..Default::default()
        };
        assert_eq!(request_step(5, &record).admitted_step, 5);

        let record = DocumentFlags {
            authority_document_signed: false,
            ..record
        };
        assert_eq!(request_step(5, &record).admitted_step, 1);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        assert_eq!(request_step(0, &DocumentFlags::default()).admitted_step, 1);
        let complete = DocumentFlags {
            identity_document_uploaded: true,
            participation_contract_generated: true,
            participation_contract_signed: true,
            consulting_contract_signed: true,
            authority_document_signed: true,
            app_installed: true,
        };
        assert_eq!(request_step(9, &complete).admitted_step, FINAL_STEP);
    }
}
