//! Consistency correction
//!
//! Server records occasionally violate the intended milestone ordering (a
//! later flag set while an earlier one is not). This module owns the repair
//! rules and is invoked at every flag-ingestion boundary: after a fetch and
//! before a persist. Inconsistency is not an error; it is corrected silently.

use tracing::debug;

use super::DocumentFlags;

/// Repair a fetched record so it satisfies the milestone ordering invariant.
///
/// A signed consulting contract is taken as proof the participation contract
/// must have been signed first, so that flag (and its paired generated flag)
/// is forced true. Idempotent.
pub fn reconcile(flags: DocumentFlags) -> DocumentFlags {
    let mut repaired = flags;
    if repaired.consulting_contract_signed && !repaired.participation_contract_signed {
        debug!("treating signed consulting contract as proof of participation contract");
        repaired.participation_contract_signed = true;
        repaired.participation_contract_generated = true;
    }
    repaired
}

/// Force the early milestones ahead of admitting a jump to step three or
/// later, so a transient inconsistency cannot bounce the viewer back to the
/// first step. Idempotent.
pub fn force_early_milestones(flags: DocumentFlags) -> DocumentFlags {
    DocumentFlags {
        identity_document_uploaded: true,
        participation_contract_generated: true,
        participation_contract_signed: true,
        ..flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulting_signed_implies_participation_signed() {
        let record = DocumentFlags {
            consulting_contract_signed: true,
            ..Default::default()
        };
        let repaired = reconcile(record);
        assert!(repaired.participation_contract_signed);
        assert!(repaired.participation_contract_generated);
    }

    #[test]
    fn consistent_records_pass_through_unchanged() {
        let record = DocumentFlags {
            identity_document_uploaded: true,
            participation_contract_generated: true,
            participation_contract_signed: true,
            ..Default::default()
        };
        assert_eq!(reconcile(record), record);
    }

    #[test]
    fn reconcile_is_idempotent_over_all_records() {
        for mask in 0u8..64 {
            let record = DocumentFlags {
                identity_document_uploaded: mask & 1 != 0,
                participation_contract_generated: mask & 2 != 0,
                participation_contract_signed: mask & 4 != 0,
                consulting_contract_signed: mask & 8 != 0,
                authority_document_signed: mask & 16 != 0,
                app_installed: mask & 32 != 0,
            };
            let once = reconcile(record);
            assert_eq!(reconcile(once), once, "mask {mask:#08b}");
        }
    }

    #[test]
    fn forcing_early_milestones_is_idempotent() {
        let record = DocumentFlags {
            authority_document_signed: true,
            ..Default::default()
        };
        let forced = force_early_milestones(record);
        assert!(forced.identity_document_uploaded);
        assert!(forced.participation_contract_signed);
        assert!(forced.authority_document_signed);
        assert_eq!(force_early_milestones(forced), forced);
    }
}
