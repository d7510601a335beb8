//! Progress calculation
//!
//! Pure derivation of [`ProgressState`] from a [`DocumentFlags`] record.
//! Callers are expected to run [`super::reconcile`] first so the record
//! satisfies the milestone ordering invariant.

use super::{DocumentFlags, ProgressState, FINAL_STEP, MILESTONE_COUNT};

/// Derive the completion percentage and current step from a flag record.
///
/// The percentage counts true milestones out of five, rounded to the nearest
/// integer. The current step is the first whose prerequisite flag is unmet,
/// tested in fixed order: identity document, participation contract,
/// consulting contract, authority document, app install. A fully complete
/// record stays on the final step.
pub fn compute_progress(flags: &DocumentFlags) -> ProgressState {
    let milestones = flags.milestones();
    let reached = milestones.iter().filter(|m| **m).count() as u32;

    let percent_complete =
        ((reached * 100) as f64 / MILESTONE_COUNT as f64).round() as u8;

    let current_step = milestones
        .iter()
        .position(|m| !*m)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(FINAL_STEP);

    ProgressState {
        percent_complete,
        current_step,
    }
}
