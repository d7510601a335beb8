//! Onboarding progress use cases
//!
//! The reconciliation loop of the dashboard: fetch the milestone record,
//! repair it, derive progress, gate step navigation, and push corrected or
//! synthesized flags back to the server.

mod progress_session;

pub use progress_session::{ProgressSession, StepChange};

use cd_core::onboarding::{step_definitions, DocumentFlags, ProgressState};
use serde::Serialize;

/// One rendered step card.
#[derive(Debug, Clone, Serialize)]
pub struct StepCardDto {
    pub ordinal: u8,
    pub title: &'static str,
    pub icon: &'static str,
    pub completed: bool,
    pub current: bool,
}

/// Everything the progress view renders.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressDto {
    pub percent_complete: u8,
    pub current_step: u8,
    pub steps: Vec<StepCardDto>,
}

impl ProgressDto {
    pub fn from_state(flags: &DocumentFlags, progress: ProgressState) -> Self {
        let steps = step_definitions()
            .iter()
            .map(|step| StepCardDto {
                ordinal: step.ordinal,
                title: step.title,
                icon: step.icon,
                completed: step.is_completed(flags),
                current: step.ordinal == progress.current_step,
            })
            .collect();
        ProgressDto {
            percent_complete: progress.percent_complete,
            current_step: progress.current_step,
            steps,
        }
    }
}
