//! Static step card definitions
//!
//! Four cards are rendered even though five step values exist; the
//! app-install milestone has no card and acts as the implicit final step.

use super::DocumentFlags;

/// One entry of the dashboard's step list.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub ordinal: u8,
    pub title: &'static str,
    pub icon: &'static str,
    completed: fn(&DocumentFlags) -> bool,
}

impl StepDefinition {
    pub fn is_completed(&self, flags: &DocumentFlags) -> bool {
        (self.completed)(flags)
    }
}

/// The step cards in display order.
pub fn step_definitions() -> &'static [StepDefinition] {
    static STEPS: [StepDefinition; 4] = [
        StepDefinition {
            ordinal: 1,
            title: "Identity document",
            icon: "id-card",
            completed: |f| f.identity_document_uploaded,
        },
        StepDefinition {
            ordinal: 2,
            title: "Participation contract",
            icon: "file-signature",
            completed: |f| f.participation_contract_signed,
        },
        StepDefinition {
            ordinal: 3,
            title: "Consulting contract",
            icon: "file-contract",
            completed: |f| f.consulting_contract_signed,
        },
        StepDefinition {
            ordinal: 4,
            title: "Authority document",
            icon: "stamp",
            completed: |f| f.authority_document_signed,
        },
    ];
    &STEPS
}
