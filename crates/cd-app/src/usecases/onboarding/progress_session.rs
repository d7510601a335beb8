//! Progress sync
//!
//! [`ProgressSession`] owns the local mirror of the server's milestone
//! record. The mirror has no independent lifetime: it is discarded and
//! refetched on every load, and every ingestion runs through the consistency
//! repair before progress is derived.
//!
//! After a synthesis event the persist success path is the sole writer of
//! `current_step`; there is no secondary timer-based re-apply.

use std::sync::Arc;

use tracing::{info, warn};

use cd_core::account::DetailsUpdate;
use cd_core::error::ApiError;
use cd_core::onboarding::{
    compute_progress, reconcile, request_step, DocumentFlags, FlagsPatch, ProgressState,
};
use cd_core::ports::AccountApiPort;

use super::ProgressDto;

/// Outcome of a viewer-initiated step jump.
#[derive(Debug, Clone)]
pub struct StepChange {
    pub admitted_step: u8,
    pub progress: ProgressDto,
    /// Whether synthesized flags were pushed to the server.
    pub synthesized: bool,
}

pub struct ProgressSession {
    account: Arc<dyn AccountApiPort>,
    flags: DocumentFlags,
    progress: ProgressState,
}

impl ProgressSession {
    /// Fetch the owning user record and derive the initial progress.
    pub async fn load(account: Arc<dyn AccountApiPort>) -> Result<Self, ApiError> {
        let profile = account.fetch_profile().await?;
        let flags = reconcile(profile.documents);
        let progress = compute_progress(&flags);
        Ok(ProgressSession {
            account,
            flags,
            progress,
        })
    }

    pub fn flags(&self) -> &DocumentFlags {
        &self.flags
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn view(&self) -> ProgressDto {
        ProgressDto::from_state(&self.flags, self.progress)
    }

    /// Discard the mirror and refetch the authoritative record.
    pub async fn refresh(&mut self) -> Result<ProgressDto, ApiError> {
        let profile = self.account.fetch_profile().await?;
        self.flags = reconcile(profile.documents);
        self.progress = compute_progress(&self.flags);
        Ok(self.view())
    }

    /// Push a partial flag update to the server and reconcile the
    /// acknowledgement.
    ///
    /// The patch is applied to the mirror before the request and is not
    /// rolled back on failure; the next full refetch settles any divergence.
    /// On success the acknowledged record replaces the mirror, progress is
    /// recomputed, and a supplied `forced_step` overrides the recomputed
    /// current step: the synthesized flags are optimistic and the forced
    /// step must not be undone by a record the server has not caught up on.
    /// Single attempt, no automatic retry.
    pub async fn persist(
        &mut self,
        patch: FlagsPatch,
        forced_step: Option<u8>,
    ) -> Result<ProgressState, ApiError> {
        self.flags = reconcile(self.flags.apply(&patch));
        self.progress = compute_progress(&self.flags);

        let update = DetailsUpdate::documents(patch, forced_step);
        let acknowledged = match self.account.update_details(&update).await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(%error, "milestone update failed; keeping optimistic mirror");
                return Err(error);
            }
        };

        self.flags = reconcile(acknowledged.documents);
        self.progress = compute_progress(&self.flags);
        if let Some(step) = forced_step {
            self.progress.current_step = step;
        }
        info!(
            step = self.progress.current_step,
            percent = self.progress.percent_complete,
            "milestone record persisted"
        );
        Ok(self.progress)
    }

    /// Gate a viewer-requested step jump, persisting synthesized flags with
    /// the admitted step forced when the navigator fabricates milestones.
    pub async fn request_step(&mut self, target: u8) -> Result<StepChange, ApiError> {
        let navigation = request_step(target, &self.flags);

        let synthesized = match navigation.synthesized {
            Some(patch) => {
                self.persist(patch, Some(navigation.admitted_step)).await?;
                true
            }
            None => {
                // Navigation without synthesis touches nothing remote; the
                // derived step follows the (possibly repaired) record.
                self.flags = reconcile(self.flags);
                self.progress = compute_progress(&self.flags);
                self.progress.current_step = navigation.admitted_step;
                false
            }
        };

        Ok(StepChange {
            admitted_step: navigation.admitted_step,
            progress: self.view(),
            synthesized,
        })
    }

    /// Record a milestone reached through a document action (upload, app
    /// install confirmation) and resync progress.
    pub async fn record_milestone(&mut self, step: u8) -> Result<ProgressState, ApiError> {
        self.persist(FlagsPatch::milestone_reached(step), None).await
    }
}
