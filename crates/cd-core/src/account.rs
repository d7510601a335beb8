//! Account and session wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::onboarding::{DocumentFlags, FlagsPatch};

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response: the bearer token plus the signed-in profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// The signed-in user record, including the onboarding milestone flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Absent on freshly created accounts; reads as all-false.
    #[serde(default)]
    pub documents: DocumentFlags,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial body for `PUT /auth/update-details`.
///
/// `next_step` is an out-of-band hint consumed by the progress sync: it lets
/// the navigator force the computed current step while its synthesized flags
/// are still optimistic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<FlagsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<u8>,
}

impl DetailsUpdate {
    /// Update carrying only a flag patch and an optional forced step.
    pub fn documents(patch: FlagsPatch, next_step: Option<u8>) -> Self {
        DetailsUpdate {
            documents: Some(patch),
            next_step,
            ..Default::default()
        }
    }
}
