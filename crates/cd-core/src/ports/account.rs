//! Account endpoints port
//!
//! Covers login and the two endpoints the onboarding reconciler lives on:
//! the profile fetch and the partial details update.

use async_trait::async_trait;

use crate::account::{AuthSession, Credentials, DetailsUpdate, UserProfile};
use crate::error::ApiError;

#[async_trait]
pub trait AccountApiPort: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError>;

    /// `GET /auth/me`
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError>;

    /// `PUT /auth/update-details`; returns the acknowledged record.
    async fn update_details(&self, update: &DetailsUpdate) -> Result<UserProfile, ApiError>;
}
