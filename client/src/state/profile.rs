//! Render decisions for the profile page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::util::date::format_member_since;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FAILED_MESSAGE: &str = "Failed to fetch user profile";

/// Rows shown on the profile page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub member_since: String,
}

impl From<UserProfile> for ProfileSummary {
    fn from(profile: UserProfile) -> Self {
        Self {
            member_since: format_member_since(&profile.created_at),
            name: profile.name,
            email: profile.email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    Loading,
    Failed,
    Loaded(ProfileSummary),
}

impl ProfileView {
    pub fn resolve(outcome: Option<Result<UserProfile, ApiError>>) -> Self {
        match outcome {
            None => Self::Loading,
            Some(Err(_)) => Self::Failed,
            Some(Ok(profile)) => Self::Loaded(profile.into()),
        }
    }
}
