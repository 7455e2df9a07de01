//! Profile state for the signed-in parent or admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded from `GET /auth/me` by pages that branch on identity (sign-in
//! landing, admin guard). Token presence lives in [`super::session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::Profile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_load(&mut self, result: Result<Profile, ApiError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => {
                self.profile = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_admin)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
