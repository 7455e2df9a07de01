//! Add/edit child modal drafts and their validation.
//!
//! Validation failures never reach the network; they come back as
//! [`ApiError::Validation`] so the modal shows them like any other error.

#[cfg(test)]
#[path = "child_form_test.rs"]
mod child_form_test;

use time::Date;

use crate::net::error::ApiError;
use crate::net::types::{Child, CreateChildPayload, UpdateChildPayload};
use crate::util::dates;

/// Add-child modal fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildDraft {
    pub name: String,
    /// `YYYY-MM-DD` from the date input.
    pub birthdate: String,
    /// Empty when not chosen.
    pub gender: String,
}

impl ChildDraft {
    /// Submit button state: name and birthdate present.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.birthdate.trim().is_empty()
    }

    /// Build the create payload.
    ///
    /// # Errors
    ///
    /// Rejects a blank name, a missing or malformed birthdate, and a birthdate after `today`.
    pub fn validate(&self, today: Date) -> Result<CreateChildPayload, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name is required".into()));
        }
        let Some(birthdate) = dates::parse_date(&self.birthdate) else {
            return Err(ApiError::Validation("A valid birthdate is required".into()));
        };
        if birthdate > today {
            return Err(ApiError::Validation("Birthdate cannot be in the future".into()));
        }
        let gender = self.gender.trim();
        Ok(CreateChildPayload {
            name: name.to_owned(),
            birthdate: self.birthdate.trim().to_owned(),
            gender: (!gender.is_empty()).then(|| gender.to_owned()),
        })
    }
}

/// Edit-child modal fields. Only name and gender are editable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub child_id: i64,
    pub name: String,
    pub gender: String,
    /// Delete asks for a second click before it fires.
    pub confirm_delete: bool,
}

impl EditDraft {
    pub fn from_child(child: &Child) -> Self {
        Self {
            child_id: child.id,
            name: child.name.clone(),
            gender: child.gender.clone().unwrap_or_default(),
            confirm_delete: false,
        }
    }

    /// Build the update payload. An empty gender clears it.
    ///
    /// # Errors
    ///
    /// Rejects a blank name.
    pub fn validate(&self) -> Result<UpdateChildPayload, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name is required".into()));
        }
        let gender = self.gender.trim();
        Ok(UpdateChildPayload {
            name: Some(name.to_owned()),
            gender: Some((!gender.is_empty()).then(|| gender.to_owned())),
        })
    }
}
