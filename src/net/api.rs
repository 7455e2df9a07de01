//! REST API helpers for the parent-facing endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! the session token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns `Result<_, ApiError>`; the error's `Display` is the
//! one message the UI shows inline. Transport failures, structured `detail`
//! payloads, and unparseable bodies all collapse into that shape here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Child, CreateChildPayload, LoginPayload, LoginResponse, NotificationItem, PreferredLanguagePayload, Profile,
    RegisterPayload, RegisterResponse, Region, UpdateChildPayload, VaccinationRecord,
};
use crate::config::ClientConfig;
use crate::i18n::Locale;
use crate::state::session::Session;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Request context: base URL plus the caller's credential.
///
/// Built from the session snapshot at call time, so a token persisted
/// mid-flow (signup, sign-in) applies to every later request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    authorization: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: &Session) -> Self {
        Self { base: config.api_base.clone(), authorization: session.authorization() }
    }

    /// Client without a credential, for public endpoints.
    pub fn anonymous(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone(), authorization: None }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the normalized backend message, e.g. an already-registered email.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResponse, ApiError> {
        self.send_json(Verb::Post, "/auth/register", payload, "Registration failed").await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the normalized backend message for rejected credentials.
    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
        self.send_json(Verb::Post, "/auth/login", payload, "Login failed").await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is missing, expired, or the request fails.
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/auth/me", "Failed to load profile").await
    }

    /// `PATCH /auth/me` with the preferred reminder language.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; callers treat this as best-effort.
    pub async fn update_preferred_language(&self, locale: Locale) -> Result<Profile, ApiError> {
        let body = PreferredLanguagePayload { preferred_language: locale };
        self.send_json(Verb::Patch, "/auth/me", &body, "Failed to update language").await
    }

    /// `GET /api/regions` (public).
    ///
    /// # Errors
    ///
    /// Returns an error if the region list cannot be loaded.
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json("/api/regions", "Failed to load regions").await
    }

    // =========================================================================
    // CHILDREN
    // =========================================================================

    /// `GET /children/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub async fn fetch_children(&self) -> Result<Vec<Child>, ApiError> {
        self.get_json("/children/", "Failed to load children").await
    }

    /// `POST /children/`. The backend schedules the child's vaccinations on creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the child cannot be created.
    pub async fn create_child(&self, payload: &CreateChildPayload) -> Result<Child, ApiError> {
        self.send_json(Verb::Post, "/children/", payload, "Failed to add child").await
    }

    /// `PUT /children/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the child does not exist or the update fails.
    pub async fn update_child(&self, child_id: i64, payload: &UpdateChildPayload) -> Result<Child, ApiError> {
        self.send_json(Verb::Put, &child_path(child_id), payload, "Failed to update child").await
    }

    /// `DELETE /children/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the child does not exist or the delete fails.
    pub async fn delete_child(&self, child_id: i64) -> Result<(), ApiError> {
        self.send_empty(Verb::Delete, &child_path(child_id), "Failed to delete child").await
    }

    /// `GET /children/{id}/timeline`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeline cannot be loaded.
    pub async fn fetch_timeline(&self, child_id: i64) -> Result<Vec<VaccinationRecord>, ApiError> {
        self.get_json(&timeline_path(child_id), "Failed to load timeline").await
    }

    /// `PATCH /vaccinations/{id}/complete` (no body).
    ///
    /// # Errors
    ///
    /// Returns an error if the vaccination is unknown or the update fails.
    pub async fn complete_vaccination(&self, vaccination_id: i64) -> Result<(), ApiError> {
        self.send_empty(Verb::Patch, &complete_path(vaccination_id), "Failed to mark vaccination complete")
            .await
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    /// `GET /notifications`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reminder list cannot be loaded.
    pub async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>, ApiError> {
        self.get_json("/notifications", "Failed to load notifications").await
    }

    /// `DELETE /notifications/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reminder cannot be deleted.
    pub async fn delete_notification(&self, vaccination_id: i64) -> Result<(), ApiError> {
        self.send_empty(Verb::Delete, &notification_path(vaccination_id), "Failed to delete notification")
            .await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.builder(Verb::Get, path).send().await.map_err(transport_error)?;
            read_json(resp, fallback).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, fallback);
            Err(ApiError::Unavailable)
        }
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .builder(verb, path)
                .json(body)
                .map_err(|e| ApiError::Validation(e.to_string()))?
                .send()
                .await
                .map_err(transport_error)?;
            read_json(resp, fallback).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body, fallback);
            Err(ApiError::Unavailable)
        }
    }

    pub(crate) async fn send_empty(&self, verb: Verb, path: &str, fallback: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.builder(verb, path).send().await.map_err(transport_error)?;
            if resp.ok() {
                return Ok(());
            }
            let body = resp.text().await.unwrap_or_default();
            Err(super::error::error_from_response(resp.status(), &resp.status_text(), &body, fallback))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, fallback);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn builder(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;

        let url = self.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.authorization.as_deref() {
            Some(auth) => builder.header("Authorization", auth),
            None => builder,
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    log::warn!("request failed before a response: {err}");
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response, fallback: &str) -> Result<T, ApiError> {
    let body = resp.text().await.map_err(transport_error)?;
    if !resp.ok() {
        return Err(super::error::error_from_response(resp.status(), &resp.status_text(), &body, fallback));
    }
    decode_body(&body)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn child_path(child_id: i64) -> String {
    format!("/children/{child_id}")
}

fn timeline_path(child_id: i64) -> String {
    format!("/children/{child_id}/timeline")
}

fn complete_path(vaccination_id: i64) -> String {
    format!("/vaccinations/{vaccination_id}/complete")
}

fn notification_path(vaccination_id: i64) -> String {
    format!("/notifications/{vaccination_id}")
}
