//! Admin endpoints: regional coverage, supply projection, region detail,
//! region settings and Telegram broadcasts.
//!
//! Every call requires an admin token; a non-admin token yields a 403 that
//! surfaces as [`ApiError::is_unauthorized`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::api::{ApiClient, Verb};
use super::error::ApiError;
use super::types::{
    AdminRegion, CoverageMode, CoverageRegion, RegionDetail, RegionTelegramPayload, RegionTelegramUpdate,
    SupplyResponse, TelegramGenerateResponse, TelegramRequest, TelegramSendRequest, TelegramSendResponse,
};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'!').remove(b'~').remove(b'*').remove(b'\'').remove(b'(').remove(b')');

/// Filters for `GET /admin/coverage`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageQuery {
    pub vaccine: String,
    /// Ask the backend to bypass its cached aggregate.
    pub refresh: bool,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub mode: Option<CoverageMode>,
}

impl CoverageQuery {
    pub fn for_vaccine(vaccine: &str) -> Self {
        Self { vaccine: vaccine.to_owned(), ..Self::default() }
    }

    /// Query string without the leading `?`. Unset filters are omitted.
    pub fn to_query(&self) -> String {
        let mut params = vec![format!("vaccine={}", encode(&self.vaccine))];
        if self.refresh {
            params.push("refresh=true".to_owned());
        }
        if let Some(from) = self.date_from.as_deref().filter(|v| !v.is_empty()) {
            params.push(format!("date_from={}", encode(from)));
        }
        if let Some(to) = self.date_to.as_deref().filter(|v| !v.is_empty()) {
            params.push(format!("date_to={}", encode(to)));
        }
        if let Some(mode) = self.mode {
            params.push(format!("mode={}", mode.as_str()));
        }
        params.join("&")
    }
}

impl ApiClient {
    /// `GET /admin/coverage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn fetch_coverage(&self, query: &CoverageQuery) -> Result<Vec<CoverageRegion>, ApiError> {
        self.get_json(&coverage_path(query), "Erreur couverture").await
    }

    /// `GET /admin/supply?vaccine=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn fetch_supply(&self, vaccine: &str) -> Result<SupplyResponse, ApiError> {
        self.get_json(&supply_path(vaccine), "Erreur approvisionnement").await
    }

    /// `GET /admin/region/{id}/detail?vaccine=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is unknown or the request fails.
    pub async fn fetch_region_detail(&self, region_id: i64, vaccine: &str) -> Result<RegionDetail, ApiError> {
        self.get_json(&region_detail_path(region_id, vaccine), "Erreur détail région").await
    }

    /// `GET /admin/regions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request fails.
    pub async fn fetch_admin_regions(&self) -> Result<Vec<AdminRegion>, ApiError> {
        self.get_json("/admin/regions", "Erreur chargement régions").await
    }

    /// `PATCH /admin/region/{id}`. An empty chat id clears the binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is unknown or the update fails.
    pub async fn update_region_telegram(
        &self,
        region_id: i64,
        chat_id: Option<&str>,
    ) -> Result<RegionTelegramUpdate, ApiError> {
        let body = telegram_payload(chat_id);
        self.send_json(Verb::Patch, &format!("/admin/region/{region_id}"), &body, "Erreur mise à jour").await
    }

    /// `POST /admin/telegram/generate`: render previews without sending.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails.
    pub async fn telegram_generate(&self, request: &TelegramRequest) -> Result<TelegramGenerateResponse, ApiError> {
        self.send_json(Verb::Post, "/admin/telegram/generate", request, "Erreur génération").await
    }

    /// `POST /admin/telegram/send`.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is rejected; per-region failures come back in the results.
    pub async fn telegram_send(&self, request: &TelegramRequest) -> Result<TelegramSendResponse, ApiError> {
        let body = TelegramSendRequest { request: request.clone(), send: true };
        self.send_json(Verb::Post, "/admin/telegram/send", &body, "Erreur envoi").await
    }

    /// `GET /api/vaccines`: vaccine names for the admin picker.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub async fn fetch_vaccines(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/api/vaccines", "Erreur chargement vaccins").await
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn coverage_path(query: &CoverageQuery) -> String {
    format!("/admin/coverage?{}", query.to_query())
}

fn supply_path(vaccine: &str) -> String {
    format!("/admin/supply?vaccine={}", encode(vaccine))
}

fn region_detail_path(region_id: i64, vaccine: &str) -> String {
    format!("/admin/region/{region_id}/detail?vaccine={}", encode(vaccine))
}

fn telegram_payload(chat_id: Option<&str>) -> RegionTelegramPayload {
    RegionTelegramPayload { telegram_chat_id: chat_id.map(str::trim).unwrap_or_default().to_owned() }
}
