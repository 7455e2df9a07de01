//! Admin dashboard state: vaccine selection, coverage and supply panels,
//! region detail, region settings and Telegram broadcasts.
//!
//! DESIGN
//! ======
//! Coverage and supply load together for the selected vaccine; the first
//! failure becomes the dashboard error. Region detail is keyed by region id
//! so a late response for a closed modal is dropped.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{
    AdminRegion, CoverageRegion, NationalSupply, RegionDetail, RegionTelegramUpdate, SupplyResponse,
    TelegramGenerateResponse, TelegramLanguage, TelegramPreview, TelegramRequest, TelegramSendResponse,
    TelegramSendResult, TelegramTemplate,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub vaccines: Vec<String>,
    pub vaccines_error: Option<String>,
    pub vaccine: Option<String>,
    pub coverage: Vec<CoverageRegion>,
    pub supply: Option<SupplyResponse>,
    pub loading: bool,
    pub error: Option<String>,
    /// Next coverage load asks the backend to recompute.
    pub refresh: bool,
    pub detail_id: Option<i64>,
    pub detail: Option<RegionDetail>,
    pub detail_error: Option<String>,
}

impl AdminState {
    /// Vaccine list for the picker. A failed load empties the picker and keeps the error.
    pub fn apply_vaccines(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(vaccines) => {
                self.vaccines = vaccines;
                self.vaccines_error = None;
            }
            Err(e) => {
                log::warn!("vaccine list unavailable: {e}");
                self.vaccines.clear();
                self.vaccines_error = Some(e.to_string());
            }
        }
    }

    /// Select a vaccine; a blank choice clears the panels.
    pub fn select_vaccine(&mut self, vaccine: &str) {
        let vaccine = vaccine.trim();
        if vaccine.is_empty() {
            self.vaccine = None;
            self.coverage.clear();
            self.supply = None;
            self.loading = false;
        } else {
            self.vaccine = Some(vaccine.to_owned());
        }
        self.error = None;
    }

    pub fn request_refresh(&mut self) {
        self.refresh = true;
    }

    /// Start a dashboard load. Returns the vaccine and refresh flag to load with.
    pub fn begin_load(&mut self) -> Option<(String, bool)> {
        let vaccine = self.vaccine.clone()?;
        self.loading = true;
        self.error = None;
        Some((vaccine, std::mem::take(&mut self.refresh)))
    }

    pub fn apply_load(
        &mut self,
        vaccine: &str,
        coverage: Result<Vec<CoverageRegion>, ApiError>,
        supply: Result<SupplyResponse, ApiError>,
    ) {
        if self.vaccine.as_deref() != Some(vaccine) {
            return;
        }
        self.loading = false;
        match (coverage, supply) {
            (Ok(coverage), Ok(supply)) => {
                self.coverage = coverage;
                self.supply = Some(supply);
            }
            (Err(e), _) | (_, Err(e)) => self.error = Some(e.to_string()),
        }
    }

    pub fn open_detail(&mut self, region_id: i64) {
        self.detail_id = Some(region_id);
        self.detail = None;
        self.detail_error = None;
    }

    /// Apply a detail response for the open region.
    pub fn apply_detail(&mut self, region_id: i64, result: Result<RegionDetail, ApiError>) {
        if self.detail_id != Some(region_id) {
            return;
        }
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.detail_error = None;
            }
            Err(e) => {
                log::warn!("region {region_id} detail failed: {e}");
                self.detail = None;
                self.detail_error = Some(e.to_string());
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
        self.detail = None;
        self.detail_error = None;
    }
}

/// Coverage percentage text; "N/A" when the region has no registered children.
pub fn coverage_label(region: &CoverageRegion) -> String {
    if region.total_registered == 0 { "N/A".to_owned() } else { format!("{}%", region.coverage_pct_display) }
}

/// Bar width in percent, clamped to 0..=100.
pub fn bar_width(region: &CoverageRegion) -> f64 {
    region.coverage_pct_display.clamp(0.0, 100.0)
}

/// National stock minus projected need; negative means a shortage.
pub fn supply_gap(national: &NationalSupply) -> f64 {
    national.current_stock - national.projected_need_total
}

/// Signed display form of a supply gap.
pub fn supply_gap_label(gap: f64) -> String {
    if gap > 0.0 { format!("+{gap}") } else { format!("{gap}") }
}

pub fn supply_status(gap: f64) -> &'static str {
    if gap >= 0.0 { "Stock suffisant" } else { "Pénurie critique" }
}

// =============================================================================
// REGION SETTINGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionSettingsState {
    pub regions: Vec<AdminRegion>,
    pub loading: bool,
    pub error: Option<String>,
    /// Region being edited and its chat id draft.
    pub editing: Option<(i64, String)>,
    pub saving: bool,
}

impl RegionSettingsState {
    pub fn apply_load(&mut self, result: Result<Vec<AdminRegion>, ApiError>) {
        self.loading = false;
        match result {
            Ok(regions) => {
                self.regions = regions;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn start_edit(&mut self, region_id: i64) {
        let current = self
            .regions
            .iter()
            .find(|r| r.id == region_id)
            .and_then(|r| r.telegram_chat_id.clone())
            .unwrap_or_default();
        self.editing = Some((region_id, current));
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn apply_update(&mut self, result: Result<RegionTelegramUpdate, ApiError>) {
        self.saving = false;
        match result {
            Ok(update) => {
                if let Some(region) = self.regions.iter_mut().find(|r| r.id == update.id) {
                    region.telegram_chat_id = update.telegram_chat_id.filter(|id| !id.is_empty());
                }
                self.editing = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

// =============================================================================
// TELEGRAM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TelegramDraft {
    pub selected: BTreeSet<i64>,
    pub language: TelegramLanguage,
    pub template: TelegramTemplate,
    pub previews: Vec<TelegramPreview>,
    pub results: Vec<TelegramSendResult>,
    pub busy: bool,
    pub error: Option<String>,
}

impl TelegramDraft {
    pub fn toggle_region(&mut self, region_id: i64) {
        if !self.selected.remove(&region_id) {
            self.selected.insert(region_id);
        }
        self.previews.clear();
        self.results.clear();
    }

    /// Build the generate/send body.
    ///
    /// # Errors
    ///
    /// Requires a selected vaccine and at least one region.
    pub fn request(&self, vaccine: Option<&str>) -> Result<TelegramRequest, ApiError> {
        let vaccine = vaccine.map(str::trim).filter(|v| !v.is_empty());
        let Some(vaccine) = vaccine else {
            return Err(ApiError::Validation("Choisir un vaccin".into()));
        };
        if self.selected.is_empty() {
            return Err(ApiError::Validation("Sélectionner au moins une région".into()));
        }
        Ok(TelegramRequest {
            vaccine_name: vaccine.to_owned(),
            region_ids: self.selected.iter().copied().collect(),
            language: self.language,
            template_type: self.template,
        })
    }

    pub fn apply_generate(&mut self, result: Result<TelegramGenerateResponse, ApiError>) {
        self.busy = false;
        match result {
            Ok(resp) => {
                self.previews = resp.messages;
                self.results.clear();
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn apply_send(&mut self, result: Result<TelegramSendResponse, ApiError>) {
        self.busy = false;
        match result {
            Ok(resp) => {
                self.results = resp.results;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Previews the backend marked deliverable.
    pub fn sendable(&self) -> usize {
        self.previews.iter().filter(|p| p.can_send).count()
    }

    pub fn delivered(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }
}
