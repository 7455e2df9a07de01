//! Vaccination timeline state for the selected child.
//!
//! DESIGN
//! ======
//! The flat record list is the only stored data; period groups, the
//! "coming soon" view and progress are derived on read via
//! [`crate::util::period`]. Completion patches records in place once the
//! backend confirms each one, so a partial failure leaves confirmed records
//! marked and the rest untouched.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use time::Date;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{VaccinationRecord, VaccinationStatus};
use crate::util::period::{self, PeriodGroup, Progress};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineState {
    pub child_id: Option<i64>,
    pub items: Vec<VaccinationRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// The full schedule is collapsed behind a toggle until asked for.
    pub show_full_schedule: bool,
    /// Period label whose completion requests are in flight.
    pub completing: Option<String>,
}

impl TimelineState {
    /// Switch to another child (or none). Clears the previous child's data.
    pub fn select_child(&mut self, child_id: Option<i64>) {
        *self = Self { child_id, loading: child_id.is_some(), ..Self::default() };
    }

    /// Apply a timeline response. Responses for a child no longer selected are dropped.
    pub fn apply_load(&mut self, child_id: i64, result: Result<Vec<VaccinationRecord>, ApiError>) {
        if self.child_id != Some(child_id) {
            log::debug!("dropping stale timeline for child {child_id}");
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn toggle_full_schedule(&mut self) {
        self.show_full_schedule = !self.show_full_schedule;
    }

    /// Mark a period as in flight. Returns false when another completion is running.
    pub fn begin_completion(&mut self, period_label: &str) -> bool {
        if self.completing.is_some() {
            return false;
        }
        self.completing = Some(period_label.to_owned());
        self.error = None;
        true
    }

    /// Patch one confirmed record.
    pub fn mark_completed(&mut self, vaccination_id: i64, completed_at: &str) {
        if let Some(record) = self.items.iter_mut().find(|r| r.id == vaccination_id) {
            record.completed = true;
            record.completed_at = Some(completed_at.to_owned());
            record.status = VaccinationStatus::Completed;
        }
    }

    /// Apply the outcome of [`complete_period`] and clear the in-flight marker.
    pub fn finish_completion(&mut self, outcome: CompletionOutcome, completed_at: &str) {
        for id in &outcome.completed {
            self.mark_completed(*id, completed_at);
        }
        self.error = outcome.error.map(|e| e.to_string());
        self.completing = None;
    }

    pub fn is_completing(&self, period_label: &str) -> bool {
        self.completing.as_deref() == Some(period_label)
    }

    pub fn groups(&self) -> Vec<PeriodGroup> {
        period::group_by_period(&self.items)
    }

    pub fn coming_soon(&self, today: Date, grace_days: i64, limit: usize) -> Vec<PeriodGroup> {
        period::coming_soon(&self.items, today, grace_days, limit)
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(&self.items, &self.groups())
    }
}

/// Issues completion requests, one record at a time.
#[async_trait::async_trait(?Send)]
pub trait CompletionBackend {
    async fn complete(&self, vaccination_id: i64) -> Result<(), ApiError>;
}

#[async_trait::async_trait(?Send)]
impl CompletionBackend for ApiClient {
    async fn complete(&self, vaccination_id: i64) -> Result<(), ApiError> {
        self.complete_vaccination(vaccination_id).await
    }
}

/// Ids the backend confirmed, plus the error that stopped the run, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub completed: Vec<i64>,
    pub error: Option<ApiError>,
}

/// Complete `ids` sequentially, stopping at the first failure.
pub async fn complete_period(backend: &dyn CompletionBackend, ids: &[i64]) -> CompletionOutcome {
    let mut outcome = CompletionOutcome::default();
    for &id in ids {
        match backend.complete(id).await {
            Ok(()) => outcome.completed.push(id),
            Err(e) => {
                log::warn!("completing vaccination {id} failed: {e}");
                outcome.error = Some(e);
                break;
            }
        }
    }
    outcome
}
