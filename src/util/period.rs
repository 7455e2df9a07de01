//! Period grouping and status resolution for a child's vaccination timeline.
//!
//! DESIGN
//! ======
//! Everything here is a pure function over an immutable snapshot of records.
//! Views recompute on every render; the lists are a few dozen entries long.

#[cfg(test)]
#[path = "period_test.rs"]
mod period_test;

use std::collections::HashMap;

use time::Date;

use crate::net::types::{VaccinationRecord, VaccinationStatus};
use crate::util::dates;

/// Resolve the single status shown for a period.
///
/// First match wins: all completed, any overdue, any due, otherwise upcoming.
/// Returns `None` for an empty slice.
pub fn resolve_status(members: &[VaccinationRecord]) -> Option<VaccinationStatus> {
    if members.is_empty() {
        return None;
    }
    let status = if members.iter().all(|r| r.completed) {
        VaccinationStatus::Completed
    } else if members.iter().any(|r| r.status == VaccinationStatus::Overdue) {
        VaccinationStatus::Overdue
    } else if members.iter().any(|r| r.status == VaccinationStatus::Due) {
        VaccinationStatus::Due
    } else {
        VaccinationStatus::Upcoming
    };
    Some(status)
}

/// Records sharing one period label, in their original order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodGroup {
    pub period_label: String,
    pub members: Vec<VaccinationRecord>,
    pub status: VaccinationStatus,
}

impl PeriodGroup {
    /// Due date of the first member; members of a period share a milestone.
    pub fn due_date(&self) -> Option<&str> {
        self.members.iter().find_map(|r| r.due_date.as_deref())
    }

    pub fn all_completed(&self) -> bool {
        self.status == VaccinationStatus::Completed
    }

    /// Ids a "mark period complete" action should patch.
    pub fn completion_targets(&self) -> Vec<i64> {
        self.members.iter().filter(|r| r.remindable && !r.completed).map(|r| r.id).collect()
    }

    pub fn vaccine_names(&self) -> Vec<&str> {
        self.members.iter().map(|r| r.vaccine_name.as_str()).collect()
    }
}

/// Group records by period label, preserving first-occurrence order.
pub fn group_by_period(records: &[VaccinationRecord]) -> Vec<PeriodGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<VaccinationRecord>)> = Vec::new();
    for record in records {
        let slot = *index.entry(record.period_label.as_str()).or_insert_with(|| {
            buckets.push((record.period_label.clone(), Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(record.clone());
    }
    buckets
        .into_iter()
        .filter_map(|(period_label, members)| {
            let status = resolve_status(&members)?;
            Some(PeriodGroup { period_label, members, status })
        })
        .collect()
}

/// Whether a record belongs in the near-term view.
///
/// Upcoming and due records always qualify. Overdue records qualify while
/// they are at most `grace_days` past their due date; without a due date
/// they do not.
pub fn qualifies_for_coming_soon(record: &VaccinationRecord, today: Date, grace_days: i64) -> bool {
    match record.status {
        VaccinationStatus::Upcoming | VaccinationStatus::Due => true,
        VaccinationStatus::Overdue => record
            .due_date
            .as_deref()
            .and_then(dates::parse_date)
            .is_some_and(|due| dates::days_between(due, today) <= grace_days),
        VaccinationStatus::Completed => false,
    }
}

/// The first `limit` period groups built from qualifying records.
pub fn coming_soon(records: &[VaccinationRecord], today: Date, grace_days: i64, limit: usize) -> Vec<PeriodGroup> {
    let selected: Vec<VaccinationRecord> =
        records.iter().filter(|r| qualifies_for_coming_soon(r, today, grace_days)).cloned().collect();
    let mut groups = group_by_period(&selected);
    groups.truncate(limit);
    groups
}

/// Completion summary for the timeline header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// Completed records over all records, 0..=100.
    pub percent: f64,
    pub completed_groups: usize,
    pub group_count: usize,
    /// Completed groups over all groups, 0..=100; drives the timeline rail fill.
    pub fill_percent: f64,
}

impl Progress {
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(records: &[VaccinationRecord], groups: &[PeriodGroup]) -> Self {
        let total = records.len();
        let completed = records.iter().filter(|r| r.completed).count();
        let group_count = groups.len();
        let completed_groups = groups.iter().filter(|g| g.all_completed()).count();
        let ratio = |part: usize, whole: usize| if whole == 0 { 0.0 } else { part as f64 * 100.0 / whole as f64 };
        Self {
            total,
            completed,
            percent: ratio(completed, total),
            completed_groups,
            group_count,
            fill_percent: ratio(completed_groups, group_count),
        }
    }

    /// Percent rounded for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}
