use super::*;
use time::macros::date;

fn record(id: i64, label: &str, status: VaccinationStatus, completed: bool) -> VaccinationRecord {
    VaccinationRecord {
        id,
        vaccine_name: format!("V{id}"),
        period_label: label.to_owned(),
        due_date: None,
        completed,
        completed_at: None,
        status,
        remindable: true,
    }
}

fn due(mut rec: VaccinationRecord, date: &str) -> VaccinationRecord {
    rec.due_date = Some(date.to_owned());
    rec
}

// =============================================================
// resolve_status
// =============================================================

#[test]
fn resolve_status_empty_is_none() {
    assert_eq!(resolve_status(&[]), None);
}

#[test]
fn all_completed_wins_over_stale_status() {
    let members = [
        record(1, "Mois 2", VaccinationStatus::Overdue, true),
        record(2, "Mois 2", VaccinationStatus::Due, true),
    ];
    assert_eq!(resolve_status(&members), Some(VaccinationStatus::Completed));
}

#[test]
fn any_overdue_beats_due() {
    let members = [
        record(1, "Mois 4", VaccinationStatus::Overdue, false),
        record(2, "Mois 4", VaccinationStatus::Due, false),
    ];
    assert_eq!(resolve_status(&members), Some(VaccinationStatus::Overdue));
}

#[test]
fn overdue_with_partial_completion_stays_overdue() {
    let members = [
        record(1, "Mois 4", VaccinationStatus::Completed, true),
        record(2, "Mois 4", VaccinationStatus::Overdue, false),
    ];
    assert_eq!(resolve_status(&members), Some(VaccinationStatus::Overdue));
}

#[test]
fn due_beats_upcoming() {
    let members = [
        record(1, "Mois 6", VaccinationStatus::Upcoming, false),
        record(2, "Mois 6", VaccinationStatus::Due, false),
    ];
    assert_eq!(resolve_status(&members), Some(VaccinationStatus::Due));
}

#[test]
fn otherwise_upcoming() {
    let members = [
        record(1, "Mois 9", VaccinationStatus::Upcoming, false),
        record(2, "Mois 9", VaccinationStatus::Completed, true),
    ];
    assert_eq!(resolve_status(&members), Some(VaccinationStatus::Upcoming));
}

#[test]
fn resolve_status_is_deterministic() {
    let members = [
        record(1, "Mois 4", VaccinationStatus::Due, false),
        record(2, "Mois 4", VaccinationStatus::Upcoming, false),
    ];
    assert_eq!(resolve_status(&members), resolve_status(&members));
}

// =============================================================
// group_by_period
// =============================================================

#[test]
fn grouping_preserves_first_occurrence_order() {
    let records = [
        record(1, "B", VaccinationStatus::Upcoming, false),
        record(2, "A", VaccinationStatus::Upcoming, false),
        record(3, "B", VaccinationStatus::Upcoming, false),
        record(4, "A", VaccinationStatus::Upcoming, false),
    ];
    let groups = group_by_period(&records);
    let labels: Vec<&str> = groups.iter().map(|g| g.period_label.as_str()).collect();
    assert_eq!(labels, ["B", "A"]);
    let ids: Vec<i64> = groups[0].members.iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn completed_pair_forms_one_completed_group() {
    let records = [
        record(1, "Mois 2", VaccinationStatus::Completed, true),
        record(2, "Mois 2", VaccinationStatus::Completed, true),
    ];
    let groups = group_by_period(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].period_label, "Mois 2");
    assert_eq!(groups[0].status, VaccinationStatus::Completed);
    assert!(groups[0].all_completed());
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    assert!(group_by_period(&[]).is_empty());
}

#[test]
fn completion_targets_skip_completed_and_non_remindable() {
    let mut silent = record(3, "Mois 2", VaccinationStatus::Due, false);
    silent.remindable = false;
    let records = [
        record(1, "Mois 2", VaccinationStatus::Completed, true),
        record(2, "Mois 2", VaccinationStatus::Due, false),
        silent,
    ];
    let groups = group_by_period(&records);
    assert_eq!(groups[0].completion_targets(), vec![2]);
}

#[test]
fn group_due_date_is_first_known_member_date() {
    let records = [
        record(1, "Mois 2", VaccinationStatus::Due, false),
        due(record(2, "Mois 2", VaccinationStatus::Due, false), "2024-03-01"),
    ];
    assert_eq!(group_by_period(&records)[0].due_date(), Some("2024-03-01"));
}

// =============================================================
// coming_soon
// =============================================================

#[test]
fn overdue_within_grace_qualifies() {
    let rec = due(record(1, "A", VaccinationStatus::Overdue, false), "2024-03-01");
    assert!(qualifies_for_coming_soon(&rec, date!(2024 - 03 - 15), 14));
}

#[test]
fn overdue_past_grace_does_not_qualify() {
    let rec = due(record(1, "A", VaccinationStatus::Overdue, false), "2024-03-01");
    assert!(!qualifies_for_coming_soon(&rec, date!(2024 - 03 - 16), 14));
}

#[test]
fn overdue_without_due_date_does_not_qualify() {
    let rec = record(1, "A", VaccinationStatus::Overdue, false);
    assert!(!qualifies_for_coming_soon(&rec, date!(2024 - 03 - 16), 14));
}

#[test]
fn completed_never_qualifies() {
    let rec = record(1, "A", VaccinationStatus::Completed, true);
    assert!(!qualifies_for_coming_soon(&rec, date!(2024 - 03 - 16), 14));
}

#[test]
fn coming_soon_truncates_to_limit() {
    let records = [
        record(1, "A", VaccinationStatus::Due, false),
        record(2, "B", VaccinationStatus::Upcoming, false),
        record(3, "C", VaccinationStatus::Upcoming, false),
    ];
    let groups = coming_soon(&records, date!(2024 - 01 - 01), 14, 2);
    let labels: Vec<&str> = groups.iter().map(|g| g.period_label.as_str()).collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn coming_soon_drops_group_whose_only_member_is_long_overdue() {
    let records = [
        due(record(1, "Old", VaccinationStatus::Overdue, false), "2023-01-01"),
        record(2, "Next", VaccinationStatus::Upcoming, false),
        record(3, "Later", VaccinationStatus::Upcoming, false),
    ];
    let groups = coming_soon(&records, date!(2024 - 01 - 01), 14, 2);
    let labels: Vec<&str> = groups.iter().map(|g| g.period_label.as_str()).collect();
    assert_eq!(labels, ["Next", "Later"]);
}

#[test]
fn coming_soon_regroups_only_qualifying_members() {
    let records = [
        record(1, "Mois 2", VaccinationStatus::Completed, true),
        record(2, "Mois 2", VaccinationStatus::Due, false),
    ];
    let groups = coming_soon(&records, date!(2024 - 01 - 01), 14, 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members.len(), 1);
    assert_eq!(groups[0].status, VaccinationStatus::Due);
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_counts_records_and_groups() {
    let records = [
        record(1, "A", VaccinationStatus::Completed, true),
        record(2, "A", VaccinationStatus::Completed, true),
        record(3, "B", VaccinationStatus::Due, false),
        record(4, "B", VaccinationStatus::Completed, true),
    ];
    let groups = group_by_period(&records);
    let progress = Progress::compute(&records, &groups);
    assert_eq!(progress.total, 4);
    assert_eq!(progress.completed, 3);
    assert_eq!(progress.rounded_percent(), 75);
    assert_eq!(progress.completed_groups, 1);
    assert_eq!(progress.group_count, 2);
    assert!((progress.fill_percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn progress_of_empty_timeline_is_zero() {
    let progress = Progress::compute(&[], &[]);
    assert_eq!(progress.rounded_percent(), 0);
    assert!(progress.fill_percent.abs() < f64::EPSILON);
}
