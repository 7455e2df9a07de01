use super::*;
use time::macros::date;

// =============================================================
// parsing
// =============================================================

#[test]
fn parse_date_accepts_plain_date() {
    assert_eq!(parse_date("2024-03-05"), Some(date!(2024 - 03 - 05)));
}

#[test]
fn parse_date_uses_date_part_of_timestamp() {
    assert_eq!(parse_date("2024-03-05T10:11:12Z"), Some(date!(2024 - 03 - 05)));
}

#[test]
fn parse_date_rejects_garbage() {
    assert_eq!(parse_date("soon"), None);
    assert_eq!(parse_date("2024-13-40"), None);
}

#[test]
fn days_between_is_signed() {
    assert_eq!(days_between(date!(2024 - 03 - 01), date!(2024 - 03 - 15)), 14);
    assert_eq!(days_between(date!(2024 - 03 - 15), date!(2024 - 03 - 01)), -14);
}

#[test]
fn format_date_is_short_month_day_year() {
    assert_eq!(format_date(date!(2024 - 03 - 05)), "Mar 5, 2024");
}

#[test]
fn format_raw_falls_back_to_input() {
    assert_eq!(format_raw("2024-12-25"), "Dec 25, 2024");
    assert_eq!(format_raw("unknown"), "unknown");
}

#[test]
fn now_timestamp_parses_back_to_a_date() {
    assert!(parse_date(&now_timestamp()).is_some());
}

// =============================================================
// DueLabel
// =============================================================

const TODAY: Date = date!(2024 - 06 - 10);

#[test]
fn due_label_today_and_tomorrow() {
    assert_eq!(DueLabel::from_due(Some("2024-06-10"), TODAY).text(false), "Today");
    assert_eq!(DueLabel::from_due(Some("2024-06-11"), TODAY).text(false), "Tomorrow");
}

#[test]
fn due_label_two_or_three_days_ahead() {
    assert_eq!(DueLabel::from_due(Some("2024-06-12"), TODAY), DueLabel::InDays(2));
    assert_eq!(DueLabel::from_due(Some("2024-06-13"), TODAY).text(false), "In 3 days");
}

#[test]
fn due_label_further_out_shows_date() {
    assert_eq!(DueLabel::from_due(Some("2024-06-14"), TODAY).text(false), "Jun 14, 2024");
}

#[test]
fn due_label_past_depends_on_overdue_flag() {
    let label = DueLabel::from_due(Some("2024-06-01"), TODAY);
    assert_eq!(label.text(true), "9 days overdue");
    assert_eq!(label.text(false), "Jun 1, 2024");
    assert_eq!(DueLabel::from_due(Some("2024-06-09"), TODAY).text(true), "1 day overdue");
}

#[test]
fn due_label_missing_date_is_empty() {
    assert_eq!(DueLabel::from_due(None, TODAY).text(true), "");
}
