//! Calendar-date helpers for due dates and relative labels.
//!
//! The backend sends ISO dates (`YYYY-MM-DD`, sometimes a full timestamp).
//! Only the date part matters here; time of day and zone are ignored.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parse the leading `YYYY-MM-DD` of an ISO date or timestamp.
pub fn parse_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// The local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        #[allow(clippy::cast_possible_truncation)]
        let year = now.get_full_year() as i32;
        match (month, day) {
            (Some(month), Some(day)) => {
                Date::from_calendar_date(year, month, day).unwrap_or_else(|_| OffsetDateTime::now_utc().date())
            }
            _ => OffsetDateTime::now_utc().date(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// Current instant as RFC 3339, used for optimistic `completed_at` patches.
pub fn now_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use time::format_description::well_known::Rfc3339;

        OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
    }
}

/// Short display form, e.g. `Mar 5, 2024`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day padding:none], [year]")).unwrap_or_default()
}

/// Display form of a raw ISO date; the raw text when it does not parse.
pub fn format_raw(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), format_date)
}

/// Due date relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueLabel {
    Unknown,
    Today,
    Tomorrow,
    /// Two or three days ahead.
    InDays(i64),
    Past { date: Date, days: i64 },
    On(Date),
}

impl DueLabel {
    pub fn from_due(due: Option<&str>, today: Date) -> Self {
        let Some(date) = due.and_then(parse_date) else {
            return Self::Unknown;
        };
        match days_between(today, date) {
            0 => Self::Today,
            1 => Self::Tomorrow,
            n @ 2..=3 => Self::InDays(n),
            n if n < 0 => Self::Past { date, days: -n },
            _ => Self::On(date),
        }
    }

    /// Label text. Past dates read "N days overdue" only when `overdue`.
    pub fn text(self, overdue: bool) -> String {
        match self {
            Self::Unknown => String::new(),
            Self::Today => "Today".to_owned(),
            Self::Tomorrow => "Tomorrow".to_owned(),
            Self::InDays(n) => format!("In {n} days"),
            Self::Past { days, .. } if overdue => {
                if days == 1 { "1 day overdue".to_owned() } else { format!("{days} days overdue") }
            }
            Self::Past { date, .. } | Self::On(date) => format_date(date),
        }
    }
}
