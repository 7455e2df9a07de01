//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in with `option_env!` when the crate is compiled. Every value falls
//! back to its default when unset or unparsable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_OVERDUE_GRACE_DAYS: i64 = 14;
pub const DEFAULT_COMING_SOON_LIMIT: usize = 2;
pub const DEFAULT_POLL_SECS: u64 = 20;

/// Tunables shared by fetch wrappers and timeline views.
///
/// Provided once at the app root via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_base: String,
    /// How many days past its due date an overdue record still shows in "coming soon".
    pub overdue_grace_days: i64,
    /// Maximum number of period groups in the "coming soon" view.
    pub coming_soon_limit: usize,
    /// Notification poll interval in seconds.
    pub poll_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            overdue_grace_days: DEFAULT_OVERDUE_GRACE_DAYS,
            coming_soon_limit: DEFAULT_COMING_SOON_LIMIT,
            poll_secs: DEFAULT_POLL_SECS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `VACCITRACK_API_URL`: backend base URL (default `http://localhost:8000`)
    /// - `VACCITRACK_OVERDUE_GRACE_DAYS`: default 14
    /// - `VACCITRACK_COMING_SOON_LIMIT`: default 2
    /// - `VACCITRACK_POLL_SECS`: default 20
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("VACCITRACK_API_URL"),
            option_env!("VACCITRACK_OVERDUE_GRACE_DAYS"),
            option_env!("VACCITRACK_COMING_SOON_LIMIT"),
            option_env!("VACCITRACK_POLL_SECS"),
        )
    }

    fn from_values(api_base: Option<&str>, grace: Option<&str>, limit: Option<&str>, poll: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base, |v| v.trim_end_matches('/').to_owned());
        Self {
            api_base,
            overdue_grace_days: parse_or(grace, defaults.overdue_grace_days),
            coming_soon_limit: parse_or(limit, defaults.coming_soon_limit),
            poll_secs: parse_or(poll, defaults.poll_secs).max(1),
        }
    }

    /// Join an API path (with leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
