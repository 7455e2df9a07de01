//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames.
//! Dates and timestamps stay as the strings the backend sends; `util::dates`
//! parses them where arithmetic is needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n::Locale;

// =============================================================================
// VACCINATIONS
// =============================================================================

/// Backend-computed status of one vaccination record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaccinationStatus {
    Completed,
    Due,
    Overdue,
    Upcoming,
}

impl VaccinationStatus {
    /// Lowercase name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Due => "due",
            Self::Overdue => "overdue",
            Self::Upcoming => "upcoming",
        }
    }

    /// Badge text shown next to a period.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Due => "Due now",
            Self::Overdue => "Overdue",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// One scheduled dose for a child, as returned by `GET /children/{id}/timeline`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: i64,
    pub vaccine_name: String,
    /// Schedule bucket, e.g. `"Mois 2"`.
    pub period_label: String,
    /// `YYYY-MM-DD`, absent when the child has no birthdate.
    pub due_date: Option<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub status: VaccinationStatus,
    /// Eligible for a voice reminder and for "mark complete" from the timeline.
    #[serde(default)]
    pub remindable: bool,
}

// =============================================================================
// CHILDREN
// =============================================================================

/// A child registered by the current parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: i64,
    pub name: String,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub created_at: String,
}

/// Body of `POST /children/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChildPayload {
    pub name: String,
    pub birthdate: String,
    pub gender: Option<String>,
}

/// Body of `PUT /children/{id}`. Absent fields are left unchanged; birthdate is immutable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateChildPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` clears the gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub region_id: Option<i64>,
}

/// Successful `POST /auth/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: String,
}

/// The authenticated parent as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub region_id: Option<i64>,
    pub created_at: String,
}

/// Body of `PATCH /auth/me`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PreferredLanguagePayload {
    pub preferred_language: Locale,
}

/// Public region entry from `GET /api/regions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// A pending voice reminder. `id` is the vaccination id it was generated for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: i64,
    pub child_id: i64,
    pub child_name: String,
    /// Comma-separated vaccine names for the period, e.g. `"HB1, BCG, VPO0"`.
    pub vaccine_name: String,
    #[serde(default)]
    pub vaccine_names: Vec<String>,
    pub period_label: String,
    pub due_date: Option<String>,
    /// Path relative to the API base, e.g. `/reminders/audio/42`.
    pub audio_url: String,
}

// =============================================================================
// ADMIN
// =============================================================================

/// Traffic-light classification the backend assigns to a region's coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageColor {
    Green,
    Yellow,
    Red,
}

impl CoverageColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Safe",
            Self::Yellow => "At risk",
            Self::Red => "Danger",
        }
    }
}

/// Denominator used by `GET /admin/coverage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMode {
    RegisteredChildren,
    VaccinationRecords,
}

impl CoverageMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegisteredChildren => "registered_children",
            Self::VaccinationRecords => "vaccination_records",
        }
    }
}

/// One region row of `GET /admin/coverage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageRegion {
    pub region_id: i64,
    pub region_name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub population_2024: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub estimated_annual_births: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_registered: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub vaccinated_count: i64,
    /// Fraction in `[0, 1]`.
    pub coverage_pct: f64,
    /// Percentage rounded by the backend for display.
    pub coverage_pct_display: f64,
    pub color: CoverageColor,
    pub note: Option<String>,
}

/// One region row of `GET /admin/supply`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyRegion {
    pub region_id: i64,
    pub region_name: String,
    pub births: f64,
    pub projected_need: f64,
    pub with_buffer: f64,
    pub current_stock: f64,
    pub shortage_or_surplus: String,
}

/// National totals of `GET /admin/supply`. The backend sends `{}` when no stock is seeded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalSupply {
    pub current_stock: f64,
    pub projected_need_total: f64,
    pub projected_need_with_buffer_total: f64,
    pub surplus: f64,
    pub shortage: f64,
}

/// Response of `GET /admin/supply`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyResponse {
    pub regions: Vec<SupplyRegion>,
    #[serde(default)]
    pub national: NationalSupply,
    #[serde(default)]
    pub data_quality_warning: bool,
}

/// Child summary inside a region detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredChild {
    pub id: i64,
    pub name: String,
    pub birthdate: Option<String>,
}

/// Completed/total doses for one period inside a region detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodProgress {
    pub period_label: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub completed: i64,
}

/// Weekly completion count inside a region detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWeek {
    pub week_end: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub completed_count: i64,
}

/// Response of `GET /admin/region/{id}/detail`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDetail {
    pub region_id: i64,
    pub region_name: String,
    pub vaccine_name: String,
    #[serde(default)]
    pub registered_children: Vec<RegisteredChild>,
    #[serde(default)]
    pub by_period: Vec<PeriodProgress>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub last_30_days_count: i64,
    #[serde(default)]
    pub trend_weeks: Vec<TrendWeek>,
}

/// Region row of `GET /admin/regions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRegion {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub population_2024: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub estimated_annual_births: i64,
    pub telegram_chat_id: Option<String>,
}

/// Body of `PATCH /admin/region/{id}`. An empty string clears the chat id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionTelegramPayload {
    pub telegram_chat_id: String,
}

/// Response of `PATCH /admin/region/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTelegramUpdate {
    pub id: i64,
    pub telegram_chat_id: Option<String>,
}

/// Language of generated Telegram messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelegramLanguage {
    #[default]
    Fr,
    Darija,
}

/// Template of generated Telegram messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelegramTemplate {
    #[default]
    Summary,
    Urgent,
}

/// Body of `POST /admin/telegram/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TelegramRequest {
    pub vaccine_name: String,
    pub region_ids: Vec<i64>,
    pub language: TelegramLanguage,
    pub template_type: TelegramTemplate,
}

/// Body of `POST /admin/telegram/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TelegramSendRequest {
    #[serde(flatten)]
    pub request: TelegramRequest,
    pub send: bool,
}

/// One generated message preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramPreview {
    pub region_id: i64,
    pub region_name: String,
    pub preview: String,
    pub can_send: bool,
    pub error: Option<String>,
}

/// Response of `POST /admin/telegram/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramGenerateResponse {
    pub messages: Vec<TelegramPreview>,
}

/// Delivery outcome for one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSendResult {
    pub region_id: i64,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /admin/telegram/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSendResponse {
    pub results: Vec<TelegramSendResult>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
