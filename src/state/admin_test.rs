use super::*;
use crate::net::types::CoverageColor;

fn region(id: i64, registered: i64, pct: f64) -> CoverageRegion {
    CoverageRegion {
        region_id: id,
        region_name: format!("Region {id}"),
        population_2024: 1_000_000,
        estimated_annual_births: 20_000,
        total_registered: registered,
        vaccinated_count: registered / 2,
        coverage_pct: pct,
        coverage_pct_display: pct,
        color: CoverageColor::Yellow,
        note: None,
    }
}

fn admin_region(id: i64, chat: Option<&str>) -> AdminRegion {
    AdminRegion {
        id,
        name: format!("Region {id}"),
        population_2024: 1_000_000,
        estimated_annual_births: 20_000,
        telegram_chat_id: chat.map(str::to_owned),
    }
}

// =============================================================
// coverage helpers
// =============================================================

#[test]
fn coverage_label_is_na_without_registrations() {
    assert_eq!(coverage_label(&region(1, 0, 0.0)), "N/A");
}

#[test]
fn coverage_label_prints_display_percent() {
    assert_eq!(coverage_label(&region(1, 10, 87.5)), "87.5%");
    assert_eq!(coverage_label(&region(1, 10, 90.0)), "90%");
}

#[test]
fn bar_width_is_clamped() {
    assert!((bar_width(&region(1, 10, 140.0)) - 100.0).abs() < f64::EPSILON);
    assert!(bar_width(&region(1, 10, -3.0)).abs() < f64::EPSILON);
}

// =============================================================
// supply helpers
// =============================================================

#[test]
fn supply_gap_positive_is_adequate() {
    let national = NationalSupply { current_stock: 1200.0, projected_need_total: 1000.0, ..NationalSupply::default() };
    let gap = supply_gap(&national);
    assert_eq!(supply_gap_label(gap), "+200");
    assert_eq!(supply_status(gap), "Stock suffisant");
}

#[test]
fn supply_gap_negative_is_shortage() {
    let national = NationalSupply { current_stock: 0.0, projected_need_total: 350.5, ..NationalSupply::default() };
    let gap = supply_gap(&national);
    assert_eq!(supply_gap_label(gap), "-350.5");
    assert_eq!(supply_status(gap), "Pénurie critique");
}

// =============================================================
// AdminState
// =============================================================

#[test]
fn blank_vaccine_clears_panels() {
    let mut state = AdminState { coverage: vec![region(1, 5, 50.0)], ..AdminState::default() };
    state.select_vaccine("BCG");
    state.select_vaccine("  ");
    assert_eq!(state.vaccine, None);
    assert!(state.coverage.is_empty());
    assert_eq!(state.begin_load(), None);
}

#[test]
fn begin_load_consumes_refresh_flag() {
    let mut state = AdminState::default();
    state.select_vaccine("BCG");
    state.request_refresh();
    assert_eq!(state.begin_load(), Some(("BCG".to_owned(), true)));
    assert_eq!(state.begin_load(), Some(("BCG".to_owned(), false)));
}

#[test]
fn apply_load_keeps_first_error() {
    let mut state = AdminState::default();
    state.select_vaccine("BCG");
    state.begin_load();
    state.apply_load(
        "BCG",
        Err(ApiError::Status { status: 403, message: "Admin only".into() }),
        Err(ApiError::Transport("offline".into())),
    );
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Admin only"));
}

#[test]
fn apply_load_for_other_vaccine_is_dropped() {
    let mut state = AdminState::default();
    state.select_vaccine("VPO");
    state.apply_load("BCG", Ok(vec![region(1, 5, 50.0)]), Ok(SupplyResponse::default()));
    assert!(state.coverage.is_empty());
}

#[test]
fn failed_vaccine_list_is_empty() {
    let mut state = AdminState::default();
    state.apply_vaccines(Err(ApiError::Transport("offline".into())));
    assert!(state.vaccines.is_empty());
    assert_eq!(state.vaccines_error.as_deref(), Some("offline"));
}

#[test]
fn vaccine_list_reload_clears_error() {
    let mut state = AdminState::default();
    state.apply_vaccines(Err(ApiError::Transport("offline".into())));
    state.apply_vaccines(Ok(vec!["BCG".into()]));
    assert_eq!(state.vaccines, vec!["BCG".to_owned()]);
    assert_eq!(state.vaccines_error, None);
}

#[test]
fn failed_detail_keeps_modal_open_with_error() {
    let mut state = AdminState::default();
    state.open_detail(7);
    state.apply_detail(7, Err(ApiError::Status { status: 500, message: "boom".into() }));
    assert_eq!(state.detail_id, Some(7));
    assert_eq!(state.detail, None);
    assert_eq!(state.detail_error.as_deref(), Some("boom"));
}

#[test]
fn reopening_detail_clears_previous_error() {
    let mut state = AdminState::default();
    state.open_detail(7);
    state.apply_detail(7, Err(ApiError::Status { status: 500, message: "boom".into() }));
    state.open_detail(8);
    assert_eq!(state.detail_error, None);
    state.apply_detail(7, Err(ApiError::Status { status: 500, message: "late".into() }));
    assert_eq!(state.detail_error, None);
}

#[test]
fn stale_detail_is_dropped() {
    let mut state = AdminState::default();
    state.open_detail(2);
    state.close_detail();
    state.apply_detail(
        2,
        Ok(RegionDetail {
            region_id: 2,
            region_name: "Rabat".into(),
            vaccine_name: "BCG".into(),
            registered_children: vec![],
            by_period: vec![],
            last_30_days_count: 0,
            trend_weeks: vec![],
        }),
    );
    assert_eq!(state.detail, None);
}

// =============================================================
// region settings
// =============================================================

#[test]
fn start_edit_prefills_current_chat_id() {
    let mut state = RegionSettingsState { regions: vec![admin_region(1, Some("-1001"))], ..RegionSettingsState::default() };
    state.start_edit(1);
    assert_eq!(state.editing, Some((1, "-1001".to_owned())));
}

#[test]
fn empty_chat_id_update_clears_binding() {
    let mut state = RegionSettingsState { regions: vec![admin_region(1, Some("-1001"))], ..RegionSettingsState::default() };
    state.start_edit(1);
    state.apply_update(Ok(RegionTelegramUpdate { id: 1, telegram_chat_id: Some(String::new()) }));
    assert_eq!(state.regions[0].telegram_chat_id, None);
    assert_eq!(state.editing, None);
}

// =============================================================
// telegram
// =============================================================

#[test]
fn telegram_request_requires_vaccine_and_region() {
    let mut draft = TelegramDraft::default();
    assert!(draft.request(Some("BCG")).is_err());
    draft.toggle_region(3);
    assert!(draft.request(None).is_err());
    let request = draft.request(Some("BCG")).unwrap();
    assert_eq!(request.region_ids, vec![3]);
    assert_eq!(request.language, TelegramLanguage::Fr);
    assert_eq!(request.template_type, TelegramTemplate::Summary);
}

#[test]
fn toggle_region_twice_deselects_and_clears_previews() {
    let mut draft = TelegramDraft::default();
    draft.toggle_region(3);
    draft.apply_generate(Ok(TelegramGenerateResponse {
        messages: vec![TelegramPreview {
            region_id: 3,
            region_name: "Rabat".into(),
            preview: "...".into(),
            can_send: true,
            error: None,
        }],
    }));
    assert_eq!(draft.sendable(), 1);
    draft.toggle_region(3);
    assert!(draft.selected.is_empty());
    assert!(draft.previews.is_empty());
}

#[test]
fn send_results_count_deliveries() {
    let mut draft = TelegramDraft::default();
    draft.apply_send(Ok(TelegramSendResponse {
        results: vec![
            TelegramSendResult { region_id: 1, success: true, error: None },
            TelegramSendResult { region_id: 2, success: false, error: Some("chat not found".into()) },
        ],
    }));
    assert_eq!(draft.delivered(), 1);
}
