use super::*;

// =============================================================
// CoverageQuery
// =============================================================

#[test]
fn coverage_query_minimal_has_only_vaccine() {
    let query = CoverageQuery::for_vaccine("BCG");
    assert_eq!(query.to_query(), "vaccine=BCG");
}

#[test]
fn coverage_query_includes_set_filters_in_order() {
    let query = CoverageQuery {
        vaccine: "VPO".into(),
        refresh: true,
        date_from: Some("2024-01-01".into()),
        date_to: Some("2024-06-30".into()),
        mode: Some(CoverageMode::VaccinationRecords),
    };
    assert_eq!(
        query.to_query(),
        "vaccine=VPO&refresh=true&date_from=2024-01-01&date_to=2024-06-30&mode=vaccination_records"
    );
}

#[test]
fn coverage_query_skips_empty_dates() {
    let query = CoverageQuery { date_from: Some(String::new()), ..CoverageQuery::for_vaccine("BCG") };
    assert_eq!(query.to_query(), "vaccine=BCG");
}

#[test]
fn vaccine_names_are_percent_encoded() {
    let query = CoverageQuery::for_vaccine("Hép B & Penta");
    assert_eq!(query.to_query(), "vaccine=H%C3%A9p%20B%20%26%20Penta");
}

// =============================================================
// paths
// =============================================================

#[test]
fn coverage_path_prefixes_query() {
    assert_eq!(coverage_path(&CoverageQuery::for_vaccine("BCG")), "/admin/coverage?vaccine=BCG");
}

#[test]
fn supply_and_detail_paths_encode_vaccine() {
    assert_eq!(supply_path("RR (1)"), "/admin/supply?vaccine=RR%20(1)");
    assert_eq!(region_detail_path(4, "BCG"), "/admin/region/4/detail?vaccine=BCG");
}

// =============================================================
// telegram payload
// =============================================================

#[test]
fn telegram_payload_trims_chat_id() {
    assert_eq!(telegram_payload(Some("  -100123 ")).telegram_chat_id, "-100123");
}

#[test]
fn telegram_payload_none_clears_binding() {
    assert_eq!(telegram_payload(None).telegram_chat_id, "");
}

#[test]
fn telegram_send_body_flattens_request() {
    let request = TelegramRequest {
        vaccine_name: "BCG".into(),
        region_ids: vec![1],
        language: crate::net::types::TelegramLanguage::Darija,
        template_type: crate::net::types::TelegramTemplate::Urgent,
    };
    let body = serde_json::to_value(TelegramSendRequest { request, send: true }).unwrap();
    assert_eq!(body["language"], "darija");
    assert_eq!(body["template_type"], "urgent");
    assert_eq!(body["send"], true);
}
