use super::*;

fn client() -> ApiClient {
    ApiClient::anonymous(&ClientConfig::default())
}

// =============================================================
// url / paths
// =============================================================

#[test]
fn url_joins_base_and_path() {
    assert_eq!(client().url("/children/"), "http://localhost:8000/children/");
}

#[test]
fn anonymous_client_has_no_authorization() {
    assert_eq!(client().authorization(), None);
}

#[test]
fn child_paths_embed_ids() {
    assert_eq!(child_path(7), "/children/7");
    assert_eq!(timeline_path(7), "/children/7/timeline");
}

#[test]
fn completion_and_notification_paths_embed_vaccination_id() {
    assert_eq!(complete_path(42), "/vaccinations/42/complete");
    assert_eq!(notification_path(42), "/notifications/42");
}

// =============================================================
// decode_body
// =============================================================

#[test]
fn decode_body_parses_timeline() {
    let body = r#"[{"id":1,"vaccine_name":"BCG","period_label":"Birth","due_date":"2024-01-01",
        "completed":false,"completed_at":null,"status":"overdue","remindable":true}]"#;
    let records: Vec<VaccinationRecord> = decode_body(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].vaccine_name, "BCG");
}

#[test]
fn decode_body_maps_bad_shape_to_decode_error() {
    let err = decode_body::<Vec<Child>>(r#"{"not":"a list"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// non-hydrate transport
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let err = futures::executor::block_on(client().fetch_children()).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
