use super::*;

// =============================================================
// VaccinationRecord
// =============================================================

#[test]
fn vaccination_record_deserializes_backend_shape() {
    let json = serde_json::json!({
        "id": 7,
        "vaccine_name": "BCG",
        "period_label": "Naissance",
        "due_date": "2025-01-10",
        "completed": false,
        "completed_at": null,
        "status": "overdue",
        "remindable": true
    });
    let record: VaccinationRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.status, VaccinationStatus::Overdue);
    assert_eq!(record.due_date.as_deref(), Some("2025-01-10"));
    assert!(record.remindable);
}

#[test]
fn vaccination_record_remindable_defaults_false() {
    let json = serde_json::json!({
        "id": 1,
        "vaccine_name": "HB1",
        "period_label": "Naissance",
        "due_date": null,
        "completed": true,
        "completed_at": "2025-01-02T10:00:00",
        "status": "completed"
    });
    let record: VaccinationRecord = serde_json::from_value(json).unwrap();
    assert!(!record.remindable);
}

#[test]
fn vaccination_status_rejects_unknown_value() {
    assert!(serde_json::from_str::<VaccinationStatus>("\"current\"").is_err());
}

#[test]
fn vaccination_status_names() {
    assert_eq!(VaccinationStatus::Due.as_str(), "due");
    assert_eq!(VaccinationStatus::Overdue.label(), "Overdue");
}

// =============================================================
// Children payloads
// =============================================================

#[test]
fn update_child_payload_skips_absent_fields() {
    let payload = UpdateChildPayload { name: Some("Amine".to_owned()), gender: None };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "name": "Amine" }));
}

#[test]
fn update_child_payload_can_clear_gender() {
    let payload = UpdateChildPayload { name: None, gender: Some(None) };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "gender": null }));
}

#[test]
fn create_child_payload_serializes_null_gender() {
    let payload = CreateChildPayload { name: "Sara".to_owned(), birthdate: "2024-05-01".to_owned(), gender: None };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "name": "Sara", "birthdate": "2024-05-01", "gender": null })
    );
}

// =============================================================
// Auth
// =============================================================

#[test]
fn profile_is_admin_defaults_false() {
    let json = serde_json::json!({
        "id": 3,
        "name": "Nadia",
        "email": "nadia@example.ma",
        "phone_number": null,
        "preferred_language": "fr",
        "region_id": 2,
        "created_at": "2025-02-01T09:00:00"
    });
    let profile: Profile = serde_json::from_value(json).unwrap();
    assert!(!profile.is_admin);
    assert_eq!(profile.region_id, Some(2));
}

#[test]
fn preferred_language_payload_uses_locale_code() {
    let payload = PreferredLanguagePayload { preferred_language: Locale::Ar };
    assert_eq!(serde_json::to_value(payload).unwrap(), serde_json::json!({ "preferred_language": "ar" }));
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn notification_item_vaccine_names_default_empty() {
    let json = serde_json::json!({
        "id": 12,
        "child_id": 4,
        "child_name": "Child 1",
        "vaccine_name": "HB1, BCG",
        "period_label": "Naissance",
        "due_date": null,
        "audio_url": "/reminders/audio/12"
    });
    let item: NotificationItem = serde_json::from_value(json).unwrap();
    assert!(item.vaccine_names.is_empty());
    assert_eq!(item.audio_url, "/reminders/audio/12");
}

// =============================================================
// Admin
// =============================================================

#[test]
fn coverage_region_accepts_integer_valued_floats() {
    let json = serde_json::json!({
        "region_id": 1,
        "region_name": "Souss-Massa",
        "population_2024": 3_020_431.0,
        "estimated_annual_births": 52000,
        "total_registered": 12,
        "vaccinated_count": 9,
        "coverage_pct": 0.75,
        "coverage_pct_display": 75.0,
        "color": "yellow",
        "note": null
    });
    let region: CoverageRegion = serde_json::from_value(json).unwrap();
    assert_eq!(region.population_2024, 3_020_431);
    assert_eq!(region.color, CoverageColor::Yellow);
}

#[test]
fn coverage_region_rejects_fractional_counts() {
    let json = serde_json::json!({
        "region_id": 1,
        "region_name": "Oriental",
        "population_2024": 10.5,
        "estimated_annual_births": 1,
        "total_registered": 1,
        "vaccinated_count": 1,
        "coverage_pct": 1.0,
        "coverage_pct_display": 100.0,
        "color": "green",
        "note": null
    });
    assert!(serde_json::from_value::<CoverageRegion>(json).is_err());
}

#[test]
fn supply_response_tolerates_empty_national() {
    let json = serde_json::json!({ "regions": [], "national": {}, "data_quality_warning": false });
    let supply: SupplyResponse = serde_json::from_value(json).unwrap();
    assert_eq!(supply.national, NationalSupply::default());
}

#[test]
fn telegram_send_request_flattens_request_fields() {
    let body = TelegramSendRequest {
        request: TelegramRequest {
            vaccine_name: "ROR".to_owned(),
            region_ids: vec![1, 4],
            language: TelegramLanguage::Darija,
            template_type: TelegramTemplate::Urgent,
        },
        send: true,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "vaccine_name": "ROR",
            "region_ids": [1, 4],
            "language": "darija",
            "template_type": "urgent",
            "send": true
        })
    );
}

#[test]
fn coverage_mode_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&CoverageMode::RegisteredChildren).unwrap(), "\"registered_children\"");
    assert_eq!(CoverageMode::VaccinationRecords.as_str(), "vaccination_records");
}
