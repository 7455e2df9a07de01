use super::*;
use time::macros::date;

const TODAY: Date = date!(2024 - 06 - 10);

// =============================================================
// ChildDraft
// =============================================================

#[test]
fn draft_incomplete_without_birthdate() {
    let draft = ChildDraft { name: "Sara".into(), ..ChildDraft::default() };
    assert!(!draft.is_complete());
}

#[test]
fn draft_validates_into_payload() {
    let draft = ChildDraft { name: " Sara ".into(), birthdate: "2024-01-15".into(), gender: String::new() };
    let payload = draft.validate(TODAY).unwrap();
    assert_eq!(payload.name, "Sara");
    assert_eq!(payload.birthdate, "2024-01-15");
    assert_eq!(payload.gender, None);
}

#[test]
fn draft_rejects_future_birthdate() {
    let draft = ChildDraft { name: "Sara".into(), birthdate: "2024-06-11".into(), gender: "Girl".into() };
    assert!(matches!(draft.validate(TODAY), Err(ApiError::Validation(_))));
}

#[test]
fn draft_accepts_birthdate_today() {
    let draft = ChildDraft { name: "Sara".into(), birthdate: "2024-06-10".into(), gender: "Girl".into() };
    assert_eq!(draft.validate(TODAY).unwrap().gender.as_deref(), Some("Girl"));
}

#[test]
fn draft_rejects_blank_name() {
    let draft = ChildDraft { name: "  ".into(), birthdate: "2024-01-15".into(), gender: String::new() };
    assert_eq!(draft.validate(TODAY).unwrap_err().to_string(), "Name is required");
}

// =============================================================
// EditDraft
// =============================================================

#[test]
fn edit_draft_starts_from_child() {
    let child = Child {
        id: 4,
        name: "Omar".into(),
        birthdate: Some("2023-05-01".into()),
        gender: Some("Boy".into()),
        created_at: "2023-05-02T00:00:00".into(),
    };
    let draft = EditDraft::from_child(&child);
    assert_eq!(draft.child_id, 4);
    assert_eq!(draft.gender, "Boy");
    assert!(!draft.confirm_delete);
}

#[test]
fn edit_draft_empty_gender_clears_it() {
    let draft = EditDraft { child_id: 4, name: "Omar".into(), gender: String::new(), confirm_delete: false };
    let payload = draft.validate().unwrap();
    assert_eq!(payload.gender, Some(None));
    let body = serde_json::to_value(&payload).unwrap();
    assert!(body["gender"].is_null());
}
