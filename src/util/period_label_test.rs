use super::*;

// =============================================================
// period_label_key
// =============================================================

#[test]
fn key_strips_accents_and_joins_words() {
    assert_eq!(period_label_key("Années 5"), "Annees_5");
}

#[test]
fn key_collapses_whitespace_runs() {
    assert_eq!(period_label_key("Mois  \t6"), "Mois_6");
}

#[test]
fn key_keeps_plain_labels() {
    assert_eq!(period_label_key("Naissance"), "Naissance");
}

// =============================================================
// schedule_label
// =============================================================

#[test]
fn french_locale_keeps_backend_label() {
    assert_eq!(schedule_label("Mois 2", Locale::Fr), "Mois 2");
}

#[test]
fn english_translates_known_units() {
    assert_eq!(schedule_label("Naissance", Locale::En), "Birth");
    assert_eq!(schedule_label("Semaine 4", Locale::En), "Week 4");
    assert_eq!(schedule_label("Années 5", Locale::En), "Year 5");
}

#[test]
fn arabic_translates_months() {
    assert_eq!(schedule_label("Mois 18", Locale::Ar), "الشهر 18");
}

#[test]
fn unknown_labels_fall_back_to_raw() {
    assert_eq!(schedule_label("Rappel scolaire", Locale::En), "Rappel scolaire");
    assert_eq!(schedule_label("Mois x", Locale::En), "Mois x");
}
