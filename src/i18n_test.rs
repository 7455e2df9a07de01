use super::*;

#[test]
fn default_locale_is_arabic() {
    assert_eq!(Locale::default(), Locale::Ar);
}

#[test]
fn code_and_from_code_agree() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
}

#[test]
fn from_code_rejects_unknown() {
    assert_eq!(Locale::from_code("de"), None);
    assert_eq!(Locale::from_code(""), None);
}

#[test]
fn arabic_is_rtl_others_ltr() {
    assert_eq!(Locale::Ar.dir(), "rtl");
    assert_eq!(Locale::Fr.dir(), "ltr");
    assert_eq!(Locale::En.dir(), "ltr");
}

#[test]
fn locale_serializes_to_lowercase_code() {
    assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
    assert_eq!(serde_json::from_str::<Locale>("\"en\"").unwrap(), Locale::En);
}

#[test]
fn child_number_uses_locale_word() {
    assert_eq!(Locale::En.child_number(3), "Child 3");
    assert_eq!(Locale::Fr.child_number(1), "Enfant 1");
    assert_eq!(Locale::Ar.child_number(2), "طفل 2");
}
