//! Locale-aware rendering of placeholder child names.
//!
//! Children added without a name are stored as "Child N", "Enfant N" or
//! "طفل N" depending on the UI language at creation time. Those render as
//! the numbered label of the current locale; real names render verbatim.

#[cfg(test)]
#[path = "child_name_test.rs"]
mod child_name_test;

use crate::i18n::Locale;

const LATIN_PREFIXES: [&str; 2] = ["child", "enfant"];
const ARABIC_PREFIX: &str = "طفل";

/// Display name of a stored child name in `locale`.
pub fn display_name(stored: &str, locale: Locale) -> String {
    match placeholder_number(stored) {
        Some(n) => locale.child_number(n),
        None => stored.to_owned(),
    }
}

/// The `N` of a placeholder name, when `stored` is one and `N >= 1`.
pub fn placeholder_number(stored: &str) -> Option<u32> {
    let trimmed = stored.trim();
    for prefix in LATIN_PREFIXES {
        let Some(head) = trimmed.get(..prefix.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(prefix) {
            return parse_number(&trimmed[prefix.len()..], false);
        }
    }
    let rest = trimmed.strip_prefix(ARABIC_PREFIX)?;
    parse_number(rest, true)
}

fn parse_number(rest: &str, allow_arabic_indic: bool) -> Option<u32> {
    let digits = rest.trim_start();
    if digits.is_empty() {
        return None;
    }
    let mut normalized = String::with_capacity(digits.len());
    for ch in digits.chars() {
        match ch {
            '0'..='9' => normalized.push(ch),
            '\u{0660}'..='\u{0669}' if allow_arabic_indic => {
                normalized.extend(char::from_digit(u32::from(ch) - 0x0660, 10));
            }
            _ => return None,
        }
    }
    normalized.parse::<u32>().ok().filter(|n| *n >= 1)
}
