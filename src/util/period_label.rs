//! Translation keys and localized text for schedule period labels.
//!
//! The backend labels periods in French ("Naissance", "Semaine 4",
//! "Mois 6", "Années 5"). The key form folds whitespace to `_` and strips
//! accents, e.g. "Années 5" becomes "Annees_5"; unknown keys fall back to
//! the raw label.

#[cfg(test)]
#[path = "period_label_test.rs"]
mod period_label_test;

use crate::i18n::Locale;

/// Translation key of a raw period label.
pub fn period_label_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_space {
                key.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        key.push(fold_accent(ch));
    }
    key
}

/// Localized period label, falling back to `raw`.
pub fn schedule_label(raw: &str, locale: Locale) -> String {
    let key = period_label_key(raw.trim());
    let (unit, count) = match key.split_once('_') {
        Some((unit, count)) => (unit, count.parse::<u32>().ok()),
        None => (key.as_str(), None),
    };
    let translated = match (locale, unit, count) {
        (Locale::Fr, ..) => None,
        (Locale::En, "Naissance", None) => Some("Birth".to_owned()),
        (Locale::En, "Semaine", Some(n)) => Some(format!("Week {n}")),
        (Locale::En, "Mois", Some(n)) => Some(format!("Month {n}")),
        (Locale::En, "Annees" | "Ans", Some(n)) => Some(format!("Year {n}")),
        (Locale::Ar, "Naissance", None) => Some("عند الولادة".to_owned()),
        (Locale::Ar, "Semaine", Some(n)) => Some(format!("الأسبوع {n}")),
        (Locale::Ar, "Mois", Some(n)) => Some(format!("الشهر {n}")),
        (Locale::Ar, "Annees" | "Ans", Some(n)) => Some(format!("السنة {n}")),
        _ => None,
    };
    translated.unwrap_or_else(|| raw.to_owned())
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}
