use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for case and accent insensitive comparison.
///
/// "América", "america" and "AMÉRICA" all become "america". Lowercasing
/// happens before decomposition so marks produced by case mapping
/// (e.g. 'İ' -> "i\u{307}") are stripped too, which keeps the fold idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Like [`normalize`], but a missing value folds to the empty string
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(normalize("América"), "america");
        assert_eq!(normalize("AMÉRICA"), "america");
        assert_eq!(normalize("america"), "america");
        assert_eq!(normalize("España"), "espana");
        assert_eq!(normalize("Japón"), "japon");
    }

    #[test]
    fn keeps_non_letters() {
        assert_eq!(normalize("Europa/Asia"), "europa/asia");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  "), "  ");
    }

    #[test]
    fn missing_text_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("México")), "mexico");
    }

    #[test]
    fn dotted_capital_i() {
        assert_eq!(normalize("İstanbul"), "istanbul");
    }

    proptest! {
        #[test]
        fn idempotent(s in "[a-zA-Z0-9À-ÿ\\u{0300}-\\u{036F} /-]{0,32}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn case_insensitive(s in "[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ ]{0,24}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
