//! Locale switching for request paths.
//!
//! # Responsibilities
//! - Strip the locale prefix from a path
//! - Translate the category and tool segments between locales
//! - Re-prefix the result for the target locale
//!
//! # Design Decisions
//! - Total: unresolved segments pass through unchanged (static pages)
//! - The result is not guaranteed to exist in the target locale
//! - Empty segments are dropped, so `//a/` and `/a` translate alike

use crate::catalog::{category_for_slug_in, Catalog};
use crate::locale::Locale;

/// Split a path into segments, dropping empties and a leading locale code.
pub fn locale_free_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments
        .first()
        .is_some_and(|first| Locale::from_code(first).is_some())
    {
        segments.remove(0);
    }
    segments
}

/// Produce the equivalent of `path` (rendered in `from`) in locale `to`.
pub fn translate_path(path: &str, from: Locale, to: Locale) -> String {
    let segments = locale_free_segments(path);
    if segments.is_empty() {
        return to.home_path().to_string();
    }

    let mut translated: Vec<&str> = segments.clone();
    if let Some(category) = category_for_slug_in(segments[0], from) {
        translated[0] = category.slug(to);

        if let Some(tool_slug) = segments.get(1) {
            if let Some(tool) = Catalog::get().find_tool(category, tool_slug, from) {
                translated[1] = tool.slug(to);
            }
        }
    }

    let mut out = String::from(to.prefix());
    for segment in translated {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Canonical form of `path` in `locale`.
pub fn normalize_path(path: &str, locale: Locale) -> String {
    translate_path(path, locale, locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{tool_for_category_and_slug, url_for_tool, ToolRecord};

    fn resolve(path: &str, locale: Locale) -> Option<&'static ToolRecord> {
        let segments = locale_free_segments(path);
        match segments.as_slice() {
            [category, tool] => tool_for_category_and_slug(category, tool, locale),
            _ => None,
        }
    }

    #[test]
    fn test_password_generator_to_english() {
        assert_eq!(
            translate_path("/generatory/generator-hasel", Locale::Pl, Locale::En),
            "/en/generators/password-generator"
        );
    }

    #[test]
    fn test_english_to_default_drops_prefix() {
        assert_eq!(
            translate_path("/en/calculators/bmi-calculator", Locale::En, Locale::Pl),
            "/kalkulatory/kalkulator-bmi"
        );
    }

    #[test]
    fn test_home_page() {
        assert_eq!(translate_path("/", Locale::Pl, Locale::En), "/en");
        assert_eq!(translate_path("/en", Locale::En, Locale::Pl), "/");
        assert_eq!(translate_path("/en/", Locale::En, Locale::En), "/en");
        assert_eq!(translate_path("", Locale::Pl, Locale::Pl), "/");
    }

    #[test]
    fn test_category_only() {
        assert_eq!(translate_path("/losowe", Locale::Pl, Locale::En), "/en/random");
        assert_eq!(translate_path("/en/text", Locale::En, Locale::Pl), "/tekst");
    }

    #[test]
    fn test_unknown_segments_pass_through() {
        assert_eq!(translate_path("/polityka-prywatnosci", Locale::Pl, Locale::En), "/en/polityka-prywatnosci");
        assert_eq!(
            translate_path("/kalkulatory/nieznany", Locale::Pl, Locale::En),
            "/en/calculators/nieznany"
        );
    }

    #[test]
    fn test_extra_segments_kept() {
        assert_eq!(
            translate_path("/kalkulatory/kalkulator-bmi/wyniki", Locale::Pl, Locale::En),
            "/en/calculators/bmi-calculator/wyniki"
        );
    }

    #[test]
    fn test_source_locale_scopes_resolution() {
        // English slugs are not resolved when the source is Polish.
        assert_eq!(
            translate_path("/calculators/bmi-calculator", Locale::Pl, Locale::En),
            "/en/calculators/bmi-calculator"
        );
        assert_eq!(
            translate_path("/calculators/bmi-calculator", Locale::Pl, Locale::Pl),
            "/calculators/bmi-calculator"
        );
    }

    #[test]
    fn test_same_locale_is_normalization() {
        let cases = [
            ("/generatory/generator-hasel/", Locale::Pl, "/generatory/generator-hasel"),
            ("//generatory//generator-hasel", Locale::Pl, "/generatory/generator-hasel"),
            ("/pl/czas", Locale::Pl, "/czas"),
            ("/en/time/stopwatch", Locale::En, "/en/time/stopwatch"),
        ];
        for (input, locale, expected) in cases {
            assert_eq!(translate_path(input, locale, locale), expected);
            assert_eq!(normalize_path(input, locale), expected);
            // Idempotent on the canonical form.
            assert_eq!(normalize_path(expected, locale), expected);
        }
    }

    #[test]
    fn test_round_trip_resolves_same_tool() {
        for tool in Catalog::get().tools() {
            for from in Locale::ALL {
                for to in Locale::ALL {
                    let path = url_for_tool(tool, from);
                    let there = translate_path(&path, from, to);
                    assert_eq!(there, url_for_tool(tool, to));
                    let back = translate_path(&there, to, from);
                    assert_eq!(resolve(&back, from), Some(tool), "{path} via {there}");
                }
            }
        }
    }

    #[test]
    fn test_locale_free_segments() {
        assert_eq!(locale_free_segments("/en/a/b"), vec!["a", "b"]);
        assert_eq!(locale_free_segments("/pl"), Vec::<&str>::new());
        assert_eq!(locale_free_segments("/english/a"), vec!["english", "a"]);
    }
}
