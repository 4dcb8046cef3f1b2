//! Localized display strings for categories and tools.
//!
//! Strings are keyed by the closed `ToolId` / `Category` enums, so a tool
//! without a translation does not compile.

use crate::catalog::{Category, ToolId};
use crate::locale::{Locale, Localized};

/// Display name and short description of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolText {
    pub name: &'static str,
    pub description: &'static str,
}

const fn text(name: &'static str, description: &'static str) -> ToolText {
    ToolText { name, description }
}

/// Site title shown on the home page.
pub fn site_title(locale: Locale) -> &'static str {
    *Localized::new("Darmowe narzędzia online", "Free online tools").get(locale)
}

pub fn category_name(category: Category, locale: Locale) -> &'static str {
    let names = match category {
        Category::Generators => Localized::new("Generatory", "Generators"),
        Category::Calculators => Localized::new("Kalkulatory", "Calculators"),
        Category::Text => Localized::new("Narzędzia tekstowe", "Text tools"),
        Category::Time => Localized::new("Czas", "Time"),
        Category::Random => Localized::new("Losowanie", "Random"),
    };
    *names.get(locale)
}

pub fn tool_text(tool: ToolId, locale: Locale) -> ToolText {
    let strings = match tool {
        ToolId::PasswordGenerator => Localized::new(
            text("Generator haseł", "Twórz silne, losowe hasła."),
            text("Password generator", "Create strong random passwords."),
        ),
        ToolId::LoremIpsum => Localized::new(
            text("Generator Lorem Ipsum", "Tekst zastępczy w akapitach, zdaniach lub słowach."),
            text("Lorem Ipsum generator", "Placeholder text by paragraphs, sentences or words."),
        ),
        ToolId::QrCode => Localized::new(
            text("Generator kodów QR", "Zamień link lub tekst w kod QR."),
            text("QR code generator", "Turn a link or text into a QR code."),
        ),
        ToolId::BmiCalculator => Localized::new(
            text("Kalkulator BMI", "Oblicz wskaźnik masy ciała."),
            text("BMI calculator", "Calculate your body mass index."),
        ),
        ToolId::ProportionCalculator => Localized::new(
            text("Kalkulator proporcji", "Rozwiąż proporcję a/b = c/x."),
            text("Proportion calculator", "Solve the proportion a/b = c/x."),
        ),
        ToolId::SleepCalculator => Localized::new(
            text("Kalkulator snu", "Dopasuj godzinę snu do cykli snu."),
            text("Sleep calculator", "Plan bedtime around sleep cycles."),
        ),
        ToolId::PercentageCalculator => Localized::new(
            text("Kalkulator procentów", "Procent z liczby i zmiana procentowa."),
            text("Percentage calculator", "Percent of a number and percent change."),
        ),
        ToolId::CharacterCounter => Localized::new(
            text("Licznik znaków", "Policz znaki ze spacjami i bez."),
            text("Character counter", "Count characters with and without spaces."),
        ),
        ToolId::WordCounter => Localized::new(
            text("Licznik słów", "Policz słowa, zdania i akapity."),
            text("Word counter", "Count words, sentences and paragraphs."),
        ),
        ToolId::CaseConverter => Localized::new(
            text("Zmiana wielkości liter", "Zamień tekst na wielkie lub małe litery."),
            text("Case converter", "Convert text to upper or lower case."),
        ),
        ToolId::CountdownTimer => Localized::new(
            text("Odliczanie", "Odliczaj czas do wybranej daty."),
            text("Countdown timer", "Count down to a chosen date."),
        ),
        ToolId::Stopwatch => Localized::new(
            text("Stoper", "Mierz czas z dokładnością do setnych sekundy."),
            text("Stopwatch", "Measure time to a hundredth of a second."),
        ),
        ToolId::RandomNumber => Localized::new(
            text("Losowanie liczb", "Wylosuj liczbę z wybranego zakresu."),
            text("Random number generator", "Pick a number from a range."),
        ),
        ToolId::CoinFlip => Localized::new(
            text("Rzut monetą", "Orzeł czy reszka?"),
            text("Coin flip", "Heads or tails?"),
        ),
        ToolId::YesOrNo => Localized::new(
            text("Tak czy nie", "Losowa odpowiedź na pytanie."),
            text("Yes or no", "A random answer to your question."),
        ),
    };
    *strings.get(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_every_tool_has_text_in_every_locale() {
        for tool in Catalog::get().tools() {
            for locale in Locale::ALL {
                let text = tool_text(tool.id, locale);
                assert!(!text.name.is_empty(), "{} ({})", tool.id.id(), locale);
                assert!(!text.description.is_empty(), "{} ({})", tool.id.id(), locale);
            }
        }
    }

    #[test]
    fn test_tool_text_differs_per_locale() {
        let pl = tool_text(ToolId::BmiCalculator, Locale::Pl);
        let en = tool_text(ToolId::BmiCalculator, Locale::En);
        assert_eq!(pl.name, "Kalkulator BMI");
        assert_eq!(en.name, "BMI calculator");
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name(Category::Generators, Locale::Pl), "Generatory");
        assert_eq!(category_name(Category::Text, Locale::En), "Text tools");
        assert_eq!(site_title(Locale::En), "Free online tools");
    }
}
