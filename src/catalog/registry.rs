//! Static tool and category registry.
//!
//! # Responsibilities
//! - Declare every category and tool with its per-locale slugs
//! - Build read-only lookup indexes once, on first access
//! - Check the data for slug collisions before the server starts
//!
//! # Design Decisions
//! - Tables are `const` data; indexes live in a `OnceLock` and are never
//!   mutated after construction (thread-safe without locks)
//! - Category slugs are unique across all locales so the locale-free
//!   reverse lookup stays unambiguous
//! - `ready` only gates listing; unready tools still resolve by URL

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Serialize;

use crate::locale::{Locale, Localized};

/// A fixed grouping of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Generators,
    Calculators,
    Text,
    Time,
    Random,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Generators,
        Category::Calculators,
        Category::Text,
        Category::Time,
        Category::Random,
    ];

    /// Stable, locale-independent identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Category::Generators => "generators",
            Category::Calculators => "calculators",
            Category::Text => "text",
            Category::Time => "time",
            Category::Random => "random",
        }
    }

    /// URL slug of this category in `locale`.
    pub fn slug(self, locale: Locale) -> &'static str {
        *Catalog::get().category_record(self).slugs.get(locale)
    }
}

/// Stable identifier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    PasswordGenerator,
    LoremIpsum,
    QrCode,
    BmiCalculator,
    ProportionCalculator,
    SleepCalculator,
    PercentageCalculator,
    CharacterCounter,
    WordCounter,
    CaseConverter,
    CountdownTimer,
    Stopwatch,
    RandomNumber,
    CoinFlip,
    YesOrNo,
}

impl ToolId {
    pub const fn id(self) -> &'static str {
        match self {
            ToolId::PasswordGenerator => "password-generator",
            ToolId::LoremIpsum => "lorem-ipsum",
            ToolId::QrCode => "qr-code",
            ToolId::BmiCalculator => "bmi-calculator",
            ToolId::ProportionCalculator => "proportion-calculator",
            ToolId::SleepCalculator => "sleep-calculator",
            ToolId::PercentageCalculator => "percentage-calculator",
            ToolId::CharacterCounter => "character-counter",
            ToolId::WordCounter => "word-counter",
            ToolId::CaseConverter => "case-converter",
            ToolId::CountdownTimer => "countdown-timer",
            ToolId::Stopwatch => "stopwatch",
            ToolId::RandomNumber => "random-number",
            ToolId::CoinFlip => "coin-flip",
            ToolId::YesOrNo => "yes-or-no",
        }
    }
}

/// Category with its per-locale slugs.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRecord {
    pub category: Category,
    pub slugs: Localized<&'static str>,
}

/// A tool as it appears in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRecord {
    pub id: ToolId,
    pub category: Category,
    pub slugs: Localized<&'static str>,
    /// Whether the tool is linked from listings.
    pub ready: bool,
}

impl ToolRecord {
    pub fn slug(&self, locale: Locale) -> &'static str {
        *self.slugs.get(locale)
    }
}

const fn category(category: Category, pl: &'static str, en: &'static str) -> CategoryRecord {
    CategoryRecord {
        category,
        slugs: Localized::new(pl, en),
    }
}

const fn tool(
    id: ToolId,
    category: Category,
    pl: &'static str,
    en: &'static str,
    ready: bool,
) -> ToolRecord {
    ToolRecord {
        id,
        category,
        slugs: Localized::new(pl, en),
        ready,
    }
}

pub const CATEGORIES: &[CategoryRecord] = &[
    category(Category::Generators, "generatory", "generators"),
    category(Category::Calculators, "kalkulatory", "calculators"),
    category(Category::Text, "tekst", "text"),
    category(Category::Time, "czas", "time"),
    category(Category::Random, "losowe", "random"),
];

pub const TOOLS: &[ToolRecord] = &[
    // Generators
    tool(ToolId::PasswordGenerator, Category::Generators, "generator-hasel", "password-generator", true),
    tool(ToolId::LoremIpsum, Category::Generators, "generator-lorem-ipsum", "lorem-ipsum-generator", true),
    tool(ToolId::QrCode, Category::Generators, "generator-kodow-qr", "qr-code-generator", true),
    // Calculators
    tool(ToolId::BmiCalculator, Category::Calculators, "kalkulator-bmi", "bmi-calculator", true),
    tool(ToolId::ProportionCalculator, Category::Calculators, "kalkulator-proporcji", "proportion-calculator", true),
    tool(ToolId::SleepCalculator, Category::Calculators, "kalkulator-snu", "sleep-calculator", true),
    tool(ToolId::PercentageCalculator, Category::Calculators, "kalkulator-procentow", "percentage-calculator", false),
    // Text
    tool(ToolId::CharacterCounter, Category::Text, "licznik-znakow", "character-counter", true),
    tool(ToolId::WordCounter, Category::Text, "licznik-slow", "word-counter", true),
    tool(ToolId::CaseConverter, Category::Text, "zmiana-wielkosci-liter", "case-converter", false),
    // Time
    tool(ToolId::CountdownTimer, Category::Time, "odliczanie", "countdown-timer", true),
    tool(ToolId::Stopwatch, Category::Time, "stoper", "stopwatch", true),
    // Random
    tool(ToolId::RandomNumber, Category::Random, "losowanie-liczb", "random-number-generator", true),
    tool(ToolId::CoinFlip, Category::Random, "rzut-moneta", "coin-flip", true),
    tool(ToolId::YesOrNo, Category::Random, "tak-czy-nie", "yes-or-no", false),
];

/// Data-integrity problem in the static tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("tool slug '{slug}' is used twice in category '{category}' ({locale})")]
    DuplicateToolSlug {
        locale: Locale,
        category: &'static str,
        slug: &'static str,
    },
    #[error("category slug '{slug}' is shared by '{first}' and '{second}'")]
    DuplicateCategorySlug {
        slug: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("tool '{tool}' slug '{slug}' collides with a category slug ({locale})")]
    ToolShadowsCategory {
        locale: Locale,
        tool: &'static str,
        slug: &'static str,
    },
    #[error("invalid slug '{slug}' for '{owner}' ({locale})")]
    InvalidSlug {
        locale: Locale,
        owner: &'static str,
        slug: &'static str,
    },
    #[error("tool '{0}' is registered more than once")]
    DuplicateTool(&'static str),
    #[error("category '{0}' is missing or registered more than once")]
    CategoryCount(&'static str),
}

/// Read-only view over the registry tables plus lookup indexes.
pub struct Catalog {
    categories: &'static [CategoryRecord],
    tools: &'static [ToolRecord],
    /// Category slug (any locale) → category.
    category_by_slug: HashMap<&'static str, Category>,
    /// (locale, slug) → category.
    category_by_locale_slug: HashMap<(Locale, &'static str), Category>,
    /// (locale, category, slug) → tool.
    tool_by_slug: HashMap<(Locale, Category, &'static str), &'static ToolRecord>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the process-wide catalog, building its indexes on first call.
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog::from_tables(CATEGORIES, TOOLS))
    }

    /// Build a catalog over arbitrary tables. Later duplicates do not
    /// replace earlier entries in the indexes; `validate` reports them.
    pub fn from_tables(
        categories: &'static [CategoryRecord],
        tools: &'static [ToolRecord],
    ) -> Self {
        let mut category_by_slug = HashMap::new();
        let mut category_by_locale_slug = HashMap::new();
        for record in categories {
            for (locale, slug) in record.slugs.iter() {
                category_by_slug.entry(*slug).or_insert(record.category);
                category_by_locale_slug
                    .entry((locale, *slug))
                    .or_insert(record.category);
            }
        }

        let mut tool_by_slug = HashMap::new();
        for record in tools {
            for (locale, slug) in record.slugs.iter() {
                tool_by_slug
                    .entry((locale, record.category, *slug))
                    .or_insert(record);
            }
        }

        Self {
            categories,
            tools,
            category_by_slug,
            category_by_locale_slug,
            tool_by_slug,
        }
    }

    pub fn categories(&self) -> &'static [CategoryRecord] {
        self.categories
    }

    pub fn tools(&self) -> &'static [ToolRecord] {
        self.tools
    }

    /// Record for `category`. Every `Category` variant has exactly one
    /// record; `validate` enforces it and startup refuses to run otherwise.
    pub fn category_record(&self, category: Category) -> &'static CategoryRecord {
        self.categories
            .iter()
            .find(|record| record.category == category)
            .unwrap_or(&MISSING_CATEGORY)
    }

    pub fn tool(&self, id: ToolId) -> Option<&'static ToolRecord> {
        self.tools.iter().find(|record| record.id == id)
    }

    /// All tools of a category in registry order.
    pub fn tools_in(&self, category: Category) -> impl Iterator<Item = &'static ToolRecord> {
        let tools: &'static [ToolRecord] = self.tools;
        tools.iter().filter(move |t| t.category == category)
    }

    /// Tools of a category that are publicly linked.
    pub fn ready_tools_in(&self, category: Category) -> impl Iterator<Item = &'static ToolRecord> {
        self.tools_in(category).filter(|t| t.ready)
    }

    pub(crate) fn find_category(&self, slug: &str) -> Option<Category> {
        self.category_by_slug.get(slug).copied()
    }

    pub(crate) fn find_category_in(&self, slug: &str, locale: Locale) -> Option<Category> {
        self.category_by_locale_slug.get(&(locale, slug)).copied()
    }

    pub(crate) fn find_tool(
        &self,
        category: Category,
        slug: &str,
        locale: Locale,
    ) -> Option<&'static ToolRecord> {
        self.tool_by_slug.get(&(locale, category, slug)).copied()
    }

    /// Check the tables for integrity problems, returning all of them.
    pub fn validate(&self) -> Result<(), Vec<RegistryError>> {
        let mut errors = Vec::new();

        for category in Category::ALL {
            let count = self
                .categories
                .iter()
                .filter(|r| r.category == category)
                .count();
            if count != 1 {
                errors.push(RegistryError::CategoryCount(category.id()));
            }
        }

        let mut category_slugs: HashMap<&'static str, Category> = HashMap::new();
        for record in self.categories {
            for (locale, &slug) in record.slugs.iter() {
                if !is_valid_slug(slug) {
                    errors.push(RegistryError::InvalidSlug {
                        locale,
                        owner: record.category.id(),
                        slug,
                    });
                }
                match category_slugs.get(slug) {
                    Some(first) if *first != record.category => {
                        errors.push(RegistryError::DuplicateCategorySlug {
                            slug,
                            first: first.id(),
                            second: record.category.id(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        category_slugs.insert(slug, record.category);
                    }
                }
            }
        }

        let mut seen_tools = HashSet::new();
        let mut tool_slugs = HashSet::new();
        for record in self.tools {
            if !seen_tools.insert(record.id) {
                errors.push(RegistryError::DuplicateTool(record.id.id()));
            }
            for (locale, &slug) in record.slugs.iter() {
                if !is_valid_slug(slug) {
                    errors.push(RegistryError::InvalidSlug {
                        locale,
                        owner: record.id.id(),
                        slug,
                    });
                }
                if !tool_slugs.insert((locale, record.category, slug)) {
                    errors.push(RegistryError::DuplicateToolSlug {
                        locale,
                        category: record.category.id(),
                        slug,
                    });
                }
                if self.find_category_in(slug, locale).is_some() {
                    errors.push(RegistryError::ToolShadowsCategory {
                        locale,
                        tool: record.id.id(),
                        slug,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Only reachable through a malformed table, which `validate` rejects.
static MISSING_CATEGORY: CategoryRecord = category(Category::Generators, "", "");

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
