//! Slug resolution between URL segments and catalog records.
//!
//! # Responsibilities
//! - Reverse-map category slugs to categories (global and per locale)
//! - Resolve a tool slug inside a category for a locale
//! - Build canonical category and tool URLs
//!
//! # Design Decisions
//! - Misses are `None`; mapping them to 404 is the page layer's job
//! - Tool resolution scopes the category lookup to the requested locale,
//!   so `/en/kalkulatory/...` does not resolve
//! - URL builders are total for any registered record

use crate::catalog::registry::{Catalog, Category, ToolRecord};
use crate::locale::Locale;

/// Category whose slug in any locale equals `slug`.
pub fn category_for_slug(slug: &str) -> Option<Category> {
    Catalog::get().find_category(slug)
}

/// Category whose slug in `locale` equals `slug`.
pub fn category_for_slug_in(slug: &str, locale: Locale) -> Option<Category> {
    Catalog::get().find_category_in(slug, locale)
}

/// Resolve a `(category slug, tool slug)` pair in `locale`.
pub fn tool_for_category_and_slug(
    category_slug: &str,
    tool_slug: &str,
    locale: Locale,
) -> Option<&'static ToolRecord> {
    let category = category_for_slug_in(category_slug, locale)?;
    Catalog::get().find_tool(category, tool_slug, locale)
}

/// Canonical URL of a tool: `{prefix}/{category}/{tool}`.
pub fn url_for_tool(tool: &ToolRecord, locale: Locale) -> String {
    format!(
        "{}/{}/{}",
        locale.prefix(),
        tool.category.slug(locale),
        tool.slug(locale)
    )
}

/// Canonical URL of a category listing: `{prefix}/{category}`.
pub fn url_for_category(category: Category, locale: Locale) -> String {
    format!("{}/{}", locale.prefix(), category.slug(locale))
}
