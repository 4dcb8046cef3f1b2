//! Redirects for tools that used to live at flat URLs.
//!
//! Before tools were grouped into categories they were served at
//! `/:locale/:slug`. Those links now redirect permanently to
//! `/:locale/:category/:slug`. The default locale also matches the bare
//! `/:slug` form, and its targets carry no prefix so a legacy link takes a
//! single hop.

use crate::catalog::{url_for_tool, Catalog, ToolId};
use crate::locale::Locale;

/// Tools that had a flat URL before categories existed.
pub const FLAT_TOOLS: &[ToolId] = &[
    ToolId::PasswordGenerator,
    ToolId::LoremIpsum,
    ToolId::QrCode,
    ToolId::BmiCalculator,
    ToolId::CharacterCounter,
    ToolId::CountdownTimer,
];

/// Category-qualified location for a legacy flat path, if it is one.
pub fn legacy_redirect(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (locale, slug) = match segments.as_slice() {
        [code, slug] => (Locale::from_code(code)?, *slug),
        [slug] => (Locale::DEFAULT, *slug),
        _ => return None,
    };

    let catalog = Catalog::get();
    FLAT_TOOLS
        .iter()
        .filter_map(|id| catalog.tool(*id))
        .find(|tool| tool.slug(locale) == slug)
        .map(|tool| url_for_tool(tool, locale))
}
