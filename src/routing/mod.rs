//! Locale routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → middleware.rs (bypass check, classify)
//!         → legacy.rs (flat tool URLs → 301)
//!         → /pl/...   → 301 to unprefixed path
//!         → /en/...   → pass through, tag locale
//!         → other     → rewrite to /pl/..., tag locale
//!     → http page router (matches the possibly rewritten path)
//!
//! Language switcher:
//!     (path, from, to) → translator.rs → path in target locale
//! ```
//!
//! # Design Decisions
//! - Stateless per request; all lookups hit the immutable catalog
//! - Default locale is served at the root, other locales under a prefix
//! - Path translation never fails; unknown segments pass through

pub mod legacy;
pub mod middleware;
pub mod translator;

pub use middleware::{classify, locale_routing, LocaleRouting, RouteDecision, RoutingSettings};
pub use translator::{normalize_path, translate_path};
