//! Tool catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Catalog Construction (first access):
//!     CATEGORIES + TOOLS (const tables)
//!     → Build slug indexes
//!     → Freeze as immutable Catalog (OnceLock)
//!
//! Lookup (per request):
//!     (locale, category slug, tool slug)
//!     → resolver.rs (index lookups)
//!     → Return: ToolRecord or None
//! ```
//!
//! # Design Decisions
//! - Registry is static data; nothing is created or destroyed at runtime
//! - Tool kinds are a closed enum so page rendering matches exhaustively
//! - Integrity problems are reported before the server accepts traffic

pub mod registry;
pub mod resolver;

pub use registry::{Catalog, Category, CategoryRecord, RegistryError, ToolId, ToolRecord};
pub use resolver::{
    category_for_slug, category_for_slug_in, tool_for_category_and_slug, url_for_category,
    url_for_tool,
};
