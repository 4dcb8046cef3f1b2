//! Localized tool portal library.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use catalog::Catalog;
pub use config::schema::PortalConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use locale::Locale;
