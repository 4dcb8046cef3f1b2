//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID / trace / timeout layers)
//!     → routing middleware (redirect, rewrite, pass through)
//!     → pages.rs (resolve catalog records, build page models)
//!     → JSON response tagged with locale and request ID
//! ```

pub mod pages;
pub mod request;
pub mod server;

pub use pages::PageError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{build_app, HttpServer};
