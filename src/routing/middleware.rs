//! Locale routing middleware.
//!
//! # Responsibilities
//! - Classify every request path: redirect, rewrite or pass through
//! - Redirect legacy and default-locale-prefixed paths (301)
//! - Rewrite unprefixed paths to the default-locale route before routing
//! - Tag requests and responses with the resolved locale
//!
//! # Design Decisions
//! - Classification is a pure function of the path; the middleware only
//!   applies the decision
//! - Prefix matches are segment-aware (`/plany` has no locale prefix)
//! - Non-default locales are never rewritten: visible URL == served route
//! - Query strings survive both redirects and rewrites
//! - Redirect targets are always single-slash rooted local paths
//! - Trailing slashes redirect to the trimmed path

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, uri::PathAndQuery, HeaderName, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RoutingConfig;
use crate::locale::Locale;
use crate::observability::metrics;
use crate::routing::legacy::legacy_redirect;

/// Header used when the configured one is not a valid header name.
pub const DEFAULT_LOCALE_HEADER: &str = "x-locale";

/// What to do with a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Answer with `301 Moved Permanently` to `location`.
    Redirect { location: String },
    /// Serve the path as is.
    PassThrough { locale: Locale },
    /// Serve `path` instead, without telling the client.
    Rewrite { path: String, locale: Locale },
}

impl RouteDecision {
    /// Short label for logs and metrics.
    pub fn action(&self) -> &'static str {
        match self {
            RouteDecision::Redirect { .. } => "redirect",
            RouteDecision::PassThrough { .. } => "pass_through",
            RouteDecision::Rewrite { .. } => "rewrite",
        }
    }
}

/// Remainder of `path` after a `/{locale}` prefix, if it has one.
fn strip_locale_prefix(path: &str, locale: Locale) -> Option<&str> {
    let rest = path.strip_prefix('/')?.strip_prefix(locale.code())?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

/// Whether `path` starts with any locale prefix.
fn has_locale_prefix(path: &str) -> bool {
    Locale::ALL
        .into_iter()
        .any(|locale| strip_locale_prefix(path, locale).is_some())
}

/// `path` with empty segments collapsed, so `//host/a/` becomes `/host/a`.
fn local_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Decide how to route `path`.
pub fn classify(path: &str) -> RouteDecision {
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = local_path(path);
        let location = match classify(&trimmed) {
            RouteDecision::Redirect { location } => location,
            _ => trimmed,
        };
        return RouteDecision::Redirect { location };
    }

    if let Some(location) = legacy_redirect(path) {
        return RouteDecision::Redirect { location };
    }

    if let Some(rest) = strip_locale_prefix(path, Locale::DEFAULT) {
        return RouteDecision::Redirect {
            location: local_path(rest),
        };
    }

    for locale in Locale::ALL.into_iter().filter(|l| !l.is_default()) {
        if strip_locale_prefix(path, locale).is_some() {
            return RouteDecision::PassThrough { locale };
        }
    }

    let path = match path {
        "" | "/" => String::new(),
        other if other.starts_with('/') => other.to_string(),
        other => format!("/{other}"),
    };
    RouteDecision::Rewrite {
        path: format!("/{}{}", Locale::DEFAULT.code(), path),
        locale: Locale::DEFAULT,
    }
}

/// Middleware settings derived from `RoutingConfig`.
#[derive(Debug)]
pub struct RoutingSettings {
    locale_header: HeaderName,
    bypass_prefixes: Vec<String>,
    bypass_static_files: bool,
}

impl RoutingSettings {
    pub fn from_config(config: &RoutingConfig) -> Self {
        let locale_header = HeaderName::try_from(config.locale_header.as_str()).unwrap_or_else(|_| {
            tracing::warn!(
                header = %config.locale_header,
                fallback = DEFAULT_LOCALE_HEADER,
                "Invalid locale header name, using fallback"
            );
            HeaderName::from_static(DEFAULT_LOCALE_HEADER)
        });

        Self {
            locale_header,
            bypass_prefixes: config.bypass_prefixes.clone(),
            bypass_static_files: config.bypass_static_files,
        }
    }

    pub fn locale_header(&self) -> &HeaderName {
        &self.locale_header
    }

    /// Whether `path` skips locale routing entirely.
    pub fn bypasses(&self, path: &str) -> bool {
        let prefixed = self.bypass_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        });
        let static_file = self.bypass_static_files
            && !has_locale_prefix(path)
            && path
                .rsplit('/')
                .next()
                .is_some_and(|last| last.contains('.'));
        prefixed || static_file
    }
}

/// Shared state handed to `locale_routing`.
pub type LocaleRouting = Arc<RoutingSettings>;

fn with_query(path: String, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{path}?{q}"),
        None => path,
    }
}

fn rewrite_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(with_query(path.to_string(), uri.query()))?);
    Ok(Uri::from_parts(parts)?)
}

fn tag_locale(mut response: Response, header: &HeaderName, locale: Locale) -> Response {
    response
        .headers_mut()
        .insert(header.clone(), HeaderValue::from_static(locale.code()));
    response
}

/// Apply `classify` to every request that is not bypassed.
pub async fn locale_routing(
    State(routing): State<LocaleRouting>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if routing.bypasses(&path) {
        return next.run(request).await;
    }

    let decision = classify(&path);
    metrics::record_routing_decision(decision.action());

    match decision {
        RouteDecision::Redirect { location } => {
            let location = with_query(location, request.uri().query());
            tracing::debug!(from = %path, to = %location, "Permanent redirect");
            match HeaderValue::try_from(location) {
                Ok(value) => {
                    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response()
                }
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Unrepresentable redirect target");
                    next.run(request).await
                }
            }
        }
        RouteDecision::PassThrough { locale } => {
            tracing::debug!(path = %path, locale = %locale, "Pass through");
            request.extensions_mut().insert(locale);
            tag_locale(next.run(request).await, routing.locale_header(), locale)
        }
        RouteDecision::Rewrite { path: target, locale } => {
            match rewrite_uri(request.uri(), &target) {
                Ok(uri) => {
                    tracing::debug!(from = %path, to = %target, "Rewrite");
                    *request.uri_mut() = uri;
                }
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Rewrite failed, serving unmodified path");
                }
            }
            request.extensions_mut().insert(locale);
            tag_locale(next.run(request).await, routing.locale_header(), locale)
        }
    }
}
