//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject bypass prefixes that would hide locale routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PortalConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderName;

use crate::config::schema::PortalConfig;
use crate::locale::Locale;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),
    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
    #[error("routing.locale_header '{0}' is not a valid header name")]
    LocaleHeader(String),
    #[error("routing.bypass_prefixes entry '{0}' must start with '/' and not end with it")]
    BypassPrefixShape(String),
    #[error("routing.bypass_prefixes entry '{0}' would hide locale routes")]
    BypassShadowsLocale(String),
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check `config` for semantic problems.
pub fn validate_config(config: &PortalConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if HeaderName::try_from(config.routing.locale_header.as_str()).is_err() {
        errors.push(ValidationError::LocaleHeader(config.routing.locale_header.clone()));
    }

    for prefix in &config.routing.bypass_prefixes {
        if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
            errors.push(ValidationError::BypassPrefixShape(prefix.clone()));
            continue;
        }
        let first = prefix[1..].split('/').next().unwrap_or_default();
        if Locale::from_code(first).is_some() {
            errors.push(ValidationError::BypassShadowsLocale(prefix.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&PortalConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = PortalConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.routing.locale_header = "bad header".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("nowhere".into()),
                ValidationError::LocaleHeader("bad header".into()),
                ValidationError::ZeroTimeout,
            ]
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = PortalConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MetricsAddress("bogus".into())]
        );
    }

    #[test]
    fn test_bypass_prefixes() {
        let mut config = PortalConfig::default();
        config.routing.bypass_prefixes = vec![
            "/en".into(),
            "/pl/static".into(),
            "api".into(),
            "/".into(),
            "/assets/".into(),
            "/english".into(),
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BypassShadowsLocale("/en".into()),
                ValidationError::BypassShadowsLocale("/pl/static".into()),
                ValidationError::BypassPrefixShape("api".into()),
                ValidationError::BypassPrefixShape("/".into()),
                ValidationError::BypassPrefixShape("/assets/".into()),
            ]
        );
    }
}
