//! Configuration loading from the environment.

use url::Url;

use crate::config::schema::ProxyConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid {var} value {value:?}: {source}")]
    InvalidBaseUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Read and validate configuration from process environment variables.
///
/// Called once at startup; a bad base URL is a startup error, not a
/// per-request one.
pub fn from_env() -> Result<ProxyConfig, ConfigError> {
    load(|var| std::env::var(var).ok())
}

fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<ProxyConfig, ConfigError> {
    let mut config = ProxyConfig::default();

    if let Some(raw) = lookup("PORT") {
        config.listener.port = raw
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: raw, source })?;
    }
    if let Some(base) = lookup("PRODUCT_API_BASE") {
        config.upstreams.product_base = base;
    }
    if let Some(base) = lookup("ORDER_API_BASE") {
        config.upstreams.order_base = base;
    }
    if let Some(dir) = lookup("STATIC_DIR") {
        config.statics.dir = dir;
    }

    validate_base("PRODUCT_API_BASE", &config.upstreams.product_base)?;
    validate_base("ORDER_API_BASE", &config.upstreams.order_base)?;

    Ok(config)
}

fn validate_base(var: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        var,
        value: value.to_string(),
        source,
    })?;
    Ok(())
}
