//! API server configuration

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use songbridge_shared_config::{CatalogConfig, CommonConfig, TextGenConfig};

/// Log filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str = "songbridge_api=debug,tower_http=debug";

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the adapters
    pub common: CommonConfig,

    /// Bind address (default: 0.0.0.0)
    pub host: String,

    /// Server port (default: 5000)
    pub port: u16,

    /// CORS allowed origins (optional, any origin when unset)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load upstream config")?;

        Ok(Self {
            common,

            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    /// Tracing filter directives
    pub fn log_filter(&self) -> &str {
        self.common
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Catalog search configuration
    pub fn catalog(&self) -> &CatalogConfig {
        &self.common.catalog
    }

    /// Text-generation configuration
    pub fn textgen(&self) -> &TextGenConfig {
        &self.common.textgen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "HOST",
        "PORT",
        "CORS_ORIGINS",
        "CATALOG_URL",
        "TEXTGEN_URL",
        "RUST_LOG",
        "LOG_LEVEL",
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 5000);
            assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:5000");
            assert!(config.cors_allowed_origins.is_none());
            assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
            assert_eq!(config.catalog().url, "https://music.youtube.com");
            assert_eq!(config.textgen().url, "http://localhost:5001");
        });
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        temp_env::with_var(
            "CORS_ORIGINS",
            Some("http://a.local, http://b.local,,"),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    Some(vec![
                        "http://a.local".to_string(),
                        "http://b.local".to_string()
                    ])
                );
            },
        );
    }

    #[test]
    fn test_log_filter_from_env() {
        temp_env::with_vars(
            [("RUST_LOG", Some("songbridge_api=trace")), ("LOG_LEVEL", None)],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.log_filter(), "songbridge_api=trace");
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("Invalid PORT"));
        });
    }

    #[test]
    fn test_invalid_upstream_url() {
        temp_env::with_var("TEXTGEN_URL", Some("no-scheme"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
