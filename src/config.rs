// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment exactly once during startup
//! ([`Config::from_env`]) and injected into the application state. No module
//! opens storage or reads the environment as an import side effect.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATA_DIR` | Root directory for session storage | `./data` |
//! | `SESSION_TTL_SECS` | Session lifetime in seconds | `600` |
//! | `SWEEP_INTERVAL_SECS` | Expired-session sweep period | `60` |
//! | `COOKIE_SECURE` | Mark the session cookie `Secure` | `true` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;
use std::path::PathBuf;

/// Name of the HTTP-only session cookie issued at login.
pub const SESSION_COOKIE_NAME: &str = "deresearcher_session";

/// Default session lifetime: 10 minutes.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 600;

/// Runtime configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Root directory for session storage.
    pub data_dir: PathBuf,
    /// Session lifetime in seconds; also the cookie `Max-Age`.
    pub session_ttl_secs: i64,
    /// Interval between expired-session sweeps.
    pub sweep_interval_secs: u64,
    /// Whether the session cookie carries the `Secure` attribute.
    /// Disabled for plain-HTTP local development only.
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_SECS),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            sweep_interval_secs: 60,
            cookie_secure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_ten_minutes() {
        let config = Config::default();
        assert_eq!(config.session_ttl_secs, 600);
        assert!(config.cookie_secure);
    }
}
