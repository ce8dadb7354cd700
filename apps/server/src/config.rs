// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use std::str::FromStr;

use dcim_lite_engine::DEFAULT_HIGHLIGHT_DURATION;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Maximum request body size in KB.
    pub max_body_kb: usize,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Allowed CORS origins (comma-separated, or "*" for all in development).
    pub cors_origins: Vec<String>,
    /// Highlight clear delay advertised to the console.
    pub highlight_clear_ms: u64,
    /// Tallest cabinet, in slots, the compute endpoints accept.
    pub max_u_height: i32,
}

/// Reads `key`, falling back to `default` when unset or unparsable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 8080),
            max_body_kb: env_or("MAX_BODY_KB", 1024),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| {
                    // Default: allow common development origins
                    "http://localhost:3000,http://localhost:5173,http://127.0.0.1:3000,http://127.0.0.1:5173".into()
                }),
            ),
            highlight_clear_ms: env_or(
                "HIGHLIGHT_CLEAR_MS",
                DEFAULT_HIGHLIGHT_DURATION.as_millis() as u64,
            ),
            max_u_height: env_or("MAX_U_HEIGHT", 100),
        }
    }

    /// Whether any origin may call the API.
    pub fn cors_permissive(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
