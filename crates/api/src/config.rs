//! Environment configuration for the API binary.

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Knobs sourced from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listening port (`PORT`).
    pub port: u16,
    /// Optional author label (`AUTHOR`), echoed in the startup log.
    pub author: Option<String>,
}

impl ApiConfig {
    /// Read configuration from the environment. Never fails: a bad `PORT`
    /// logs a warning and falls back to the default.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            author: std::env::var("AUTHOR").ok(),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("PORT={raw} is not a valid port; falling back to {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
    }
}
