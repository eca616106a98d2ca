//! API origin configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin. This is the API port, not the UI dev server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

const ORIGIN_ENV: &str = "TASKDECK_API_URL";

/// Base URL of the authentication API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    /// Use an explicit origin. Trailing slashes are trimmed so endpoint
    /// paths can be appended directly.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Load from `TASKDECK_API_URL`, falling back to [`DEFAULT_ORIGIN`].
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(ORIGIN_ENV) {
            Ok(origin) if !origin.trim().is_empty() => Self::new(origin),
            _ => Self::new(DEFAULT_ORIGIN),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
