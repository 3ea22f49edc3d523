//! Client configuration.

use toonmaker_core::DEFAULT_CONVERT_ENDPOINT;

/// Overrides the conversion endpoint (defaults to the reference deployment).
pub const ENDPOINT_ENV: &str = "TOONMAKER_CONVERT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONVERT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(endpoint) => {
                tracing::info!("using conversion endpoint from {ENDPOINT_ENV}: {endpoint}");
                Self {
                    endpoint: endpoint.trim().to_string(),
                }
            }
            None => Self::default(),
        }
    }
}
