#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_base_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV_VAR: &str = "API_BASE_URL";

/// Per-client configuration. Held explicitly by each `InventoryClient`
/// instance instead of process-global state, so multiple clients with
/// different backends or tokens can coexist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Resolve the base URL from the `API_BASE_URL` environment variable,
    /// falling back to the default local backend. Read once at startup.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("base_url", &self.base_url)
    }
}
