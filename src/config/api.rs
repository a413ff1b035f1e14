//! Journal API configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::journal::{HttpJournalApiConfig, DEFAULT_BASE_URL};

/// Journal API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Origin of the journal service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    /// Validate journal API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        let host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or(ValidationError::InvalidBaseUrl)?;
        if host.trim_end_matches('/').is_empty() {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }

    /// Client settings for the HTTP adapter
    pub fn http_client_config(&self) -> HttpJournalApiConfig {
        HttpJournalApiConfig::new(self.base_url.trim())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
