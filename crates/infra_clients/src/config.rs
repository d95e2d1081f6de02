//! Collaborator service endpoints

use serde::Deserialize;

/// Base URLs and timeout for the external services
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    pub claim_store_url: String,
    pub draft_store_url: String,
    pub idam_url: String,
    pub feature_toggles_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            claim_store_url: "http://localhost:4400".to_string(),
            draft_store_url: "http://localhost:4601".to_string(),
            idam_url: "http://localhost:4501".to_string(),
            feature_toggles_url: "http://localhost:4610".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
