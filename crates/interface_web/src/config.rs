//! Web configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use infra_clients::ServicesConfig;

/// Web configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Claim store base URL
    pub claim_store_url: String,
    /// Draft store base URL
    pub draft_store_url: String,
    /// Identity service base URL
    pub idam_url: String,
    /// Feature toggle service base URL
    pub feature_toggles_url: String,
    /// Outbound HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// Claim amount limit for pilot features
    pub pilot_limit: Decimal,
    /// Log level
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            claim_store_url: "http://localhost:4400".to_string(),
            draft_store_url: "http://localhost:4601".to_string(),
            idam_url: "http://localhost:4501".to_string(),
            feature_toggles_url: "http://localhost:4700".to_string(),
            http_timeout_secs: 30,
            pilot_limit: Decimal::new(300, 0),
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CMC"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the collaborator client configuration
    pub fn services(&self) -> ServicesConfig {
        ServicesConfig {
            claim_store_url: self.claim_store_url.clone(),
            draft_store_url: self.draft_store_url.clone(),
            idam_url: self.idam_url.clone(),
            feature_toggles_url: self.feature_toggles_url.clone(),
            timeout_secs: self.http_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = WebConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.pilot_limit, dec!(300));
    }

    #[test]
    fn test_services_config_carries_urls() {
        let config = WebConfig::default();
        let services = config.services();
        assert_eq!(services.idam_url, config.idam_url);
        assert_eq!(services.timeout_secs, 30);
    }
}
