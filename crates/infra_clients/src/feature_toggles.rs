//! Typed client for the feature-toggle service
//!
//! An ff4j-style flag service: `GET /api/ff4j/check/{name}` answers 200 with
//! a JSON body when the flag is on and a null (or 404) when it is off. This
//! client is also the adapter behind `domain_claim::FeatureTogglesPort`.

use async_trait::async_trait;

use core_kernel::PortError;
use domain_claim::FeatureTogglesPort;

use crate::error::ClientError;

/// Client for the feature-toggle service
#[derive(Debug, Clone)]
pub struct FeatureTogglesClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeatureTogglesClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Checks whether the named flag is enabled.
    ///
    /// Calls `GET {base_url}/api/ff4j/check/{name}`.
    pub async fn check(&self, name: &str) -> Result<bool, ClientError> {
        let endpoint = format!("GET /api/ff4j/check/{name}");
        let url = format!("{}/api/ff4j/check/{name}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint,
                status,
                body,
            });
        }

        // An enabled flag answers with a JSON body; a disabled one with null
        // or an empty body.
        let body = resp
            .text()
            .await
            .map_err(|source| ClientError::Http { endpoint, source })?;
        let enabled = !body.trim().is_empty() && body.trim() != "null";
        tracing::debug!(flag = name, enabled, "feature toggle checked");
        Ok(enabled)
    }
}

#[async_trait]
impl FeatureTogglesPort for FeatureTogglesClient {
    async fn is_enabled(&self, name: &str) -> Result<bool, PortError> {
        Ok(self.check(name).await?)
    }
}
