//! Typed client for the claim store
//!
//! The claim store is the system of record. This service reads claims by
//! their external ID and submits finalized claimant responses; it never
//! mutates claim data directly.

use core_kernel::{ExternalId, UserId};
use domain_claim::Claim;
use domain_response::ClaimantResponse;

use crate::error::ClientError;

/// Client for the claim-store service
#[derive(Debug, Clone)]
pub struct ClaimStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClaimStoreClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetches a claim by its external ID.
    ///
    /// Calls `GET {base_url}/claims/{external_id}`.
    pub async fn fetch_by_external_id(
        &self,
        external_id: ExternalId,
        bearer_token: &str,
    ) -> Result<Claim, ClientError> {
        let endpoint = format!("GET /claims/{external_id}");
        let url = format!("{}/claims/{external_id}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                entity: "claim".to_string(),
                id: external_id.to_string(),
            });
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

        resp.json()
            .await
            .map_err(|source| ClientError::Deserialization { endpoint, source })
    }

    /// Submits a finalized claimant response.
    ///
    /// Calls `POST {base_url}/responses/{external_id}/claimant/{claimant_id}`.
    pub async fn save_claimant_response(
        &self,
        external_id: ExternalId,
        claimant_id: &UserId,
        response: &ClaimantResponse,
        bearer_token: &str,
    ) -> Result<(), ClientError> {
        let endpoint = format!("POST /responses/{external_id}/claimant/{claimant_id}");
        let url = format!(
            "{}/responses/{external_id}/claimant/{claimant_id}",
            self.base_url
        );

        tracing::info!(%external_id, "submitting claimant response");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(bearer_token)
            .json(response)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint,
                status,
                body,
            });
        }

        Ok(())
    }
}
