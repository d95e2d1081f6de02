//! Typed client for the identity service (idam)
//!
//! Bearer tokens are opaque to this service; idam resolves them to users.

use serde::{Deserialize, Serialize};

use core_kernel::UserId;

use crate::error::ClientError;

/// A signed-in user as resolved by idam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub forename: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Client for the idam service
#[derive(Debug, Clone)]
pub struct IdamClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdamClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Resolves the bearer token to its user.
    ///
    /// Calls `GET {base_url}/details`.
    pub async fn retrieve_user(&self, bearer_token: &str) -> Result<User, ClientError> {
        let endpoint = "GET /details".to_string();
        let url = format!("{}/details", self.base_url);

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
}
