//! Typed client for the draft store
//!
//! The draft store keeps per-user JSON documents in a versioned envelope,
//! filtered by a document type. Wizard pages find the current draft, mutate
//! its document, and save it back; submission deletes it.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use core_kernel::DraftId;

use crate::error::ClientError;

/// Document type under which claimant-response drafts are stored
pub const CLAIMANT_RESPONSE_TYPE: &str = "claimantResponse";

/// Document type under which directions-questionnaire drafts are stored
pub const DIRECTIONS_QUESTIONNAIRE_TYPE: &str = "directionsQuestionnaire";

/// A stored draft document in the draft-store envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft<T> {
    pub id: DraftId,
    #[serde(rename = "type")]
    pub document_type: String,
    pub document: T,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// A draft that has not been assigned an ID by the store yet
#[derive(Debug, Clone, Serialize)]
pub struct NewDraft<T> {
    #[serde(rename = "type")]
    pub document_type: String,
    pub document: T,
}

impl<T> NewDraft<T> {
    pub fn new(document_type: impl Into<String>, document: T) -> Self {
        Self {
            document_type: document_type.into(),
            document,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DraftListResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<Draft<T>>,
}

/// Client for the draft-store service
#[derive(Debug, Clone)]
pub struct DraftStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl DraftStoreClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Finds the caller's draft of the given type, if one exists.
    ///
    /// Calls `GET {base_url}/drafts?type={document_type}`. The store scopes
    /// results to the bearer, so at most one draft per type is expected.
    pub async fn find<T: DeserializeOwned>(
        &self,
        document_type: &str,
        bearer_token: &str,
    ) -> Result<Option<Draft<T>>, ClientError> {
        let endpoint = format!("GET /drafts?type={document_type}");
        let url = format!("{}/drafts", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("type", document_type)])
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

        let list: DraftListResponse<T> = resp
            .json()
            .await
            .map_err(|source| ClientError::Deserialization { endpoint, source })?;

        Ok(list.data.into_iter().next())
    }

    /// Creates a draft and returns the stored envelope.
    ///
    /// Calls `POST {base_url}/drafts`.
    pub async fn create<T: Serialize + DeserializeOwned>(
        &self,
        draft: &NewDraft<T>,
        bearer_token: &str,
    ) -> Result<Draft<T>, ClientError> {
        let endpoint = "POST /drafts".to_string();
        let url = format!("{}/drafts", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(bearer_token)
            .json(draft)
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

    /// Updates a stored draft's document.
    ///
    /// Calls `PUT {base_url}/drafts/{id}`.
    pub async fn update<T: Serialize>(
        &self,
        draft: &Draft<T>,
        bearer_token: &str,
    ) -> Result<(), ClientError> {
        let endpoint = format!("PUT /drafts/{}", draft.id);
        let url = format!("{}/drafts/{}", self.base_url, draft.id);

        let body = NewDraft {
            document_type: draft.document_type.clone(),
            document: &draft.document,
        };
        let resp = self
            .http
            .put(&url)
            .bearer_auth(bearer_token)
            .json(&body)
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

    /// Deletes a stored draft after submission.
    ///
    /// Calls `DELETE {base_url}/drafts/{id}`.
    pub async fn delete(&self, id: DraftId, bearer_token: &str) -> Result<(), ClientError> {
        let endpoint = format!("DELETE /drafts/{id}");
        let url = format!("{}/drafts/{id}", self.base_url);

        let resp = self
            .http
            .delete(&url)
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

        Ok(())
    }
}
