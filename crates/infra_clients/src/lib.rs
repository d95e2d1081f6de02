//! HTTP clients for the external collaborators
//!
//! All state this service touches lives in external HTTP services:
//!
//! - **claim store**: the system of record for claims and responses
//! - **draft store**: versioned JSON draft documents keyed per user
//! - **idam**: the identity service resolving bearer tokens to users
//! - **feature toggles**: ff4j-style boolean flags by name
//!
//! One shared `reqwest::Client` is built once with a request timeout and
//! cloned into each typed sub-client. No client retries: a failed call
//! propagates and the caller renders the generic error page.

pub mod claim_store;
pub mod config;
pub mod draft_store;
pub mod error;
pub mod feature_toggles;
pub mod idam;

pub use claim_store::ClaimStoreClient;
pub use config::ServicesConfig;
pub use draft_store::{
    Draft, DraftStoreClient, NewDraft, CLAIMANT_RESPONSE_TYPE, DIRECTIONS_QUESTIONNAIRE_TYPE,
};
pub use error::ClientError;
pub use feature_toggles::FeatureTogglesClient;
pub use idam::{IdamClient, User};

use std::time::Duration;

/// The four collaborator clients, built from one configuration
#[derive(Debug, Clone)]
pub struct Clients {
    pub claim_store: ClaimStoreClient,
    pub draft_store: DraftStoreClient,
    pub idam: IdamClient,
    pub feature_toggles: FeatureTogglesClient,
}

impl Clients {
    pub fn new(config: &ServicesConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| ClientError::Http {
                endpoint: "client_init".to_string(),
                source,
            })?;

        Ok(Self {
            claim_store: ClaimStoreClient::new(http.clone(), config.claim_store_url.clone()),
            draft_store: DraftStoreClient::new(http.clone(), config.draft_store_url.clone()),
            idam: IdamClient::new(http.clone(), config.idam_url.clone()),
            feature_toggles: FeatureTogglesClient::new(http, config.feature_toggles_url.clone()),
        })
    }
}
