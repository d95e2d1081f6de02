//! Client error type
//!
//! One error type across all four collaborators, carrying the endpoint that
//! failed. Converted into `core_kernel::PortError` at the port boundary so
//! domain code never sees reqwest.

use core_kernel::PortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP request failed for {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{endpoint} returned status {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The requested entity does not exist
    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// The response body did not match the expected shape
    #[error("Failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<ClientError> for PortError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { entity, id } => PortError::not_found(entity, id),
            ClientError::Api { status: 401, .. } | ClientError::Api { status: 403, .. } => {
                PortError::Unauthorized {
                    message: err.to_string(),
                }
            }
            ClientError::Http { .. } => PortError::Connection {
                message: err.to_string(),
                source: Some(Box::new(err)),
            },
            other => PortError::unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_port_not_found() {
        let err = ClientError::NotFound {
            entity: "claim".to_string(),
            id: "abc".to_string(),
        };
        assert!(matches!(PortError::from(err), PortError::NotFound { .. }));
    }

    #[test]
    fn test_forbidden_maps_to_unauthorized() {
        let err = ClientError::Api {
            endpoint: "GET /claims".to_string(),
            status: 403,
            body: String::new(),
        };
        assert!(matches!(
            PortError::from(err),
            PortError::Unauthorized { .. }
        ));
    }
}
