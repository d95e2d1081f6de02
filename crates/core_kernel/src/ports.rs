//! Port infrastructure for external collaborators
//!
//! Every piece of state this service touches lives behind an external HTTP
//! service (claim store, draft store, identity, feature toggles). Domain
//! crates define async port traits over the operations they need; the
//! `infra_clients` crate provides the reqwest-backed adapters. `PortError`
//! is the unified error type those traits return so domain code never sees
//! transport details.

use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The collaborator rejected the caller's credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The collaborator could not be reached or returned a transport error
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The collaborator answered with something this service cannot use
    #[error("Unexpected response: {message}")]
    Unexpected { message: String },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        PortError::Unexpected {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PortError::not_found("claim", "abc-123");
        assert_eq!(err.to_string(), "Not found: claim with id abc-123");
    }

    #[test]
    fn test_connection_without_source() {
        let err = PortError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}
