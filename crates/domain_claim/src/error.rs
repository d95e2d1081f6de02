//! Claim domain errors

use thiserror::Error;

/// Errors that can occur in the claim domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("User has no role in claim")]
    NoRole,
}
