//! Party-role resolution
//!
//! A wizard page sometimes needs to know which side of the claim the signed-in
//! user is on, and which side's preference controls a shared procedural choice
//! such as hearing location.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::UserId;

use crate::claim::Claim;
use crate::error::ClaimError;

/// The two sides of a money claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Claimant,
    Defendant,
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyRole::Claimant => write!(f, "claimant"),
            PartyRole::Defendant => write!(f, "defendant"),
        }
    }
}

/// Resolves the signed-in user's role in the claim.
///
/// The claimant only acts once the defendant has responded; the defendant
/// only acts while no response exists. Any other combination means the user
/// has nothing to do here and is an error.
pub fn users_role(claim: &Claim, user_id: &UserId) -> Result<PartyRole, ClaimError> {
    if claim.claimant_id == *user_id && claim.has_response() {
        Ok(PartyRole::Claimant)
    } else if claim.defendant_id.as_ref() == Some(user_id) && !claim.has_response() {
        Ok(PartyRole::Defendant)
    } else {
        Err(ClaimError::NoRole)
    }
}

/// Returns the party whose preference controls a shared procedural choice.
///
/// When the defendant is a business the claimant's preference wins.
pub fn preferred_party(claim: &Claim) -> PartyRole {
    if claim.claim_data.defendant.is_business() {
        PartyRole::Claimant
    } else {
        PartyRole::Defendant
    }
}
