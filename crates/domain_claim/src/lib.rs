//! Claim Domain
//!
//! The read model for a money claim as served by the claim store, plus the
//! small pure helpers computed from it:
//!
//! - party-role resolution (who is the current user in this claim)
//! - preferred-party resolution for shared procedural choices
//! - feature eligibility composed from toggle flags and amount thresholds

pub mod claim;
pub mod error;
pub mod features;
pub mod roles;

pub use claim::{AmountRow, Claim, ClaimData, DefendantResponse, Interest, Party, PartyType};
pub use error::ClaimError;
pub use features::{Feature, FeatureTogglesPort, FeaturesBuilder};
pub use roles::{preferred_party, users_role, PartyRole};
