//! Court determination of payment terms
//!
//! When the claimant rejects the defendant's payment terms the court
//! calculator produces an alternative: either its own calculated intention or
//! the one it offers back to the parties. The decision type records whose
//! terms the court favoured.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::payment::PaymentIntention;

/// Whose payment terms the court decision favoured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    Claimant,
    Defendant,
    Court,
    ClaimantInFavourOfDefendant,
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionType::Claimant => write!(f, "CLAIMANT"),
            DecisionType::Defendant => write!(f, "DEFENDANT"),
            DecisionType::Court => write!(f, "COURT"),
            DecisionType::ClaimantInFavourOfDefendant => {
                write!(f, "CLAIMANT_IN_FAVOUR_OF_DEFENDANT")
            }
        }
    }
}

/// The court's determination on repayment terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtDetermination {
    /// Intention calculated by the court from disposable income
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_payment_intention: Option<PaymentIntention>,
    /// Intention the court offered to the parties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_decision: Option<PaymentIntention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub disposable_income: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_type: Option<DecisionType>,
}
