//! Finalized claimant response
//!
//! The immutable snapshot submitted to the claim store. Exactly one variant
//! is ever produced for a draft: a rejection when the claimant refused the
//! admitted amount, an acceptance otherwise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::court::CourtDetermination;
use crate::payment::PaymentIntention;

/// How an accepted repayment plan is to be formalised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormaliseOption {
    Settlement,
    Ccj,
    ReferToJudge,
}

/// The claimant rejects the defendant's response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRejection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_mediation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The claimant accepts the defendant's response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAcceptance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formalise_option: Option<FormaliseOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_determination: Option<CourtDetermination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_payment_intention: Option<PaymentIntention>,
}

/// A finalized claimant response, exactly one variant populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimantResponse {
    Rejection(ResponseRejection),
    Acceptance(ResponseAcceptance),
}

impl ClaimantResponse {
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClaimantResponse::Rejection(_))
    }

    pub fn is_acceptance(&self) -> bool {
        matches!(self, ClaimantResponse::Acceptance(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejection_wire_format_is_tagged() {
        let response = ClaimantResponse::Rejection(ResponseRejection {
            amount_paid: Some(dec!(50)),
            free_mediation: Some(true),
            reason: Some("disagree".to_string()),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "REJECTION");
        assert_eq!(json["amountPaid"], serde_json::json!(dec!(50)));
        assert_eq!(json["freeMediation"], true);
    }

    #[test]
    fn test_acceptance_omits_absent_fields() {
        let response = ClaimantResponse::Acceptance(ResponseAcceptance::default());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "ACCEPTANCE");
        assert!(json.get("formaliseOption").is_none());
    }
}
