//! The claimant-response draft aggregate
//!
//! One document per claim, stored externally by the draft store under the
//! `claimantResponse` type and mutated a step at a time. Every sub-object is
//! optional until its page has been submitted. The court fields are written
//! by the court calculator when the claimant proposes alternative terms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::YesNo;

use crate::court::DecisionType;
use crate::forms::{
    FormaliseRepaymentPlan, FreeMediation, PaidAmount, PaymentIntentionDraft, RejectionReason,
    SettleAdmitted,
};
use crate::payment::PaymentIntention;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftClaimantResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_admitted: Option<SettleAdmitted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<PaidAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_mediation: Option<FreeMediation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<RejectionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formalise_repayment_plan: Option<FormaliseRepaymentPlan>,
    /// The claimant's own payment terms when rejecting the defendant's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_payment_method: Option<PaymentIntentionDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_decision_type: Option<DecisionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_offered_payment_intention: Option<PaymentIntention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_calculated_payment_intention: Option<PaymentIntention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposable_income: Option<Decimal>,
}

impl DraftClaimantResponse {
    /// True when the claimant has rejected the admitted amount
    pub fn is_rejected(&self) -> bool {
        matches!(
            self.settle_admitted,
            Some(SettleAdmitted {
                admitted: YesNo::No
            })
        )
    }
}
