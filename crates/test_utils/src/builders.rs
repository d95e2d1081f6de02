//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ExternalId, UserId};
use domain_claim::{
    AmountRow, Claim, ClaimData, DefendantResponse, Party, PartyType,
};
use domain_response::forms::{PaymentIntentionDraft, PaymentPlanForm, SettleAdmitted};
use domain_response::DraftClaimantResponse;

use crate::fixtures::UserFixtures;

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    external_id: ExternalId,
    claimant_id: UserId,
    defendant_id: Option<UserId>,
    defendant_type: PartyType,
    amount: Decimal,
    responded: bool,
    features: Option<String>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder for a responded-to individual claim of £200
    pub fn new() -> Self {
        Self {
            external_id: ExternalId::new(),
            claimant_id: UserFixtures::claimant_id(),
            defendant_id: Some(UserFixtures::defendant_id()),
            defendant_type: PartyType::Individual,
            amount: dec!(200),
            responded: true,
            features: None,
        }
    }

    pub fn with_external_id(mut self, id: ExternalId) -> Self {
        self.external_id = id;
        self
    }

    pub fn with_claimant_id(mut self, id: UserId) -> Self {
        self.claimant_id = id;
        self
    }

    pub fn with_defendant_id(mut self, id: Option<UserId>) -> Self {
        self.defendant_id = id;
        self
    }

    pub fn with_business_defendant(mut self) -> Self {
        self.defendant_type = PartyType::Company;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Marks the claim as awaiting the defendant's response
    pub fn without_response(mut self) -> Self {
        self.responded = false;
        self
    }

    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = Some(features.into());
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            external_id: self.external_id,
            claimant_id: self.claimant_id,
            defendant_id: self.defendant_id,
            claim_data: ClaimData {
                claimant: Party::new(PartyType::Individual, "Jan Clark"),
                defendant: Party::new(self.defendant_type, "Mary Richards"),
                amount_rows: vec![AmountRow {
                    reason: "Unpaid invoice".to_string(),
                    amount: Some(self.amount),
                }],
                interest: None,
            },
            response: self.responded.then(|| DefendantResponse {
                response_type: "FULL_ADMISSION".to_string(),
                responded_at: None,
            }),
            features: self.features,
            issued_on: NaiveDate::from_ymd_opt(2026, 7, 1),
        }
    }
}

/// Builder for constructing claimant-response drafts
#[derive(Default)]
pub struct TestDraftBuilder {
    draft: DraftClaimantResponse,
}

impl TestDraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admitted(mut self, admitted: core_kernel::YesNo) -> Self {
        self.draft.settle_admitted = Some(SettleAdmitted { admitted });
        self
    }

    pub fn with_payment_option(mut self, option: impl Into<String>) -> Self {
        let existing = self.draft.alternate_payment_method.take();
        self.draft.alternate_payment_method = Some(PaymentIntentionDraft {
            payment_option: option.into(),
            payment_date: existing.as_ref().and_then(|i| i.payment_date),
            payment_plan: existing.and_then(|i| i.payment_plan),
        });
        self
    }

    pub fn with_payment_date(mut self, date: NaiveDate) -> Self {
        if let Some(intention) = self.draft.alternate_payment_method.as_mut() {
            intention.payment_date = Some(date);
        }
        self
    }

    pub fn with_payment_plan(mut self, plan: PaymentPlanForm) -> Self {
        if let Some(intention) = self.draft.alternate_payment_method.as_mut() {
            intention.payment_plan = Some(plan);
        }
        self
    }

    pub fn build(self) -> DraftClaimantResponse {
        self.draft
    }
}
