//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are fixed and
//! predictable: every date is pinned so converter output never depends on
//! when the suite runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::UserId;
use domain_response::forms::{
    FormaliseRepaymentPlan, FreeMediation, PaidAmount, PaymentIntentionDraft, PaymentPlanForm,
    RejectionReason, SettleAdmitted, SIGN_SETTLEMENT_AGREEMENT,
};
use domain_response::payment::PaymentSchedule;
use domain_response::DraftClaimantResponse;

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// The pinned "today" used when converting drafts in tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    /// A set payment date safely in the future
    pub fn set_payment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }
}

/// Fixture for monetary test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// The part payment used across rejection fixtures
    pub fn paid_amount() -> Decimal {
        dec!(50)
    }

    /// An amount over the pilot feature limit
    pub fn over_pilot_limit() -> Decimal {
        dec!(301)
    }

    /// A weekly instalment
    pub fn instalment() -> Decimal {
        dec!(25)
    }
}

/// Fixture for identity test data
pub struct UserFixtures;

impl UserFixtures {
    pub fn claimant_id() -> UserId {
        UserId::new("1")
    }

    pub fn defendant_id() -> UserId {
        UserId::new("2")
    }

    pub fn stranger_id() -> UserId {
        UserId::new("999")
    }
}

/// Fixture for draft documents at interesting wizard states
pub struct DraftFixtures;

impl DraftFixtures {
    /// A complete rejection: part paid, mediation accepted, reason given
    pub fn rejection() -> DraftClaimantResponse {
        DraftClaimantResponse {
            settle_admitted: Some(SettleAdmitted {
                admitted: core_kernel::YesNo::No,
            }),
            paid_amount: Some(PaidAmount {
                option: Some(core_kernel::YesNo::Yes),
                amount: Some(AmountFixtures::paid_amount()),
            }),
            free_mediation: Some(FreeMediation {
                option: core_kernel::YesNo::Yes,
            }),
            rejection_reason: Some(RejectionReason {
                text: "disagree".to_string(),
            }),
            ..Default::default()
        }
    }

    /// A complete acceptance formalised as a settlement agreement, with the
    /// claimant proposing instalments
    pub fn acceptance_with_instalments() -> DraftClaimantResponse {
        DraftClaimantResponse {
            settle_admitted: Some(SettleAdmitted {
                admitted: core_kernel::YesNo::Yes,
            }),
            formalise_repayment_plan: Some(FormaliseRepaymentPlan {
                option: SIGN_SETTLEMENT_AGREEMENT.to_string(),
            }),
            alternate_payment_method: Some(PaymentIntentionDraft {
                payment_option: "INSTALMENTS".to_string(),
                payment_date: None,
                payment_plan: Some(PaymentPlanForm {
                    instalment_amount: Some(AmountFixtures::instalment()),
                    first_payment_date: Some(DateFixtures::set_payment_date()),
                    payment_schedule: Some(PaymentSchedule::EachWeek),
                }),
            }),
            ..Default::default()
        }
    }
}
