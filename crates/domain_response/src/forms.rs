//! Wizard step form models
//!
//! One model per wizard page. Each deserializes straight from the draft
//! document (camelCase wire names) and validates to a list of field errors.
//! Choice fields that old drafts may carry with values this version no longer
//! knows (formalise option, payment option) are kept as raw strings and
//! checked against the closed set at validation and conversion time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::YesNo;

use crate::payment::{PaymentOption, PaymentSchedule};
use crate::validation::ValidationResult;

/// "Do you accept the amount the defendant has admitted?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleAdmitted {
    pub admitted: YesNo,
}

/// "Has the defendant paid you some of the amount?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl PaidAmount {
    pub fn validate_form(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if self.option == Some(YesNo::Yes) {
            match self.amount {
                None => result.add_error("amount", "Enter the amount paid"),
                Some(amount) if amount <= Decimal::ZERO => {
                    result.add_error("amount", "Enter a valid amount paid")
                }
                Some(_) => {}
            }
        }
        result
    }
}

/// "Will you try free mediation?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeMediation {
    pub option: YesNo,
}

/// Free-text reason for rejecting the defendant's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectionReason {
    #[validate(length(min = 1, max = 99000, message = "Enter a reason for rejecting"))]
    pub text: String,
}

impl RejectionReason {
    pub fn validate_form(&self) -> ValidationResult {
        match self.validate() {
            Ok(()) => ValidationResult::ok(),
            Err(errors) => errors.into(),
        }
    }
}

/// Known formalise-repayment choices as posted by the form
pub const SIGN_SETTLEMENT_AGREEMENT: &str = "signSettlementAgreement";
pub const REQUEST_COUNTY_COURT_JUDGEMENT: &str = "requestCCJ";
pub const REFER_TO_JUDGE: &str = "referToJudge";

/// "How do you want to formalise the repayment plan?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormaliseRepaymentPlan {
    pub option: String,
}

impl FormaliseRepaymentPlan {
    pub fn validate_form(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let known = [
            SIGN_SETTLEMENT_AGREEMENT,
            REQUEST_COUNTY_COURT_JUDGEMENT,
            REFER_TO_JUDGE,
        ];
        if !known.contains(&self.option.as_str()) {
            result.add_error("option", "Choose how to formalise the repayment plan");
        }
        result
    }
}

/// Instalment plan as entered on the repayment-plan page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instalment_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_schedule: Option<PaymentSchedule>,
}

impl PaymentPlanForm {
    pub fn validate_form(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match self.instalment_amount {
            None => result.add_error("instalmentAmount", "Enter an instalment amount"),
            Some(amount) if amount <= Decimal::ZERO => {
                result.add_error("instalmentAmount", "Enter a valid instalment amount")
            }
            Some(_) => {}
        }
        if self.first_payment_date.is_none() {
            result.add_error("firstPaymentDate", "Enter the date of the first instalment");
        }
        if self.payment_schedule.is_none() {
            result.add_error("paymentSchedule", "Choose how often instalments are paid");
        }
        result
    }
}

/// The claimant's alternative payment intention, assembled across the
/// payment-option, payment-date, and repayment-plan pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentionDraft {
    pub payment_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<PaymentPlanForm>,
}

impl PaymentIntentionDraft {
    pub fn validate_form(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        match PaymentOption::parse(&self.payment_option) {
            None => {
                result.add_error("paymentOption", "Choose a payment option");
            }
            Some(PaymentOption::BySetDate) => {
                if self.payment_date.is_none() {
                    result.add_error("paymentDate", "Enter a payment date");
                }
            }
            Some(PaymentOption::Instalments) => match &self.payment_plan {
                None => result.add_error("paymentPlan", "Enter a repayment plan"),
                Some(plan) => result.merge(plan.validate_form()),
            },
            Some(PaymentOption::Immediately) => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_paid_amount_requires_amount_when_yes() {
        let form = PaidAmount {
            option: Some(YesNo::Yes),
            amount: None,
        };
        let result = form.validate_form();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].field, "amount");
    }

    #[test]
    fn test_paid_amount_no_needs_no_amount() {
        let form = PaidAmount {
            option: Some(YesNo::No),
            amount: None,
        };
        assert!(form.validate_form().is_valid());
    }

    #[test]
    fn test_rejection_reason_must_not_be_empty() {
        let form = RejectionReason {
            text: String::new(),
        };
        assert!(!form.validate_form().is_valid());
        let form = RejectionReason {
            text: "The amount is wrong".to_string(),
        };
        assert!(form.validate_form().is_valid());
    }

    #[test]
    fn test_formalise_plan_closed_set() {
        for option in [
            SIGN_SETTLEMENT_AGREEMENT,
            REQUEST_COUNTY_COURT_JUDGEMENT,
            REFER_TO_JUDGE,
        ] {
            let form = FormaliseRepaymentPlan {
                option: option.to_string(),
            };
            assert!(form.validate_form().is_valid(), "{option} should be known");
        }
        let form = FormaliseRepaymentPlan {
            option: "somethingElse".to_string(),
        };
        assert!(!form.validate_form().is_valid());
    }

    #[test]
    fn test_intention_by_set_date_needs_date() {
        let form = PaymentIntentionDraft {
            payment_option: "BY_SET_DATE".to_string(),
            payment_date: None,
            payment_plan: None,
        };
        let result = form.validate_form();
        assert_eq!(result.errors()[0].field, "paymentDate");
    }

    #[test]
    fn test_intention_instalments_needs_complete_plan() {
        let form = PaymentIntentionDraft {
            payment_option: "INSTALMENTS".to_string(),
            payment_date: None,
            payment_plan: Some(PaymentPlanForm {
                instalment_amount: Some(dec!(0)),
                first_payment_date: None,
                payment_schedule: Some(PaymentSchedule::EachWeek),
            }),
        };
        let result = form.validate_form();
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"instalmentAmount"));
        assert!(fields.contains(&"firstPaymentDate"));
    }

    #[test]
    fn test_intention_immediately_is_complete() {
        let form = PaymentIntentionDraft {
            payment_option: "IMMEDIATELY".to_string(),
            payment_date: None,
            payment_plan: None,
        };
        assert!(form.validate_form().is_valid());
    }
}
