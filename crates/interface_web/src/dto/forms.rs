//! Posted form bodies
//!
//! One struct per wizard page POST. Everything is optional at this layer:
//! a citizen can submit a page blank, and the domain form validation turns
//! missing answers into field errors rather than a 422 from the extractor.
//! Amounts arrive as raw strings so `£` signs and thousands separators can
//! be stripped before parsing.

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::YesNo;
use domain_response::payment::PaymentSchedule;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleAdmittedBody {
    pub admitted: Option<YesNo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidAmountBody {
    pub option: Option<YesNo>,
    pub amount: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeMediationBody {
    pub option: Option<YesNo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionReasonBody {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormaliseRepaymentPlanBody {
    pub option: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptionBody {
    pub option: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDateBody {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentPlanBody {
    pub instalment_amount: Option<String>,
    pub first_payment_date: Option<NaiveDate>,
    pub payment_schedule: Option<PaymentSchedule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertBody {
    pub expert_required: Option<YesNo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertReportBody {
    pub expert_name: Option<String>,
    pub report_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfWitnessBody {
    pub option: Option<YesNo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequiredBody {
    pub language_interpreter: Option<String>,
    pub sign_language_interpreter: Option<String>,
    pub other_support: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submission_deserializes() {
        let body: SettleAdmittedBody = serde_urlencoded::from_str("").unwrap();
        assert!(body.admitted.is_none());
    }

    #[test]
    fn test_form_encoding_round_trip() {
        let body: RepaymentPlanBody = serde_urlencoded::from_str(
            "instalmentAmount=%C2%A3100.50&firstPaymentDate=2026-10-01&paymentSchedule=EACH_WEEK",
        )
        .unwrap();
        assert_eq!(body.instalment_amount.as_deref(), Some("£100.50"));
        assert_eq!(
            body.first_payment_date,
            NaiveDate::from_ymd_opt(2026, 10, 1)
        );
        assert_eq!(body.payment_schedule, Some(PaymentSchedule::EachWeek));
    }
}
