//! Payment intention types
//!
//! A payment intention records how and when a party will pay. Which companion
//! field applies depends on the option: immediate payment and payment by a
//! set date carry a date, an instalment plan carries a repayment plan. The
//! converter enforces the pairing; these types just carry the data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::money::round_pence;

/// How the paying party intends to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOption {
    #[serde(rename = "IMMEDIATELY")]
    Immediately,
    #[serde(rename = "BY_SET_DATE")]
    BySetDate,
    #[serde(rename = "INSTALMENTS")]
    Instalments,
}

impl PaymentOption {
    /// Parses a draft payment-option value against the closed set
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "IMMEDIATELY" => Some(PaymentOption::Immediately),
            "BY_SET_DATE" => Some(PaymentOption::BySetDate),
            "INSTALMENTS" => Some(PaymentOption::Instalments),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOption::Immediately => write!(f, "IMMEDIATELY"),
            PaymentOption::BySetDate => write!(f, "BY_SET_DATE"),
            PaymentOption::Instalments => write!(f, "INSTALMENTS"),
        }
    }
}

/// Instalment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentSchedule {
    #[serde(rename = "EACH_WEEK")]
    EachWeek,
    #[serde(rename = "EVERY_TWO_WEEKS")]
    EveryTwoWeeks,
    #[serde(rename = "EVERY_MONTH")]
    EveryMonth,
}

/// An instalment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentPlan {
    pub instalment_amount: Decimal,
    pub first_payment_date: NaiveDate,
    pub payment_schedule: PaymentSchedule,
}

impl RepaymentPlan {
    /// Returns the plan with the instalment amount rounded to whole pence
    pub fn rounded(&self) -> Self {
        Self {
            instalment_amount: round_pence(self.instalment_amount),
            ..self.clone()
        }
    }
}

/// A finalized payment intention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntention {
    pub payment_option: PaymentOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repayment_plan: Option<RepaymentPlan>,
}

impl PaymentIntention {
    /// Returns the intention with any instalment amount rounded to pence
    pub fn rounded(&self) -> Self {
        Self {
            payment_option: self.payment_option,
            payment_date: self.payment_date,
            repayment_plan: self.repayment_plan.as_ref().map(RepaymentPlan::rounded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_option_parse_closed_set() {
        assert_eq!(
            PaymentOption::parse("IMMEDIATELY"),
            Some(PaymentOption::Immediately)
        );
        assert_eq!(PaymentOption::parse("NEXT_YEAR"), None);
    }

    #[test]
    fn test_repayment_plan_rounding() {
        let plan = RepaymentPlan {
            instalment_amount: dec!(123.456),
            first_payment_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            payment_schedule: PaymentSchedule::EveryMonth,
        };
        assert_eq!(plan.rounded().instalment_amount, dec!(123.46));
    }

    #[test]
    fn test_wire_format() {
        let intention = PaymentIntention {
            payment_option: PaymentOption::BySetDate,
            payment_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            repayment_plan: None,
        };
        let json = serde_json::to_value(&intention).unwrap();
        assert_eq!(json["paymentOption"], "BY_SET_DATE");
        assert_eq!(json["paymentDate"], "2026-09-01");
        assert!(json.get("repaymentPlan").is_none());
    }
}
