//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::YesNo;
use domain_response::payment::{PaymentOption, PaymentSchedule};

/// Strategy for positive amounts in pence, as decimals in pounds
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|pence| Decimal::new(pence, 2))
}

/// Strategy for amounts carrying sub-penny precision
pub fn unrounded_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64, 3u32..6u32).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for yes/no answers
pub fn yes_no_strategy() -> impl Strategy<Value = YesNo> {
    prop_oneof![Just(YesNo::Yes), Just(YesNo::No)]
}

/// Strategy for the known payment options
pub fn payment_option_strategy() -> impl Strategy<Value = PaymentOption> {
    prop_oneof![
        Just(PaymentOption::Immediately),
        Just(PaymentOption::BySetDate),
        Just(PaymentOption::Instalments),
    ]
}

/// Strategy for instalment schedules
pub fn payment_schedule_strategy() -> impl Strategy<Value = PaymentSchedule> {
    prop_oneof![
        Just(PaymentSchedule::EachWeek),
        Just(PaymentSchedule::EveryTwoWeeks),
        Just(PaymentSchedule::EveryMonth),
    ]
}
