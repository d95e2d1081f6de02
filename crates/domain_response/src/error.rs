//! Conversion errors
//!
//! Every variant is a fatal input error: the draft reached submission in a
//! state the converter cannot accept. Nothing here is retried; the request
//! fails and the draft is left untouched.

use thiserror::Error;

use crate::court::DecisionType;
use crate::payment::PaymentOption;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("court offered payment intention not found where decision type is {0}")]
    CourtOfferedIntentionMissing(DecisionType),

    #[error("court calculated payment intention not found where decision type is {0}")]
    CourtCalculatedIntentionMissing(DecisionType),

    #[error("claimant payment intention not found where decision type is {0}")]
    ClaimantIntentionMissing(DecisionType),

    #[error("Unknown formalise repayment option {0}")]
    UnknownFormaliseOption(String),

    #[error("Unknown value in payment option {0}")]
    UnknownPaymentOption(String),

    #[error("payment date not found where payment option is {0}")]
    PaymentDateMissing(PaymentOption),
}
