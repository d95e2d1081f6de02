//! Claimant Response Domain
//!
//! The claimant-response leg of a money claim: after the defendant responds,
//! the claimant works through a wizard (accept or reject the admission,
//! mediation, how to formalise repayment, payment terms) whose in-progress
//! state is a [`draft::DraftClaimantResponse`]. On submission the draft is
//! converted once into an immutable [`response::ClaimantResponse`] with
//! exactly one variant populated.
//!
//! # Flow
//!
//! ```text
//! wizard step POST -> form validate -> draft mutate -> draft store save
//! check-and-send POST -> converter -> claim store submit -> draft delete
//! ```

pub mod converter;
pub mod court;
pub mod dq;
pub mod draft;
pub mod error;
pub mod forms;
pub mod payment;
pub mod response;
pub mod tasks;
pub mod validation;

pub use converter::ClaimantResponseConverter;
pub use court::{CourtDetermination, DecisionType};
pub use dq::DirectionsQuestionnaireDraft;
pub use draft::DraftClaimantResponse;
pub use error::ConversionError;
pub use payment::{PaymentIntention, PaymentOption, PaymentSchedule, RepaymentPlan};
pub use response::{ClaimantResponse, FormaliseOption, ResponseAcceptance, ResponseRejection};
pub use validation::{FieldError, ValidationResult};
