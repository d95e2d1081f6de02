//! Draft to claimant-response conversion
//!
//! A stateless transform invoked once per submission. The draft has been
//! validated page by page, so anything still inconsistent here (a decision
//! type without its companion intention, an unknown choice value from an old
//! draft) is a fatal input error, not a form error.

use chrono::{Days, NaiveDate, Utc};

use core_kernel::YesNo;

use crate::court::{CourtDetermination, DecisionType};
use crate::draft::DraftClaimantResponse;
use crate::error::ConversionError;
use crate::forms::{self, FormaliseRepaymentPlan, PaymentIntentionDraft};
use crate::payment::{PaymentIntention, PaymentOption, RepaymentPlan};
use crate::response::{ClaimantResponse, FormaliseOption, ResponseAcceptance, ResponseRejection};

/// Days granted for an "immediately" payment before it falls due
const IMMEDIATE_PAYMENT_GRACE_DAYS: u64 = 5;

pub struct ClaimantResponseConverter;

impl ClaimantResponseConverter {
    /// Converts a completed draft into the finalized response.
    ///
    /// Date arithmetic uses the current UTC date; see [`Self::convert_at`]
    /// for a deterministic variant.
    pub fn convert(draft: &DraftClaimantResponse) -> Result<ClaimantResponse, ConversionError> {
        Self::convert_at(draft, Utc::now().date_naive())
    }

    /// Converts a completed draft, deriving dates relative to `today`
    pub fn convert_at(
        draft: &DraftClaimantResponse,
        today: NaiveDate,
    ) -> Result<ClaimantResponse, ConversionError> {
        if draft.is_rejected() {
            Ok(ClaimantResponse::Rejection(Self::rejection(draft)))
        } else {
            Ok(ClaimantResponse::Acceptance(Self::acceptance(draft, today)?))
        }
    }

    fn rejection(draft: &DraftClaimantResponse) -> ResponseRejection {
        ResponseRejection {
            amount_paid: draft.paid_amount.as_ref().and_then(|paid| paid.amount),
            free_mediation: draft
                .free_mediation
                .as_ref()
                .map(|mediation| mediation.option == YesNo::Yes),
            reason: draft
                .rejection_reason
                .as_ref()
                .map(|reason| reason.text.clone()),
        }
    }

    fn acceptance(
        draft: &DraftClaimantResponse,
        today: NaiveDate,
    ) -> Result<ResponseAcceptance, ConversionError> {
        let formalise_option = draft
            .formalise_repayment_plan
            .as_ref()
            .map(Self::formalise_option)
            .transpose()?;

        Ok(ResponseAcceptance {
            amount_paid: draft.paid_amount.as_ref().and_then(|paid| paid.amount),
            formalise_option,
            court_determination: Self::court_determination(draft)?,
            claimant_payment_intention: Self::claimant_payment_intention(
                draft.alternate_payment_method.as_ref(),
                draft.court_decision_type,
                today,
            )?,
        })
    }

    /// Fixed three-way lookup over the closed set of formalise choices
    fn formalise_option(plan: &FormaliseRepaymentPlan) -> Result<FormaliseOption, ConversionError> {
        match plan.option.as_str() {
            forms::SIGN_SETTLEMENT_AGREEMENT => Ok(FormaliseOption::Settlement),
            forms::REQUEST_COUNTY_COURT_JUDGEMENT => Ok(FormaliseOption::Ccj),
            forms::REFER_TO_JUDGE => Ok(FormaliseOption::ReferToJudge),
            other => Err(ConversionError::UnknownFormaliseOption(other.to_string())),
        }
    }

    fn court_determination(
        draft: &DraftClaimantResponse,
    ) -> Result<Option<CourtDetermination>, ConversionError> {
        if draft.court_decision_type == Some(DecisionType::Court)
            && draft.court_offered_payment_intention.is_none()
        {
            return Err(ConversionError::CourtOfferedIntentionMissing(
                DecisionType::Court,
            ));
        }
        if draft.court_decision_type == Some(DecisionType::ClaimantInFavourOfDefendant)
            && draft.court_calculated_payment_intention.is_none()
        {
            return Err(ConversionError::CourtCalculatedIntentionMissing(
                DecisionType::ClaimantInFavourOfDefendant,
            ));
        }
        if draft.court_offered_payment_intention.is_none()
            && draft.court_calculated_payment_intention.is_none()
        {
            return Ok(None);
        }

        Ok(Some(CourtDetermination {
            court_payment_intention: draft.court_calculated_payment_intention.clone(),
            court_decision: draft
                .court_offered_payment_intention
                .as_ref()
                .map(PaymentIntention::rounded),
            rejection_reason: draft
                .rejection_reason
                .as_ref()
                .map(|reason| reason.text.clone()),
            disposable_income: draft.disposable_income.unwrap_or_default(),
            decision_type: draft.court_decision_type,
        }))
    }

    fn claimant_payment_intention(
        draft_intention: Option<&PaymentIntentionDraft>,
        decision_type: Option<DecisionType>,
        today: NaiveDate,
    ) -> Result<Option<PaymentIntention>, ConversionError> {
        let Some(draft_intention) = draft_intention else {
            // These decision types are derived from the claimant's own terms,
            // so the intention must exist.
            return match decision_type {
                Some(
                    decision @ (DecisionType::Claimant
                    | DecisionType::ClaimantInFavourOfDefendant),
                ) => Err(ConversionError::ClaimantIntentionMissing(decision)),
                _ => Ok(None),
            };
        };

        let payment_option = PaymentOption::parse(&draft_intention.payment_option).ok_or_else(
            || ConversionError::UnknownPaymentOption(draft_intention.payment_option.clone()),
        )?;

        let payment_date = draft_intention
            .payment_date
            .map(|date| Self::payment_date(payment_option, date, today))
            .transpose()?;
        if payment_option == PaymentOption::BySetDate && payment_date.is_none() {
            return Err(ConversionError::PaymentDateMissing(payment_option));
        }

        // Copied as entered; only court-decided plans get rounded.
        let repayment_plan = draft_intention.payment_plan.as_ref().and_then(|plan| {
            Some(RepaymentPlan {
                instalment_amount: plan.instalment_amount?,
                first_payment_date: plan.first_payment_date?,
                payment_schedule: plan.payment_schedule?,
            })
        });

        Ok(Some(PaymentIntention {
            payment_option,
            payment_date,
            repayment_plan,
        }))
    }

    /// Derives the finalized payment date from the chosen option
    fn payment_date(
        option: PaymentOption,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<NaiveDate, ConversionError> {
        match option {
            PaymentOption::Immediately => Ok(today + Days::new(IMMEDIATE_PAYMENT_GRACE_DAYS)),
            PaymentOption::BySetDate => Ok(date),
            other => Err(ConversionError::UnknownPaymentOption(other.to_string())),
        }
    }
}
