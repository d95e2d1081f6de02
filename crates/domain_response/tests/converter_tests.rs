//! Tests for the claimant response converter

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::YesNo;
use domain_response::converter::ClaimantResponseConverter;
use domain_response::court::DecisionType;
use domain_response::draft::DraftClaimantResponse;
use domain_response::error::ConversionError;
use domain_response::forms::{
    FormaliseRepaymentPlan, FreeMediation, PaidAmount, PaymentIntentionDraft, RejectionReason,
    SettleAdmitted, REFER_TO_JUDGE, REQUEST_COUNTY_COURT_JUDGEMENT, SIGN_SETTLEMENT_AGREEMENT,
};
use domain_response::payment::{
    PaymentIntention, PaymentOption, PaymentSchedule, RepaymentPlan,
};
use domain_response::response::{ClaimantResponse, FormaliseOption};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

fn convert(draft: &DraftClaimantResponse) -> Result<ClaimantResponse, ConversionError> {
    ClaimantResponseConverter::convert_at(draft, today())
}

fn rejecting_draft() -> DraftClaimantResponse {
    DraftClaimantResponse {
        settle_admitted: Some(SettleAdmitted {
            admitted: YesNo::No,
        }),
        ..Default::default()
    }
}

fn accepting_draft() -> DraftClaimantResponse {
    DraftClaimantResponse {
        settle_admitted: Some(SettleAdmitted {
            admitted: YesNo::Yes,
        }),
        ..Default::default()
    }
}

fn paid(amount: Decimal) -> Option<PaidAmount> {
    Some(PaidAmount {
        option: Some(YesNo::Yes),
        amount: Some(amount),
    })
}

fn intention(option: &str) -> PaymentIntentionDraft {
    PaymentIntentionDraft {
        payment_option: option.to_string(),
        payment_date: None,
        payment_plan: None,
    }
}

fn court_intention(instalment_amount: Decimal) -> PaymentIntention {
    PaymentIntention {
        payment_option: PaymentOption::Instalments,
        payment_date: None,
        repayment_plan: Some(RepaymentPlan {
            instalment_amount,
            first_payment_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            payment_schedule: PaymentSchedule::EveryMonth,
        }),
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_not_admitted_yields_rejection() {
        let response = convert(&rejecting_draft()).unwrap();
        assert!(response.is_rejection());
    }

    #[test]
    fn test_end_to_end_example() {
        let draft = DraftClaimantResponse {
            paid_amount: paid(dec!(50)),
            free_mediation: Some(FreeMediation { option: YesNo::Yes }),
            rejection_reason: Some(RejectionReason {
                text: "disagree".to_string(),
            }),
            ..rejecting_draft()
        };

        let ClaimantResponse::Rejection(rejection) = convert(&draft).unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.amount_paid, Some(dec!(50)));
        assert_eq!(rejection.free_mediation, Some(true));
        assert_eq!(rejection.reason.as_deref(), Some("disagree"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let ClaimantResponse::Rejection(rejection) = convert(&rejecting_draft()).unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.amount_paid, None);
        assert_eq!(rejection.free_mediation, None);
        assert_eq!(rejection.reason, None);
    }

    #[test]
    fn test_mediation_no_maps_to_false() {
        let draft = DraftClaimantResponse {
            free_mediation: Some(FreeMediation { option: YesNo::No }),
            ..rejecting_draft()
        };
        let ClaimantResponse::Rejection(rejection) = convert(&draft).unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.free_mediation, Some(false));
    }
}

mod acceptance {
    use super::*;

    #[test]
    fn test_admitted_yes_yields_acceptance() {
        let response = convert(&accepting_draft()).unwrap();
        assert!(response.is_acceptance());
    }

    #[test]
    fn test_missing_settle_admitted_yields_acceptance() {
        let response = convert(&DraftClaimantResponse::default()).unwrap();
        assert!(response.is_acceptance());
    }

    #[test]
    fn test_amount_paid_carried_over() {
        let draft = DraftClaimantResponse {
            paid_amount: paid(dec!(10)),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        assert_eq!(acceptance.amount_paid, Some(dec!(10)));
    }
}

mod formalise_option {
    use super::*;

    fn with_option(option: &str) -> DraftClaimantResponse {
        DraftClaimantResponse {
            formalise_repayment_plan: Some(FormaliseRepaymentPlan {
                option: option.to_string(),
            }),
            ..accepting_draft()
        }
    }

    #[test]
    fn test_three_way_mapping() {
        let cases = [
            (SIGN_SETTLEMENT_AGREEMENT, FormaliseOption::Settlement),
            (REQUEST_COUNTY_COURT_JUDGEMENT, FormaliseOption::Ccj),
            (REFER_TO_JUDGE, FormaliseOption::ReferToJudge),
        ];
        for (input, expected) in cases {
            let ClaimantResponse::Acceptance(acceptance) = convert(&with_option(input)).unwrap()
            else {
                panic!("expected acceptance");
            };
            assert_eq!(acceptance.formalise_option, Some(expected), "{input}");
        }
    }

    #[test]
    fn test_unknown_option_is_fatal_and_named() {
        let err = convert(&with_option("somethingElse")).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownFormaliseOption("somethingElse".to_string())
        );
        assert!(err.to_string().contains("somethingElse"));
    }
}

mod court_determination {
    use super::*;

    #[test]
    fn test_decision_court_without_offered_intention_is_fatal() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::Court),
            ..accepting_draft()
        };
        assert_eq!(
            convert(&draft).unwrap_err(),
            ConversionError::CourtOfferedIntentionMissing(DecisionType::Court)
        );
    }

    #[test]
    fn test_decision_in_favour_of_defendant_without_calculated_is_fatal() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::ClaimantInFavourOfDefendant),
            court_offered_payment_intention: Some(court_intention(dec!(10))),
            alternate_payment_method: Some(intention("IMMEDIATELY")),
            ..accepting_draft()
        };
        assert_eq!(
            convert(&draft).unwrap_err(),
            ConversionError::CourtCalculatedIntentionMissing(
                DecisionType::ClaimantInFavourOfDefendant
            )
        );
    }

    #[test]
    fn test_no_intentions_means_no_determination() {
        let ClaimantResponse::Acceptance(acceptance) = convert(&accepting_draft()).unwrap()
        else {
            panic!("expected acceptance");
        };
        assert_eq!(acceptance.court_determination, None);
    }

    #[test]
    fn test_offered_intention_instalments_are_rounded() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::Court),
            court_offered_payment_intention: Some(court_intention(dec!(123.456))),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        let determination = acceptance.court_determination.unwrap();
        let plan = determination
            .court_decision
            .unwrap()
            .repayment_plan
            .unwrap();
        assert_eq!(plan.instalment_amount, dec!(123.46));
    }

    #[test]
    fn test_whole_pound_instalments_unchanged() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::Court),
            court_offered_payment_intention: Some(court_intention(dec!(100))),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        let plan = acceptance
            .court_determination
            .unwrap()
            .court_decision
            .unwrap()
            .repayment_plan
            .unwrap();
        assert_eq!(plan.instalment_amount, dec!(100.00));
    }

    #[test]
    fn test_carries_reason_income_and_decision_type() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::Court),
            court_offered_payment_intention: Some(court_intention(dec!(20))),
            court_calculated_payment_intention: Some(court_intention(dec!(15))),
            rejection_reason: Some(RejectionReason {
                text: "too slow".to_string(),
            }),
            disposable_income: Some(dec!(85.5)),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        let determination = acceptance.court_determination.unwrap();
        assert_eq!(determination.rejection_reason.as_deref(), Some("too slow"));
        assert_eq!(determination.disposable_income, dec!(85.5));
        assert_eq!(determination.decision_type, Some(DecisionType::Court));
        assert!(determination.court_payment_intention.is_some());
    }

    #[test]
    fn test_disposable_income_defaults_to_zero() {
        let draft = DraftClaimantResponse {
            court_decision_type: Some(DecisionType::Court),
            court_offered_payment_intention: Some(court_intention(dec!(20))),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        assert_eq!(
            acceptance.court_determination.unwrap().disposable_income,
            Decimal::ZERO
        );
    }
}

mod claimant_payment_intention {
    use super::*;

    #[test]
    fn test_absent_intention_fatal_for_claimant_decision() {
        for decision in [
            DecisionType::Claimant,
            DecisionType::ClaimantInFavourOfDefendant,
        ] {
            let draft = DraftClaimantResponse {
                court_decision_type: Some(decision),
                court_offered_payment_intention: Some(court_intention(dec!(10))),
                court_calculated_payment_intention: Some(court_intention(dec!(10))),
                ..accepting_draft()
            };
            assert_eq!(
                convert(&draft).unwrap_err(),
                ConversionError::ClaimantIntentionMissing(decision)
            );
        }
    }

    #[test]
    fn test_absent_intention_silent_for_other_decisions() {
        for decision in [Some(DecisionType::Defendant), None] {
            let draft = DraftClaimantResponse {
                court_decision_type: decision,
                ..accepting_draft()
            };
            let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
                panic!("expected acceptance");
            };
            assert_eq!(acceptance.claimant_payment_intention, None);
        }
    }

    #[test]
    fn test_immediately_pays_in_five_days() {
        let mut draft_intention = intention("IMMEDIATELY");
        draft_intention.payment_date = NaiveDate::from_ymd_opt(2026, 1, 1);
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(draft_intention),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        let payment_intention = acceptance.claimant_payment_intention.unwrap();
        assert_eq!(payment_intention.payment_option, PaymentOption::Immediately);
        assert_eq!(
            payment_intention.payment_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
    }

    #[test]
    fn test_by_set_date_without_a_date_is_fatal() {
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(intention("BY_SET_DATE")),
            ..accepting_draft()
        };
        assert_eq!(
            convert(&draft).unwrap_err(),
            ConversionError::PaymentDateMissing(PaymentOption::BySetDate)
        );
    }

    #[test]
    fn test_by_set_date_uses_explicit_date() {
        let mut draft_intention = intention("BY_SET_DATE");
        draft_intention.payment_date = NaiveDate::from_ymd_opt(2026, 12, 24);
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(draft_intention),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        assert_eq!(
            acceptance.claimant_payment_intention.unwrap().payment_date,
            NaiveDate::from_ymd_opt(2026, 12, 24)
        );
    }

    #[test]
    fn test_unknown_payment_option_is_fatal_and_named() {
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(intention("WHENEVER")),
            ..accepting_draft()
        };
        let err = convert(&draft).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownPaymentOption("WHENEVER".to_string())
        );
        assert!(err.to_string().contains("WHENEVER"));
    }

    #[test]
    fn test_date_with_instalments_option_is_fatal() {
        let mut draft_intention = intention("INSTALMENTS");
        draft_intention.payment_date = NaiveDate::from_ymd_opt(2026, 10, 1);
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(draft_intention),
            ..accepting_draft()
        };
        assert_eq!(
            convert(&draft).unwrap_err(),
            ConversionError::UnknownPaymentOption("INSTALMENTS".to_string())
        );
    }

    #[test]
    fn test_instalment_plan_carried_as_entered() {
        let mut draft_intention = intention("INSTALMENTS");
        draft_intention.payment_plan = Some(domain_response::forms::PaymentPlanForm {
            instalment_amount: Some(dec!(33.333)),
            first_payment_date: NaiveDate::from_ymd_opt(2026, 10, 1),
            payment_schedule: Some(PaymentSchedule::EachWeek),
        });
        let draft = DraftClaimantResponse {
            alternate_payment_method: Some(draft_intention),
            ..accepting_draft()
        };
        let ClaimantResponse::Acceptance(acceptance) = convert(&draft).unwrap() else {
            panic!("expected acceptance");
        };
        let plan = acceptance
            .claimant_payment_intention
            .unwrap()
            .repayment_plan
            .unwrap();
        // The claimant's own plan is copied verbatim; rounding applies only
        // to court-decided instalments.
        assert_eq!(plan.instalment_amount, dec!(33.333));
        assert_eq!(plan.payment_schedule, PaymentSchedule::EachWeek);
    }
}

mod variant_properties {
    use super::*;
    use proptest::prelude::*;

    fn optional_paid_amount() -> impl Strategy<Value = Option<PaidAmount>> {
        proptest::option::of((1i64..100_000i64).prop_map(|minor| PaidAmount {
            option: Some(YesNo::Yes),
            amount: Some(Decimal::new(minor, 2)),
        }))
    }

    fn optional_mediation() -> impl Strategy<Value = Option<FreeMediation>> {
        proptest::option::of(
            prop_oneof![Just(YesNo::Yes), Just(YesNo::No)]
                .prop_map(|option| FreeMediation { option }),
        )
    }

    fn optional_reason() -> impl Strategy<Value = Option<RejectionReason>> {
        proptest::option::of(
            "[a-z ]{1,40}".prop_map(|text| RejectionReason { text }),
        )
    }

    proptest! {
        #[test]
        fn rejected_drafts_always_convert_to_rejections(
            paid_amount in optional_paid_amount(),
            free_mediation in optional_mediation(),
            rejection_reason in optional_reason(),
        ) {
            let draft = DraftClaimantResponse {
                paid_amount: paid_amount.clone(),
                free_mediation,
                rejection_reason: rejection_reason.clone(),
                ..rejecting_draft()
            };
            let ClaimantResponse::Rejection(rejection) = convert(&draft).unwrap() else {
                panic!("expected rejection");
            };
            prop_assert_eq!(
                rejection.amount_paid,
                paid_amount.and_then(|p| p.amount)
            );
            prop_assert_eq!(
                rejection.reason,
                rejection_reason.map(|r| r.text)
            );
        }

        #[test]
        fn non_rejected_drafts_always_convert_to_acceptances(
            paid_amount in optional_paid_amount(),
            admitted in proptest::option::of(Just(YesNo::Yes)),
        ) {
            let draft = DraftClaimantResponse {
                settle_admitted: admitted.map(|admitted| SettleAdmitted { admitted }),
                paid_amount,
                ..Default::default()
            };
            prop_assert!(convert(&draft).unwrap().is_acceptance());
        }
    }
}
