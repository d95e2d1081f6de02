//! Task-list completion checks
//!
//! The check-and-send page lists the wizard steps still outstanding and only
//! allows submission once the list is empty. A step counts as complete when
//! its sub-object exists and validates cleanly.

use core_kernel::YesNo;

use crate::draft::DraftClaimantResponse;
use crate::forms::PaymentPlanForm;
use crate::payment::PaymentOption;

/// Labels for outstanding wizard steps, as shown on the task list
pub const CHOOSE_A_RESPONSE: &str = "chooseAResponse";
pub const FREE_MEDIATION: &str = "freeMediation";
pub const CHOOSE_HOW_TO_PROCEED: &str = "chooseHowToProceed";
pub const YOUR_REPAYMENT_PLAN: &str = "yourRepaymentPlan";

/// "Your repayment plan" completion check
pub struct RepaymentPlanTask;

impl RepaymentPlanTask {
    pub fn is_completed(plan: Option<&PaymentPlanForm>) -> bool {
        plan.map(|p| p.validate_form().is_valid()).unwrap_or(false)
    }
}

/// Returns the labels of steps the claimant still has to complete
pub fn outstanding_tasks(draft: &DraftClaimantResponse) -> Vec<&'static str> {
    let mut outstanding = Vec::new();

    let Some(settle_admitted) = &draft.settle_admitted else {
        return vec![CHOOSE_A_RESPONSE];
    };

    match settle_admitted.admitted {
        YesNo::No => {
            if draft.free_mediation.is_none() {
                outstanding.push(FREE_MEDIATION);
            }
        }
        YesNo::Yes => {
            if draft.formalise_repayment_plan.is_none() {
                outstanding.push(CHOOSE_HOW_TO_PROCEED);
            }
            let wants_instalments = draft
                .alternate_payment_method
                .as_ref()
                .map(|intention| {
                    PaymentOption::parse(&intention.payment_option)
                        == Some(PaymentOption::Instalments)
                })
                .unwrap_or(false);
            if wants_instalments
                && !RepaymentPlanTask::is_completed(
                    draft
                        .alternate_payment_method
                        .as_ref()
                        .and_then(|intention| intention.payment_plan.as_ref()),
                )
            {
                outstanding.push(YOUR_REPAYMENT_PLAN);
            }
        }
    }

    outstanding
}

/// True once every required step is complete
pub fn ready_to_submit(draft: &DraftClaimantResponse) -> bool {
    outstanding_tasks(draft).is_empty()
}
