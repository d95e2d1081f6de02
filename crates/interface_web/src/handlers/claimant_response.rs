//! Claimant-response wizard handlers
//!
//! Each page follows the same shape: the GET renders the current draft
//! values, the POST validates the submitted form, writes it into the draft,
//! saves the draft back to the store, and redirects to the next step. A
//! failed validation re-renders the page model with field errors (200).
//!
//! Submission on check-and-send converts the draft once, saves the
//! finalized response to the claim store, and deletes the draft.

use axum::extract::{Extension, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use core_kernel::{parse_amount, ExternalId, YesNo};
use domain_claim::{users_role, Claim, Feature, PartyRole};
use domain_response::forms::{
    FormaliseRepaymentPlan, FreeMediation, PaidAmount, PaymentIntentionDraft, PaymentPlanForm,
    RejectionReason, SettleAdmitted,
};
use domain_response::payment::PaymentOption;
use domain_response::tasks::{outstanding_tasks, ready_to_submit};
use domain_response::{ClaimantResponseConverter, DraftClaimantResponse, ValidationResult};
use infra_clients::{Draft, NewDraft, CLAIMANT_RESPONSE_TYPE};

use crate::dto::forms::*;
use crate::dto::pages::{ConfirmationModel, PageModel, TaskListModel};
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::paths::{self, claimant_response as response_paths};
use crate::AppState;

/// Builds a 302 to the next wizard step
fn redirect(uri: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, uri.to_string())]).into_response()
}

fn next_step(template: &str, external_id: ExternalId) -> Response {
    redirect(&paths::evaluate(template, external_id))
}

/// Loads the claim, checks the caller is the claimant, and finds (or
/// starts) their response draft.
async fn response_context(
    state: &AppState,
    external_id: ExternalId,
    auth: &AuthenticatedUser,
) -> Result<(Claim, Draft<DraftClaimantResponse>), ApiError> {
    let claim = state
        .clients
        .claim_store
        .fetch_by_external_id(external_id, &auth.bearer_token)
        .await?;

    let role = users_role(&claim, &auth.user.id)?;
    if role != PartyRole::Claimant {
        return Err(ApiError::Forbidden(
            "Only the claimant can respond to the defendant's response".to_string(),
        ));
    }

    let draft = match state
        .clients
        .draft_store
        .find(CLAIMANT_RESPONSE_TYPE, &auth.bearer_token)
        .await?
    {
        Some(draft) => draft,
        None => {
            state
                .clients
                .draft_store
                .create(
                    &NewDraft::new(CLAIMANT_RESPONSE_TYPE, DraftClaimantResponse::default()),
                    &auth.bearer_token,
                )
                .await?
        }
    };

    Ok((claim, draft))
}

async fn save_draft(
    state: &AppState,
    draft: &Draft<DraftClaimantResponse>,
    auth: &AuthenticatedUser,
) -> Result<(), ApiError> {
    state
        .clients
        .draft_store
        .update(draft, &auth.bearer_token)
        .await?;
    Ok(())
}

// --- settle-admitted ---

pub async fn settle_admitted_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let model = PageModel::new("settle-admitted", external_id, draft.document.settle_admitted);
    Ok(Json(model).into_response())
}

pub async fn settle_admitted_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<SettleAdmittedBody>,
) -> Result<Response, ApiError> {
    let (_claim, mut draft) = response_context(&state, external_id, &auth).await?;

    let Some(admitted) = body.admitted else {
        let mut result = ValidationResult::ok();
        result.add_error("admitted", "Choose a response");
        let model = PageModel::with_errors(
            "settle-admitted",
            external_id,
            draft.document.settle_admitted,
            result,
        );
        return Ok(Json(model).into_response());
    };

    draft.document.settle_admitted = Some(SettleAdmitted { admitted });
    save_draft(&state, &draft, &auth).await?;

    let next = match admitted {
        YesNo::No => response_paths::PAID_AMOUNT,
        YesNo::Yes => response_paths::PAYMENT_OPTION,
    };
    Ok(next_step(next, external_id))
}

// --- paid-amount ---

pub async fn paid_amount_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let model = PageModel::new("paid-amount", external_id, draft.document.paid_amount);
    Ok(Json(model).into_response())
}

pub async fn paid_amount_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<PaidAmountBody>,
) -> Result<Response, ApiError> {
    let (_claim, mut draft) = response_context(&state, external_id, &auth).await?;

    let mut result = ValidationResult::ok();
    let amount = match body.amount.as_deref() {
        Some(raw) => match parse_amount(raw) {
            Ok(amount) => Some(amount),
            Err(_) => {
                result.add_error("amount", "Enter a valid amount paid");
                None
            }
        },
        None => None,
    };

    let form = PaidAmount {
        option: body.option,
        amount,
    };
    result.merge(form.validate_form());
    if body.option.is_none() {
        result.add_error("option", "Choose yes or no");
    }

    if !result.is_valid() {
        let model = PageModel::with_errors("paid-amount", external_id, Some(form), result);
        return Ok(Json(model).into_response());
    }

    draft.document.paid_amount = Some(form);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::FREE_MEDIATION, external_id))
}

// --- free-mediation ---

pub async fn free_mediation_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let model = PageModel::new("free-mediation", external_id, draft.document.free_mediation);
    Ok(Json(model).into_response())
}

pub async fn free_mediation_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<FreeMediationBody>,
) -> Result<Response, ApiError> {
    let (_claim, mut draft) = response_context(&state, external_id, &auth).await?;

    let Some(option) = body.option else {
        let mut result = ValidationResult::ok();
        result.add_error("option", "Choose yes or no");
        let model = PageModel::with_errors(
            "free-mediation",
            external_id,
            draft.document.free_mediation,
            result,
        );
        return Ok(Json(model).into_response());
    };

    draft.document.free_mediation = Some(FreeMediation { option });
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::REJECTION_REASON, external_id))
}

// --- rejection-reason ---

pub async fn rejection_reason_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let model = PageModel::new(
        "rejection-reason",
        external_id,
        draft.document.rejection_reason,
    );
    Ok(Json(model).into_response())
}

pub async fn rejection_reason_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<RejectionReasonBody>,
) -> Result<Response, ApiError> {
    let (_claim, mut draft) = response_context(&state, external_id, &auth).await?;

    let form = RejectionReason {
        text: body.text.unwrap_or_default(),
    };
    let result = form.validate_form();
    if !result.is_valid() {
        let model = PageModel::with_errors("rejection-reason", external_id, Some(form), result);
        return Ok(Json(model).into_response());
    }

    draft.document.rejection_reason = Some(form);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::CHECK_AND_SEND, external_id))
}

// --- payment-option ---

/// The alternative-terms pages only exist for claims issued under the
/// admissions feature.
fn require_admissions(claim: &Claim) -> Result<(), ApiError> {
    if claim.has_feature(Feature::Admissions.label()) {
        Ok(())
    } else {
        Err(ApiError::NotFound("Page not found".to_string()))
    }
}

pub async fn payment_option_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (claim, draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;
    let model = PageModel::new(
        "payment-option",
        external_id,
        draft.document.alternate_payment_method,
    );
    Ok(Json(model).into_response())
}

pub async fn payment_option_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<PaymentOptionBody>,
) -> Result<Response, ApiError> {
    let (claim, mut draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;

    let posted = body.option.unwrap_or_default();
    let Some(option) = PaymentOption::parse(&posted) else {
        let mut result = ValidationResult::ok();
        result.add_error("option", "Choose a payment option");
        let model = PageModel::with_errors(
            "payment-option",
            external_id,
            draft.document.alternate_payment_method,
            result,
        );
        return Ok(Json(model).into_response());
    };

    // Keep only the companion the chosen option uses; a stale date or plan
    // from a changed answer is fatal at conversion time.
    let existing = draft.document.alternate_payment_method.take();
    draft.document.alternate_payment_method = Some(PaymentIntentionDraft {
        payment_option: posted,
        payment_date: match option {
            PaymentOption::BySetDate => existing.as_ref().and_then(|i| i.payment_date),
            _ => None,
        },
        payment_plan: match option {
            PaymentOption::Instalments => existing.and_then(|i| i.payment_plan),
            _ => None,
        },
    });
    save_draft(&state, &draft, &auth).await?;

    let next = match option {
        PaymentOption::Immediately => response_paths::FORMALISE_REPAYMENT_PLAN,
        PaymentOption::BySetDate => response_paths::PAYMENT_DATE,
        PaymentOption::Instalments => response_paths::REPAYMENT_PLAN,
    };
    Ok(next_step(next, external_id))
}

// --- payment-date ---

pub async fn payment_date_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (claim, draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;
    let date = draft
        .document
        .alternate_payment_method
        .as_ref()
        .and_then(|intention| intention.payment_date);
    let model = PageModel::new("payment-date", external_id, date);
    Ok(Json(model).into_response())
}

pub async fn payment_date_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<PaymentDateBody>,
) -> Result<Response, ApiError> {
    let (claim, mut draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;

    // The option page comes first; landing here without it restarts there.
    let Some(intention) = draft.document.alternate_payment_method.as_mut() else {
        return Ok(next_step(response_paths::PAYMENT_OPTION, external_id));
    };

    let Some(date) = body.date else {
        let mut result = ValidationResult::ok();
        result.add_error("date", "Enter a payment date");
        let model =
            PageModel::with_errors("payment-date", external_id, intention.payment_date, result);
        return Ok(Json(model).into_response());
    };

    intention.payment_date = Some(date);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::FORMALISE_REPAYMENT_PLAN, external_id))
}

// --- repayment-plan ---

pub async fn repayment_plan_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (claim, draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;
    let plan = draft
        .document
        .alternate_payment_method
        .as_ref()
        .and_then(|intention| intention.payment_plan.clone());
    let model = PageModel::new("repayment-plan", external_id, plan);
    Ok(Json(model).into_response())
}

pub async fn repayment_plan_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<RepaymentPlanBody>,
) -> Result<Response, ApiError> {
    let (claim, mut draft) = response_context(&state, external_id, &auth).await?;
    require_admissions(&claim)?;

    let Some(intention) = draft.document.alternate_payment_method.as_mut() else {
        return Ok(next_step(response_paths::PAYMENT_OPTION, external_id));
    };

    let mut result = ValidationResult::ok();
    let instalment_amount = match body.instalment_amount.as_deref() {
        Some(raw) => match parse_amount(raw) {
            Ok(amount) => Some(amount),
            Err(_) => {
                result.add_error("instalmentAmount", "Enter a valid instalment amount");
                None
            }
        },
        None => None,
    };

    let plan = PaymentPlanForm {
        instalment_amount,
        first_payment_date: body.first_payment_date,
        payment_schedule: body.payment_schedule,
    };
    result.merge(plan.validate_form());

    if !result.is_valid() {
        let model = PageModel::with_errors("repayment-plan", external_id, Some(plan), result);
        return Ok(Json(model).into_response());
    }

    intention.payment_plan = Some(plan);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::FORMALISE_REPAYMENT_PLAN, external_id))
}

// --- formalise-repayment-plan ---

pub async fn formalise_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let model = PageModel::new(
        "formalise-repayment-plan",
        external_id,
        draft.document.formalise_repayment_plan,
    );
    Ok(Json(model).into_response())
}

pub async fn formalise_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<FormaliseRepaymentPlanBody>,
) -> Result<Response, ApiError> {
    let (_claim, mut draft) = response_context(&state, external_id, &auth).await?;

    let form = FormaliseRepaymentPlan {
        option: body.option.unwrap_or_default(),
    };
    let result = form.validate_form();
    if !result.is_valid() {
        let model =
            PageModel::with_errors("formalise-repayment-plan", external_id, Some(form), result);
        return Ok(Json(model).into_response());
    }

    draft.document.formalise_repayment_plan = Some(form);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(response_paths::CHECK_AND_SEND, external_id))
}

// --- check-and-send ---

pub async fn check_and_send_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;
    let outstanding = outstanding_tasks(&draft.document);
    let model = TaskListModel {
        external_id,
        ready_to_submit: outstanding.is_empty(),
        outstanding_tasks: outstanding,
    };
    Ok(Json(model).into_response())
}

pub async fn check_and_send_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let (_claim, draft) = response_context(&state, external_id, &auth).await?;

    if !ready_to_submit(&draft.document) {
        let outstanding = outstanding_tasks(&draft.document);
        let model = TaskListModel {
            external_id,
            ready_to_submit: false,
            outstanding_tasks: outstanding,
        };
        return Ok(Json(model).into_response());
    }

    let response = ClaimantResponseConverter::convert(&draft.document)?;
    state
        .clients
        .claim_store
        .save_claimant_response(external_id, &auth.user.id, &response, &auth.bearer_token)
        .await?;
    state
        .clients
        .draft_store
        .delete(draft.id, &auth.bearer_token)
        .await?;

    tracing::info!(
        %external_id,
        rejection = response.is_rejection(),
        "claimant response submitted"
    );
    Ok(next_step(response_paths::CONFIRMATION, external_id))
}

pub async fn confirmation_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    // The draft is gone after submission, so only the claim is loaded here.
    let claim = state
        .clients
        .claim_store
        .fetch_by_external_id(external_id, &auth.bearer_token)
        .await?;
    let model = ConfirmationModel {
        external_id,
        submitter_name: claim.claim_data.claimant.name,
    };
    Ok(Json(model).into_response())
}
