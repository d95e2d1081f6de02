//! Directions-questionnaire handlers
//!
//! Hearing-requirements pages for claims issued under the
//! directions-questionnaire pilot. Either party fills these in, so the
//! context check only requires a role in the claim, not a specific side.

use axum::extract::{Extension, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use core_kernel::{ExternalId, YesNo};
use domain_claim::{users_role, Feature};
use domain_response::dq::{DirectionsQuestionnaireDraft, ExpertReportRow, SupportRequired};
use domain_response::ValidationResult;
use infra_clients::{Draft, NewDraft, DIRECTIONS_QUESTIONNAIRE_TYPE};

use crate::dto::forms::*;
use crate::dto::pages::PageModel;
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::paths::{self, directions_questionnaire as dq_paths};
use crate::AppState;

fn next_step(template: &str, external_id: ExternalId) -> Response {
    let uri = paths::evaluate(template, external_id);
    (StatusCode::FOUND, [(header::LOCATION, uri)]).into_response()
}

/// Loads the claim, checks the caller has a role in it and the claim sits
/// in the directions-questionnaire pilot, and finds (or starts) the draft.
async fn dq_context(
    state: &AppState,
    external_id: ExternalId,
    auth: &AuthenticatedUser,
) -> Result<Draft<DirectionsQuestionnaireDraft>, ApiError> {
    let claim = state
        .clients
        .claim_store
        .fetch_by_external_id(external_id, &auth.bearer_token)
        .await?;

    users_role(&claim, &auth.user.id)?;

    if !claim.has_feature(Feature::DirectionsQuestionnaire.label()) {
        return Err(ApiError::NotFound("Page not found".to_string()));
    }

    let draft = match state
        .clients
        .draft_store
        .find(DIRECTIONS_QUESTIONNAIRE_TYPE, &auth.bearer_token)
        .await?
    {
        Some(draft) => draft,
        None => {
            state
                .clients
                .draft_store
                .create(
                    &NewDraft::new(
                        DIRECTIONS_QUESTIONNAIRE_TYPE,
                        DirectionsQuestionnaireDraft::default(),
                    ),
                    &auth.bearer_token,
                )
                .await?
        }
    };

    Ok(draft)
}

async fn save_draft(
    state: &AppState,
    draft: &Draft<DirectionsQuestionnaireDraft>,
    auth: &AuthenticatedUser,
) -> Result<(), ApiError> {
    state
        .clients
        .draft_store
        .update(draft, &auth.bearer_token)
        .await?;
    Ok(())
}

// --- expert ---

pub async fn expert_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let draft = dq_context(&state, external_id, &auth).await?;
    let model = PageModel::new("expert", external_id, draft.document.expert_required);
    Ok(Json(model).into_response())
}

pub async fn expert_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<ExpertBody>,
) -> Result<Response, ApiError> {
    let mut draft = dq_context(&state, external_id, &auth).await?;

    let Some(expert_required) = body.expert_required else {
        let mut result = ValidationResult::ok();
        result.add_error("expertRequired", "Choose yes or no");
        let model = PageModel::with_errors(
            "expert",
            external_id,
            draft.document.expert_required,
            result,
        );
        return Ok(Json(model).into_response());
    };

    draft.document.expert_required = Some(expert_required);
    save_draft(&state, &draft, &auth).await?;

    let next = match expert_required {
        YesNo::Yes => dq_paths::EXPERT_REPORTS,
        YesNo::No => dq_paths::SELF_WITNESS,
    };
    Ok(next_step(next, external_id))
}

// --- expert-reports ---

pub async fn expert_reports_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let draft = dq_context(&state, external_id, &auth).await?;
    let model = PageModel::new(
        "expert-reports",
        external_id,
        draft.document.expert_reports,
    );
    Ok(Json(model).into_response())
}

/// Adds one report to the list. The page loops so a party can declare
/// several reports before moving on.
pub async fn expert_reports_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<ExpertReportBody>,
) -> Result<Response, ApiError> {
    let mut draft = dq_context(&state, external_id, &auth).await?;

    let mut result = ValidationResult::ok();
    if body
        .expert_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .is_empty()
    {
        result.add_error("expertName", "Enter the expert's name");
    }
    if body.report_date.is_none() {
        result.add_error("reportDate", "Enter the report date");
    }
    if !result.is_valid() {
        let model = PageModel::with_errors(
            "expert-reports",
            external_id,
            draft.document.expert_reports,
            result,
        );
        return Ok(Json(model).into_response());
    }

    let row = ExpertReportRow {
        expert_name: body.expert_name.unwrap_or_default().trim().to_string(),
        report_date: body.report_date.unwrap_or_default(),
    };
    draft
        .document
        .expert_reports
        .get_or_insert_with(Vec::new)
        .push(row);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(dq_paths::SELF_WITNESS, external_id))
}

// --- self-witness ---

pub async fn self_witness_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let draft = dq_context(&state, external_id, &auth).await?;
    let model = PageModel::new("self-witness", external_id, draft.document.self_witness);
    Ok(Json(model).into_response())
}

pub async fn self_witness_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<SelfWitnessBody>,
) -> Result<Response, ApiError> {
    let mut draft = dq_context(&state, external_id, &auth).await?;

    let Some(option) = body.option else {
        let mut result = ValidationResult::ok();
        result.add_error("option", "Choose yes or no");
        let model = PageModel::with_errors(
            "self-witness",
            external_id,
            draft.document.self_witness,
            result,
        );
        return Ok(Json(model).into_response());
    };

    draft.document.self_witness = Some(option);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(dq_paths::SUPPORT_REQUIRED, external_id))
}

// --- support-required ---

pub async fn support_required_page(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Response, ApiError> {
    let draft = dq_context(&state, external_id, &auth).await?;
    let model = PageModel::new(
        "support-required",
        external_id,
        draft.document.support_required,
    );
    Ok(Json(model).into_response())
}

pub async fn support_required_submit(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
    Form(body): Form<SupportRequiredBody>,
) -> Result<Response, ApiError> {
    let mut draft = dq_context(&state, external_id, &auth).await?;

    let form = SupportRequired {
        language_interpreter: body.language_interpreter,
        sign_language_interpreter: body.sign_language_interpreter,
        other_support: body.other_support,
    };
    let result = form.validate_form();
    if !result.is_valid() {
        let model = PageModel::with_errors("support-required", external_id, Some(form), result);
        return Ok(Json(model).into_response());
    }

    draft.document.support_required = Some(form);
    save_draft(&state, &draft, &auth).await?;
    Ok(next_step(
        crate::paths::claimant_response::CHECK_AND_SEND,
        external_id,
    ))
}
