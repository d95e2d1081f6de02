//! HTTP Layer
//!
//! The citizen-facing surface of the claimant-response journey, served with
//! Axum. Pages are JSON page models the frontend renders; each wizard step
//! is a GET (current draft values) and a POST (validate, mutate the draft,
//! redirect to the next step).
//!
//! # Architecture
//!
//! - **Handlers**: one module per journey (claimant response, directions
//!   questionnaire), plus claim features and health
//! - **Middleware**: bearer-token authentication against the identity
//!   service, request audit logging
//! - **DTOs**: posted form bodies and rendered page models
//! - **Error Handling**: expected failures keep their status; everything
//!   else renders the generic error page

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod paths;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use infra_clients::Clients;

use crate::config::WebConfig;
use crate::handlers::{claim, claimant_response, directions_questionnaire, health};
use crate::middleware::{auth_middleware, request_log_middleware};
use crate::paths::{claimant_response as response_paths, directions_questionnaire as dq_paths};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Clients,
    pub config: WebConfig,
}

/// Creates the main router
pub fn create_router(clients: Clients, config: WebConfig) -> Router {
    let state = AppState { clients, config };

    // Public routes (no auth required)
    let public_routes = Router::new().route(paths::HEALTH, get(health::health_check));

    let response_routes = Router::new()
        .route(
            response_paths::SETTLE_ADMITTED,
            get(claimant_response::settle_admitted_page)
                .post(claimant_response::settle_admitted_submit),
        )
        .route(
            response_paths::PAID_AMOUNT,
            get(claimant_response::paid_amount_page).post(claimant_response::paid_amount_submit),
        )
        .route(
            response_paths::FREE_MEDIATION,
            get(claimant_response::free_mediation_page)
                .post(claimant_response::free_mediation_submit),
        )
        .route(
            response_paths::REJECTION_REASON,
            get(claimant_response::rejection_reason_page)
                .post(claimant_response::rejection_reason_submit),
        )
        .route(
            response_paths::PAYMENT_OPTION,
            get(claimant_response::payment_option_page)
                .post(claimant_response::payment_option_submit),
        )
        .route(
            response_paths::PAYMENT_DATE,
            get(claimant_response::payment_date_page)
                .post(claimant_response::payment_date_submit),
        )
        .route(
            response_paths::REPAYMENT_PLAN,
            get(claimant_response::repayment_plan_page)
                .post(claimant_response::repayment_plan_submit),
        )
        .route(
            response_paths::FORMALISE_REPAYMENT_PLAN,
            get(claimant_response::formalise_page).post(claimant_response::formalise_submit),
        )
        .route(
            response_paths::CHECK_AND_SEND,
            get(claimant_response::check_and_send_page)
                .post(claimant_response::check_and_send_submit),
        )
        .route(
            response_paths::CONFIRMATION,
            get(claimant_response::confirmation_page),
        );

    let dq_routes = Router::new()
        .route(
            dq_paths::EXPERT,
            get(directions_questionnaire::expert_page)
                .post(directions_questionnaire::expert_submit),
        )
        .route(
            dq_paths::EXPERT_REPORTS,
            get(directions_questionnaire::expert_reports_page)
                .post(directions_questionnaire::expert_reports_submit),
        )
        .route(
            dq_paths::SELF_WITNESS,
            get(directions_questionnaire::self_witness_page)
                .post(directions_questionnaire::self_witness_submit),
        )
        .route(
            dq_paths::SUPPORT_REQUIRED,
            get(directions_questionnaire::support_required_page)
                .post(directions_questionnaire::support_required_submit),
        );

    // Protected routes
    let protected_routes = Router::new()
        .merge(response_routes)
        .merge(dq_routes)
        .route(paths::CLAIM_FEATURES, get(claim::claim_features))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            request_log_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
