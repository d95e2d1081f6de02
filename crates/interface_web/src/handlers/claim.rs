//! Claim feature handler

use axum::extract::{Extension, Path, State};
use axum::Json;

use core_kernel::ExternalId;
use domain_claim::FeaturesBuilder;

use crate::dto::pages::ClaimFeaturesModel;
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::AppState;

/// Returns the feature labels the claim qualifies for today.
///
/// The pilot toggles are re-queried rather than read off the stored claim,
/// so the frontend can steer a claim issued before a pilot into it.
pub async fn claim_features(
    State(state): State<AppState>,
    Path(external_id): Path<ExternalId>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ClaimFeaturesModel>, ApiError> {
    let claim = state
        .clients
        .claim_store
        .fetch_by_external_id(external_id, &auth.bearer_token)
        .await?;

    let features = FeaturesBuilder::new(state.config.pilot_limit)
        .features(claim.total_principal(), &state.clients.feature_toggles)
        .await?;

    Ok(Json(ClaimFeaturesModel {
        external_id,
        features,
    }))
}
