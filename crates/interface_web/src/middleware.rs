//! Web middleware

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use infra_clients::User;

use crate::AppState;

/// The signed-in citizen, resolved from the bearer token once per request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Forwarded on every collaborator call made for this request
    pub bearer_token: String,
}

/// Authentication middleware
///
/// Resolves the bearer token against the identity service and makes the
/// user available to handlers as a request extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => header[7..].to_string(),
        _ => {
            warn!("Missing or invalid Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    match state.clients.idam.retrieve_user(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(AuthenticatedUser {
                user,
                bearer_token: token,
            });
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!("Token rejected by identity service: {:?}", e);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Request logging middleware
///
/// Logs every wizard request with the resolved user for audit
pub async fn request_log_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_id = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|auth| auth.user.id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "Wizard request"
    );

    response
}
