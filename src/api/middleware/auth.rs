//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authorizes sensitive routes against the configured shared secret.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <secret>
/// ```
///
/// One normalization rule everywhere: the presented token is trimmed and
/// compared to the configured secret (itself trimmed at load). Applied
/// only to list-all and delete; create and update stay open, a known
/// weakness of the public contract that is kept deliberately.
///
/// # Errors
///
/// Returns `403 Forbidden` with the fixed denial payload if the header
/// is missing, not a Bearer credential, or the token does not match.
/// No lockout, no rate limiting; denials only show up in the logs.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::warn!("Rejected request without a bearer credential");
            AppError::forbidden()
        })?;

    if token.trim() != state.api_key.as_ref() {
        tracing::warn!("Rejected request with an invalid API key");
        return Err(AppError::forbidden());
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
