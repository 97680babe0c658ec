//! Content-Type gate for mutating requests.

use axum::{
    extract::Request,
    http::{Method, header},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Rejects non-GET requests that do not declare a content type.
///
/// Presence only; the header value is not inspected. Runs before the
/// auth gate, so a mutating request missing both headers gets the 400.
///
/// # Errors
///
/// Returns `400 Bad Request` with a fixed message when the header is
/// absent on a non-GET request.
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() != Method::GET && !req.headers().contains_key(header::CONTENT_TYPE) {
        return Err(AppError::bad_request(
            "Missing Content-Type. Please use application/json.",
        ));
    }

    Ok(next.run(req).await)
}
