//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/bookings/*` - booking CRUD (Bearer key on list and delete)
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - structured request/response logging
//! - **Content-Type gate** - mutating requests must declare a content type
//! - **Authentication** - Bearer key, on the guarded routes only

use axum::{Router, middleware};

use crate::api;
use crate::api::middleware::{content_type, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The content-type gate wraps every route and therefore runs before the
/// per-route auth gate, matching the request state machine:
/// content-type-checked, then auth-checked, then handled.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/bookings", api::routes::booking_routes(&state))
        .with_state(state)
        .layer(middleware::from_fn(content_type::layer))
        .layer(tracing::layer())
}
