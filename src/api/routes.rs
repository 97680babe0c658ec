//! Booking route configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::api::handlers::{
    create_booking_handler, delete_booking_handler, list_bookings_handler, patch_booking_handler,
    replace_booking_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;

/// The five booking routes, mounted under `/bookings`.
///
/// # Endpoints
///
/// - `GET    /`     - List all bookings (Bearer key required)
/// - `POST   /`     - Create a booking
/// - `PUT    /{id}` - Replace a booking
/// - `PATCH  /{id}` - Partially update a booking
/// - `DELETE /{id}` - Delete a booking (Bearer key required)
///
/// Only the read-all and delete routes sit behind the auth gate.
pub fn booking_routes(state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/", get(list_bookings_handler))
        .route("/{id}", delete(delete_booking_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let open = Router::new()
        .route("/", post(create_booking_handler))
        .route(
            "/{id}",
            put(replace_booking_handler).patch(patch_booking_handler),
        );

    guarded.merge(open)
}
