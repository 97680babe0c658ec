//! Handlers for the five booking endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::booking::{
    BookingListResponse, BookingResponse, CreateBookingRequest, DeleteBookingResponse,
    UpdateBookingRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all bookings.
///
/// # Endpoint
///
/// `GET /bookings` (auth required)
///
/// The element count is returned under the `lenght` key. Misspelled,
/// kept for compatibility with existing clients.
pub async fn list_bookings_handler(
    State(state): State<AppState>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = state
        .bookings
        .list()
        .await
        .map_err(|e| AppError::internal("Error fetching bookings", e))?;

    let lenght = bookings.len();

    Ok(Json(BookingListResponse {
        success: true,
        data: bookings,
        lenght,
    }))
}

/// Creates a new booking.
///
/// # Endpoint
///
/// `POST /bookings` (no auth)
///
/// Presence checks run first and answer 400 with a rule-specific message.
/// A document that passes them can still violate the shape rules at the
/// persistence boundary (email/phone format); that surfaces as 500 with
/// the rule text echoed.
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let new_booking = payload.into_new_booking()?;

    let booking = state
        .bookings
        .create(new_booking)
        .await
        .map_err(|e| AppError::internal("Error saving booking", e))?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            data: booking,
        }),
    ))
}

/// Replaces a booking by identifier.
///
/// # Endpoint
///
/// `PUT /bookings/{id}` (no auth)
///
/// Currently identical to PATCH: provided fields are merged into the
/// stored record and the result re-validated. Whether PUT should instead
/// replace the whole document is an open question; see DESIGN.md.
pub async fn replace_booking_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    apply_update(&state, &id, payload, "Error updating booking").await
}

/// Partially updates a booking by identifier.
///
/// # Endpoint
///
/// `PATCH /bookings/{id}` (no auth)
pub async fn patch_booking_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    apply_update(&state, &id, payload, "Error partially updating booking").await
}

async fn apply_update(
    state: &AppState,
    id: &str,
    payload: UpdateBookingRequest,
    failure_message: &str,
) -> Result<Json<BookingResponse>, AppError> {
    let updated = state
        .bookings
        .update(id, payload.into_patch())
        .await
        .map_err(|e| AppError::internal(failure_message, e))?;

    let Some(booking) = updated else {
        return Err(AppError::not_found("Booking not found."));
    };

    Ok(Json(BookingResponse {
        success: true,
        data: booking,
    }))
}

/// Deletes a booking by identifier.
///
/// # Endpoint
///
/// `DELETE /bookings/{id}` (auth required)
pub async fn delete_booking_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteBookingResponse>, AppError> {
    let deleted = state
        .bookings
        .delete(&id)
        .await
        .map_err(|e| AppError::internal("Error deleting booking", e))?;

    let Some(booking) = deleted else {
        return Err(AppError::not_found("Booking not found."));
    };

    Ok(Json(DeleteBookingResponse {
        success: true,
        message: "Booking deleted successfully.",
        data: booking,
    }))
}
