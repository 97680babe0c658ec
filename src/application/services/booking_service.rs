//! Booking orchestration and the persistence-boundary validation pass.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingPatch, NewBooking};
use crate::domain::repositories::BookingRepository;
use crate::domain::validation::validate_booking;
use crate::error::StoreError;

/// Service for creating, listing, updating, and deleting bookings.
///
/// Every document crossing into the store (freshly created or merged
/// from an update) passes the shared shape rules first, so an invalid
/// document never reaches the driver. Shape violations surface as
/// [`StoreError::Validation`].
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// Returns all bookings.
    pub async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        self.repository.find_all().await
    }

    /// Creates a booking with an assigned identifier and timestamps.
    ///
    /// `notes` defaults to the empty string when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the document fails the shape
    /// rules; nothing is persisted in that case.
    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, StoreError> {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            user: new_booking.user,
            travel_dates: new_booking.travel_dates,
            itinerary: new_booking.itinerary,
            destination: new_booking.destination,
            notes: new_booking.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        validate_booking(&booking).map_err(StoreError::Validation)?;

        self.repository.insert(booking).await
    }

    /// Merges `patch` into the stored booking and replaces it in place.
    ///
    /// Full and partial updates share this operation. `updated_at` is
    /// refreshed; the identifier and `created_at` are immutable.
    ///
    /// Returns `Ok(None)` when `id` is unknown or not a valid identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the merged document fails
    /// the shape rules; the stored document is left unchanged.
    pub async fn update(
        &self,
        id: &str,
        patch: BookingPatch,
    ) -> Result<Option<Booking>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let Some(mut booking) = self.repository.find_by_id(&id).await? else {
            return Ok(None);
        };

        patch.apply(&mut booking);
        booking.updated_at = Utc::now();

        validate_booking(&booking).map_err(StoreError::Validation)?;

        self.repository.replace(&id, booking).await
    }

    /// Deletes a booking, returning the removed document.
    ///
    /// Returns `Ok(None)` when `id` is unknown or not a valid identifier.
    pub async fn delete(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        self.repository.delete(&id).await
    }
}
