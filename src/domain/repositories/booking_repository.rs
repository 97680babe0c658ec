//! Repository trait for booking document access.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Booking;
use crate::error::StoreError;

/// Repository interface over the booking record store.
///
/// Mirrors the four operations the document store exposes: find-all,
/// insert, find-by-id-and-replace, find-by-id-and-delete (plus a plain
/// find-by-id used to load the document an update merges into).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoBookingRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a new booking document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on driver errors.
    async fn insert(&self, booking: Booking) -> Result<Booking, StoreError>;

    /// Returns all booking documents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on driver errors.
    async fn find_all(&self) -> Result<Vec<Booking>, StoreError>;

    /// Finds a booking by its identifier.
    ///
    /// Returns `Ok(None)` if no document matches.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Booking>, StoreError>;

    /// Replaces the document with the given identifier in place.
    ///
    /// Returns `Ok(None)` if no document matches; the identifier itself is
    /// never changed.
    async fn replace(&self, id: &Uuid, booking: Booking) -> Result<Option<Booking>, StoreError>;

    /// Deletes a booking by identifier, returning the removed document.
    ///
    /// Returns `Ok(None)` if no document matches.
    async fn delete(&self, id: &Uuid) -> Result<Option<Booking>, StoreError>;
}
