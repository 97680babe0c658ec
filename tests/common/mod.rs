#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use travel_bookings::application::services::BookingService;
use travel_bookings::domain::entities::Booking;
use travel_bookings::domain::repositories::BookingRepository;
use travel_bookings::error::StoreError;
use travel_bookings::routes::app_router;
use travel_bookings::state::AppState;

pub const API_KEY: &str = "test-secret-key";

/// In-memory stand-in for the MongoDB collection.
///
/// Counts `find_all` calls so tests can assert that a rejected request
/// never reached the store.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
    find_all_calls: AtomicUsize,
}

impl InMemoryBookingRepository {
    pub fn len(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_all_count(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &Uuid) -> Option<Booking> {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == *id)
            .cloned()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: Booking) -> Result<Booking, StoreError> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Booking>, StoreError> {
        Ok(self.get(id))
    }

    async fn replace(&self, id: &Uuid, booking: Booking) -> Result<Option<Booking>, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.iter_mut().find(|b| b.id == *id) {
            Some(slot) => {
                *slot = booking.clone();
                Ok(Some(booking))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<Booking>, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        let position = bookings.iter().position(|b| b.id == *id);
        Ok(position.map(|index| bookings.remove(index)))
    }
}

/// Builds a test server over the full router (middleware included) with
/// an in-memory store.
pub fn test_server() -> (TestServer, Arc<InMemoryBookingRepository>) {
    let repository = Arc::new(InMemoryBookingRepository::default());
    let service = Arc::new(BookingService::new(repository.clone()));
    let state = AppState::new(service, API_KEY);

    let server = TestServer::new(app_router(state)).unwrap();
    (server, repository)
}

pub fn bearer() -> String {
    format!("Bearer {API_KEY}")
}

/// The reference payload: required fields present, one itinerary entry.
pub fn sample_payload() -> serde_json::Value {
    json!({
        "user": {"name": "A", "email": "a@b.com", "phone": "123"},
        "travelDates": {"start": "2024-01-01", "end": "2024-01-05"},
        "itinerary": [{"day": 1, "activity": "Arrive"}],
        "destination": "Paris"
    })
}
