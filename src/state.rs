use std::sync::Arc;

use crate::application::services::BookingService;

/// Shared application state injected into handlers and middleware.
///
/// Built once at startup from [`crate::config::Config`]; nothing is read
/// from the environment per request.
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingService>,
    /// Shared secret compared against the presented bearer token.
    /// Trimmed at configuration load.
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(bookings: Arc<BookingService>, api_key: &str) -> Self {
        Self {
            bookings,
            api_key: Arc::from(api_key),
        }
    }
}
