//! # Travel Bookings
//!
//! A minimal travel booking API built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Booking entities, shape rules, and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration and the
//!   persistence-boundary validation pass
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB-backed record store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware gates
//!
//! ## Features
//!
//! - Create, list, update, and delete booking documents
//! - Ordered request-shape validation with per-rule error messages
//! - Bearer-key gate on the list and delete routes
//! - Content-Type gate on every mutating request
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SECRET_KEY="change-me"
//! export MONGODB_URI="mongodb://localhost:27017/travelAgency"  # Optional
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BookingService;
    pub use crate::domain::entities::{Booking, BookingPatch, NewBooking};
    pub use crate::domain::repositories::BookingRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
