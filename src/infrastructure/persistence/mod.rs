//! Persistence implementations of the repository traits.

pub mod mongo_booking_repository;

pub use mongo_booking_repository::MongoBookingRepository;
