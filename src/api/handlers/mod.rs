//! HTTP request handlers for API endpoints.

pub mod bookings;

pub use bookings::{
    create_booking_handler, delete_booking_handler, list_bookings_handler, patch_booking_handler,
    replace_booking_handler,
};
