//! Domain entities.

pub mod booking;

pub use booking::{Booking, BookingPatch, ItineraryItem, NewBooking, TravelDates, UserDetails};
