//! Small shared helpers.

pub mod datetime;
