//! HTTP middleware for request gating and observability.

pub mod auth;
pub mod content_type;
pub mod tracing;
