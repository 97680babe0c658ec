//! Infrastructure layer: database and external integrations.

pub mod persistence;
