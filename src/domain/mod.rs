//! Core business entities, shape rules, and repository traits.

pub mod entities;
pub mod repositories;
pub mod validation;
