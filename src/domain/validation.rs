//! Shared schema shape rules for booking documents.
//!
//! Required-ness is encoded in the entity types (no `Option` fields) and
//! the format rules live on the `Validate` derives in
//! [`crate::domain::entities`]. This module holds the compiled patterns
//! and flattens validation failures into one human-readable reason.
//!
//! The same rules are exercised for every insert and every replace, so
//! the route pre-check and the persistence boundary cannot drift apart.

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::Booking;

/// Email must have a `local@domain` shape with a dotted domain.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Permissive international phone pattern: optional `+`, optional area
/// code in parentheses, then digits with common separators.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$").unwrap());

/// Validates a booking against the schema shape rules.
///
/// Returns a single message listing every violated rule with its field
/// path, e.g. `Booking validation failed: user.email: email does not
/// match the required local@domain shape`.
pub fn validate_booking(booking: &Booking) -> Result<(), String> {
    match booking.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut reasons = Vec::new();
            collect("", &errors, &mut reasons);
            reasons.sort();
            Err(format!("Booking validation failed: {}", reasons.join("; ")))
        }
    }
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let reason = error
                        .message
                        .clone()
                        .unwrap_or_else(|| error.code.clone());
                    out.push(format!("{path}: {reason}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
