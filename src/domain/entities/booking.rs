//! Booking entity: a single travel booking document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::{EMAIL_PATTERN, PHONE_PATTERN};
use crate::utils::datetime;

/// A travel booking record.
///
/// The serde representation doubles as the wire format and the stored
/// document shape, so a record fetched via list-all is byte-identical to
/// the one returned at creation. Field names are camelCase on the wire.
///
/// The shape rules declared here are the single source of truth for the
/// persistence boundary; see [`crate::domain::validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Assigned at creation, immutable thereafter. Stored as `_id`.
    pub id: Uuid,
    #[validate(nested)]
    pub user: UserDetails,
    pub travel_dates: TravelDates,
    #[validate(length(min = 1, message = "itinerary must contain at least one entry"))]
    #[validate(nested)]
    pub itinerary: Vec<ItineraryItem>,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Contact details of the booking user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDetails {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(regex(
        path = "*EMAIL_PATTERN",
        message = "email does not match the required local@domain shape"
    ))]
    pub email: String,
    #[validate(regex(
        path = "*PHONE_PATTERN",
        message = "phone does not match the required phone number shape"
    ))]
    pub phone: String,
}

/// Start and end of the trip. No start <= end ordering is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelDates {
    #[serde(with = "datetime")]
    pub start: DateTime<Utc>,
    #[serde(with = "datetime")]
    pub end: DateTime<Utc>,
}

/// One planned day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ItineraryItem {
    pub day: i32,
    #[validate(length(min = 1, message = "activity is required"))]
    pub activity: String,
}

/// Input for creating a booking, after the route-level presence checks.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user: UserDetails,
    pub travel_dates: TravelDates,
    pub itinerary: Vec<ItineraryItem>,
    pub destination: String,
    pub notes: Option<String>,
}

/// Partial update for an existing booking.
///
/// `None` fields are left unchanged; provided fields replace the stored
/// value wholesale (sub-documents included). Full and partial updates use
/// the same merge operation.
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub user: Option<UserDetails>,
    pub travel_dates: Option<TravelDates>,
    pub itinerary: Option<Vec<ItineraryItem>>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

impl BookingPatch {
    /// Merges the provided fields into `booking`. The identifier and
    /// `created_at` are never touched.
    pub fn apply(self, booking: &mut Booking) {
        if let Some(user) = self.user {
            booking.user = user;
        }
        if let Some(travel_dates) = self.travel_dates {
            booking.travel_dates = travel_dates;
        }
        if let Some(itinerary) = self.itinerary {
            booking.itinerary = itinerary;
        }
        if let Some(destination) = self.destination {
            booking.destination = destination;
        }
        if let Some(notes) = self.notes {
            booking.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            user: UserDetails {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                phone: "123".to_string(),
            },
            travel_dates: TravelDates {
                start: now,
                end: now,
            },
            itinerary: vec![ItineraryItem {
                day: 1,
                activity: "Arrive".to_string(),
            }],
            destination: "Paris".to_string(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut booking = sample_booking();
        let original_user = booking.user.clone();

        let patch = BookingPatch {
            destination: Some("Rome".to_string()),
            ..Default::default()
        };
        patch.apply(&mut booking);

        assert_eq!(booking.destination, "Rome");
        assert_eq!(booking.user, original_user);
        assert_eq!(booking.itinerary.len(), 1);
    }

    #[test]
    fn test_patch_replaces_subdocuments_wholesale() {
        let mut booking = sample_booking();

        let patch = BookingPatch {
            user: Some(UserDetails {
                name: "B".to_string(),
                email: "b@c.org".to_string(),
                phone: "+49 30 1234".to_string(),
            }),
            ..Default::default()
        };
        patch.apply(&mut booking);

        assert_eq!(booking.user.name, "B");
        assert_eq!(booking.user.email, "b@c.org");
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut booking = sample_booking();
        let before = booking.clone();

        let patch = BookingPatch::default();
        patch.apply(&mut booking);

        assert_eq!(booking, before);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let booking = sample_booking();
        let json = serde_json::to_value(&booking).unwrap();

        assert!(json.get("travelDates").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("travel_dates").is_none());
    }
}
