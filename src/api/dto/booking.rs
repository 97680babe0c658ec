//! DTOs for the booking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Booking, BookingPatch, ItineraryItem, NewBooking, TravelDates, UserDetails,
};
use crate::error::AppError;
use crate::utils::datetime;

/// Request body for `POST /bookings`.
///
/// Every field is optional at the serde level so that the handler can run
/// the ordered presence checks itself and answer with the message for the
/// first rule that fails.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user: Option<UserInput>,
    pub travel_dates: Option<TravelDatesInput>,
    pub itinerary: Option<Vec<ItineraryItem>>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Travel dates arrive as raw strings so that a blank value flows
/// through the presence checks (blank counts as missing) instead of
/// failing JSON extraction; parsing happens after the ordered rules.
#[derive(Debug, Deserialize)]
pub struct TravelDatesInput {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl CreateBookingRequest {
    /// Runs the presence checks in order, first failure wins.
    ///
    /// Blank strings count as missing. Format rules (email/phone
    /// patterns) are deliberately not checked here; they belong to the
    /// persistence boundary.
    pub fn into_new_booking(self) -> Result<NewBooking, AppError> {
        let user = self.user.and_then(|user| {
            let name = non_blank(user.name)?;
            let email = non_blank(user.email)?;
            let phone = non_blank(user.phone)?;
            Some(UserDetails { name, email, phone })
        });
        let Some(user) = user else {
            return Err(AppError::bad_request(
                "User details (name, email, phone) are required.",
            ));
        };

        let travel_dates = self
            .travel_dates
            .and_then(|dates| Some((non_blank(dates.start)?, non_blank(dates.end)?)));
        let Some((start, end)) = travel_dates else {
            return Err(AppError::bad_request(
                "Travel dates (start and end) are required.",
            ));
        };
        let travel_dates = TravelDates {
            start: parse_travel_date("travelDates.start", &start)?,
            end: parse_travel_date("travelDates.end", &end)?,
        };

        let Some(itinerary) = self.itinerary.filter(|items| !items.is_empty()) else {
            return Err(AppError::bad_request(
                "Itinerary must be a non-empty array.",
            ));
        };

        let Some(destination) = non_blank(self.destination) else {
            return Err(AppError::bad_request("Destination is required."));
        };

        Ok(NewBooking {
            user,
            travel_dates,
            itinerary,
            destination,
            notes: self.notes,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Parses a present, non-blank travel date. An unparseable value is a
/// malformed body, answered with a human-readable reason.
fn parse_travel_date(field: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    datetime::parse_flexible(raw).ok_or_else(|| {
        AppError::bad_request(format!(
            "{field} must be a date (YYYY-MM-DD) or an RFC 3339 timestamp."
        ))
    })
}

/// Request body for `PUT /bookings/{id}` and `PATCH /bookings/{id}`.
///
/// Provided fields replace the stored value wholesale; omitted fields
/// are left unchanged. Both methods accept the same body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub user: Option<UserDetails>,
    pub travel_dates: Option<TravelDates>,
    pub itinerary: Option<Vec<ItineraryItem>>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

impl UpdateBookingRequest {
    pub fn into_patch(self) -> BookingPatch {
        BookingPatch {
            user: self.user,
            travel_dates: self.travel_dates,
            itinerary: self.itinerary,
            destination: self.destination,
            notes: self.notes,
        }
    }
}

/// Response for `GET /bookings`.
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub data: Vec<Booking>,
    /// Element count. Misspelled key kept for compatibility with
    /// existing clients.
    pub lenght: usize,
}

/// Response wrapping a single booking (create and update).
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub data: Booking,
}

/// Response for `DELETE /bookings/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteBookingResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Booking,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    fn full_request() -> serde_json::Value {
        json!({
            "user": {"name": "A", "email": "a@b.com", "phone": "123"},
            "travelDates": {"start": "2024-01-01", "end": "2024-01-05"},
            "itinerary": [{"day": 1, "activity": "Arrive"}],
            "destination": "Paris"
        })
    }

    fn message_for(body: serde_json::Value) -> String {
        let request: CreateBookingRequest = from_value(body).unwrap();
        match request.into_new_booking() {
            Err(AppError::BadRequest { message }) => message,
            other => panic!("expected a bad-request error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_passes_presence_checks() {
        let request: CreateBookingRequest = from_value(full_request()).unwrap();
        let new_booking = request.into_new_booking().unwrap();

        assert_eq!(new_booking.destination, "Paris");
        assert_eq!(new_booking.itinerary.len(), 1);
        assert!(new_booking.notes.is_none());
    }

    #[test]
    fn test_missing_user_block() {
        let mut body = full_request();
        body.as_object_mut().unwrap().remove("user");
        assert_eq!(
            message_for(body),
            "User details (name, email, phone) are required."
        );
    }

    #[test]
    fn test_blank_user_field_counts_as_missing() {
        let mut body = full_request();
        body["user"]["phone"] = json!("");
        assert_eq!(
            message_for(body),
            "User details (name, email, phone) are required."
        );
    }

    #[test]
    fn test_missing_travel_date() {
        let mut body = full_request();
        body["travelDates"].as_object_mut().unwrap().remove("end");
        assert_eq!(
            message_for(body),
            "Travel dates (start and end) are required."
        );
    }

    #[test]
    fn test_blank_travel_date_counts_as_missing() {
        let mut body = full_request();
        body["travelDates"]["start"] = json!("");
        assert_eq!(
            message_for(body),
            "Travel dates (start and end) are required."
        );
    }

    #[test]
    fn test_unparseable_travel_date_is_a_bad_request() {
        let mut body = full_request();
        body["travelDates"]["end"] = json!("next tuesday");
        assert_eq!(
            message_for(body),
            "travelDates.end must be a date (YYYY-MM-DD) or an RFC 3339 timestamp."
        );
    }

    #[test]
    fn test_travel_dates_parsed_after_presence_checks() {
        let body = full_request();
        let request: CreateBookingRequest = from_value(body).unwrap();
        let new_booking = request.into_new_booking().unwrap();

        assert_eq!(
            new_booking.travel_dates.start.to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_empty_itinerary() {
        let mut body = full_request();
        body["itinerary"] = json!([]);
        assert_eq!(message_for(body), "Itinerary must be a non-empty array.");
    }

    #[test]
    fn test_missing_destination() {
        let mut body = full_request();
        body.as_object_mut().unwrap().remove("destination");
        assert_eq!(message_for(body), "Destination is required.");
    }

    #[test]
    fn test_first_failure_wins() {
        // Both user and destination are missing; the user rule is
        // checked first and decides the message.
        let body = json!({
            "travelDates": {"start": "2024-01-01", "end": "2024-01-05"},
            "itinerary": [{"day": 1, "activity": "Arrive"}]
        });
        assert_eq!(
            message_for(body),
            "User details (name, email, phone) are required."
        );
    }
}
