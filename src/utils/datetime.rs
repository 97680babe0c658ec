//! Lenient timestamp (de)serialization for travel dates.
//!
//! Clients send either a full RFC 3339 timestamp or a bare `YYYY-MM-DD`
//! date (interpreted as midnight UTC). Values are always emitted as
//! RFC 3339 with millisecond precision, so a record round-trips through
//! the store byte-identically.
//!
//! Usable with `#[serde(with = "crate::utils::datetime")]` on
//! `DateTime<Utc>` fields; [`parse_flexible`] covers raw strings that
//! request DTOs validate themselves.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
pub fn parse_flexible(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid date or timestamp: {raw}")))
}
