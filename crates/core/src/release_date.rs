//! Release date parsing for movie payloads.
//!
//! Clients send release dates as `dd/MM/yyyy`. ISO `yyyy-MM-dd` is accepted as
//! well so a movie read back from the API can be sent again unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Day-first format used by existing clients.
pub const DAY_FIRST_FORMAT: &str = "%d/%m/%Y";

/// ISO-8601 calendar date, the format used in responses.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a release date in either supported format.
pub fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DAY_FIRST_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_FORMAT))
}

/// `#[serde(deserialize_with = ...)]` helper for an optional release date.
///
/// `null`, a missing field and an empty string all map to `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse(value).map(Some).map_err(|e| {
            serde::de::Error::custom(format!(
                "invalid release date '{value}': expected dd/MM/yyyy or yyyy-MM-dd ({e})"
            ))
        }),
    }
}
