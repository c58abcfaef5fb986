//! Parsing of deal timestamps received on the wire.
//!
//! Deals are stored without a time zone. Inputs are accepted either as a local
//! ISO-8601 date-time (`2024-01-01T10:00:00`, optional fraction) or as an
//! RFC 3339 date-time carrying an offset, which is normalized to UTC.

use chrono::{DateTime, NaiveDateTime, ParseResult};
use serde::{de, Deserialize, Deserializer};

pub fn parse(input: &str) -> ParseResult<NaiveDateTime> {
    DateTime::parse_from_rfc3339(input)
        .map(|timestamp| timestamp.naive_utc())
        .or_else(|_| input.parse::<NaiveDateTime>())
}

pub fn deserialize_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|input| parse(&input)
            .map_err(|err| de::Error::custom(format!("invalid dealTimestamp '{input}': {err}"))))
        .transpose()
}
