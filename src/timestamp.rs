//! ISO-8601 timestamps with microsecond precision.
//!
//! `deserialize` is usable as `#[serde(deserialize_with = "timestamp::deserialize")]`
//! on `NaiveDateTime` fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Format used for every timestamp written to a fixture file.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Renders a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Parses a timestamp written by [`format`].
pub fn parse(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S%.f")
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}
