//! Opaque note identifier, minted from a ULID, with prefix extraction and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::SystemTime;
use ulid::Ulid;

/// Length of the short form shown in listings.
const PREFIX_LEN: usize = 10;

/// A unique identifier for notes.
///
/// The store treats ids as opaque strings: new notes get a 26-character ULID,
/// but any non-empty token without whitespace loads fine, so payloads written
/// by other front-ends (e.g. millisecond timestamps like `"1712345678901"`)
/// keep their ids.
///
/// # Examples
///
/// ```
/// use stickies::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.as_str().len(), 26);
/// assert_eq!(id.prefix().len(), 10);
///
/// let legacy: NoteId = "1712345678901".parse().unwrap();
/// assert_eq!(legacy.as_str(), "1712345678901");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Creates a NoteId from a specific datetime (useful for testing).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let system_time: SystemTime = datetime.into();
        Self(Ulid::from_datetime(system_time).to_string())
    }

    /// Returns the first 10 characters of the id (or the whole id if shorter).
    ///
    /// For ULIDs the first 10 characters encode the millisecond timestamp.
    pub fn prefix(&self) -> &str {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Returns true if this id starts with the given prefix (case-insensitive).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .to_ascii_lowercase()
            .starts_with(&prefix.to_ascii_lowercase())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot be empty",
            });
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot contain whitespace or control characters",
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_creates_ulid_shaped_id() {
        let id = NoteId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 26, "ULID should be 26 characters");
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prefix_for_known_ulid() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(id.prefix(), "01HQ3K5M7N");
    }

    #[test]
    fn prefix_of_short_id_is_whole_id() {
        let id: NoteId = "12345".parse().unwrap();
        assert_eq!(id.prefix(), "12345");
    }

    #[test]
    fn starts_with_is_case_insensitive() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert!(id.starts_with("01hq3k"));
        assert!(!id.starts_with("01HQ4"));
    }

    #[test]
    fn accepts_timestamp_style_ids() {
        let id: NoteId = "1712345678901".parse().unwrap();
        assert_eq!(id.as_str(), "1712345678901");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!("".parse::<NoteId>().is_err());
        assert!("abc def".parse::<NoteId>().is_err());
        assert!("abc\n".parse::<NoteId>().is_err());
    }

    #[test]
    fn from_datetime_sorts_chronologically() {
        let early = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let late = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert!(NoteId::from_datetime(early).to_string() < NoteId::from_datetime(late).to_string());
    }

    #[test]
    fn multiple_new_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn deserialize_rejects_empty_id() {
        let result: Result<NoteId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }

    #[test]
    fn parse_error_contains_invalid_value() {
        let err = "bad id".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "bad id");
        assert!(err.to_string().contains("'bad id'"));
    }
}
