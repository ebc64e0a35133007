//! Submission identifiers
//!
//! Listing pages hand out signed ids of the form `<uuid>:<timestamp>:<signature>`.
//! The server answers with the bare uuid, so rows are looked up by the text
//! before the first [`SubmissionId::SEPARATOR`] while the full signed id is what
//! gets sent and tracked.

use thiserror::Error;

/// Errors raised when parsing a submission id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("submission id is empty")]
    Empty,
    #[error("submission id {0:?} has an empty key before ':'")]
    EmptyKey(String),
}

/// Declared id of a submission row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionId {
    raw: String,
    key_len: usize,
}

impl SubmissionId {
    /// Separates the lookup key from the rest of a signed id
    pub const SEPARATOR: char = ':';

    /// Parse a raw id as found in a row's id attribute
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(IdError::Empty);
        }

        let key_len = raw.find(Self::SEPARATOR).unwrap_or(raw.len());
        if key_len == 0 {
            return Err(IdError::EmptyKey(raw.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            key_len,
        })
    }

    /// Lookup key: everything before the first separator
    pub fn key(&self) -> &str {
        &self.raw[..self.key_len]
    }

    /// The full declared id
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Key under which the server reports the given record id
    pub fn key_of(record_id: &str) -> &str {
        record_id
            .split(Self::SEPARATOR)
            .next()
            .unwrap_or(record_id)
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for SubmissionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_id_key() {
        let id = SubmissionId::parse("5f0c:1abc:sig").unwrap();
        assert_eq!(id.key(), "5f0c");
        assert_eq!(id.as_str(), "5f0c:1abc:sig");
    }

    #[test]
    fn test_plain_id_is_its_own_key() {
        let id = SubmissionId::parse("job1").unwrap();
        assert_eq!(id.key(), "job1");
        assert_eq!(id.to_string(), "job1");
    }

    #[test]
    fn test_rejects_empty_ids() {
        assert_eq!(SubmissionId::parse("  "), Err(IdError::Empty));
        assert!(matches!(
            SubmissionId::parse(":sig"),
            Err(IdError::EmptyKey(_))
        ));
    }

    #[test]
    fn test_key_of_record_id() {
        assert_eq!(SubmissionId::key_of("abc"), "abc");
        assert_eq!(SubmissionId::key_of("abc:def"), "abc");
    }
}
