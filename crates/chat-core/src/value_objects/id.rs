//! Id - auto-incrementing primary key shared by every table
//!
//! Ids are assigned by the database (`BIGSERIAL`). Subtypes of Image reuse the
//! id of their Image row, so a single `Id` names both rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-assigned row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    /// Create an Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Id)
            .ok_or(IdParseError::InvalidFormat)
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse() {
        assert_eq!(Id::parse("42"), Ok(Id::new(42)));
        assert_eq!("7".parse::<Id>(), Ok(Id::new(7)));
        assert_eq!(Id::parse("abc"), Err(IdParseError::InvalidFormat));
        assert_eq!(Id::parse("0"), Err(IdParseError::InvalidFormat));
        assert_eq!(Id::parse("-3"), Err(IdParseError::InvalidFormat));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(Id::new(123).to_string(), "123");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&Id::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: Id = serde_json::from_str("9").unwrap();
        assert_eq!(id, Id::new(9));
    }
}
