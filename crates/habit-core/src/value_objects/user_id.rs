//! User ID - opaque positive integer identifier
//!
//! Ids are assigned by the database (BIGSERIAL); the domain only requires
//! that they are strictly positive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque positive integer identifier for a user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check that the id is strictly positive
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }

    /// Validate a raw i64 as a strictly positive id
    pub const fn try_new(raw: i64) -> Result<Self, UserIdParseError> {
        if raw <= 0 {
            return Err(UserIdParseError::NotPositive);
        }
        Ok(Self(raw))
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| UserIdParseError::InvalidFormat)?;
        if raw <= 0 {
            return Err(UserIdParseError::NotPositive);
        }
        Ok(Self(raw))
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,
    #[error("user id must be positive")]
    NotPositive,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}
