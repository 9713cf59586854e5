use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFormat;

/// A French postal code: exactly 5 digits, leading zeros included
/// (e.g. `"01000"` for Bourg-en-Bresse).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits in a postal code.
    pub const LENGTH: usize = 5;

    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidFormat> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(InvalidFormat::new("postal code", raw, "exactly 5 digits"));
        }
        Ok(Self(raw))
    }

    /// Whether `raw` is a valid French postal code.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Untyped-input form of [`PostalCode::is_valid`]: returns `false` for
    /// any JSON value that is not a string, instead of failing.
    #[cfg(feature = "json")]
    pub fn is_valid_value(value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(Self::is_valid)
    }

    /// The backing 5-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostalCode {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = InvalidFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_postal_code() {
        assert_eq!(PostalCode::parse("75001").unwrap().as_str(), "75001");
    }

    #[test]
    fn leading_zero_preserved() {
        assert_eq!(PostalCode::parse("01000").unwrap().to_string(), "01000");
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(PostalCode::parse("7500").is_err());
        assert!(PostalCode::parse("750011").is_err());
    }

    #[test]
    fn letters_rejected() {
        assert!(!PostalCode::is_valid("7500a"));
    }
}
