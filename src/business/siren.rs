use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFormat;

/// A SIREN number — the 9-digit identifier INSEE assigns to every French
/// company or organization.
///
/// The backing value is exactly 9 ASCII digits, leading zeros included.
/// A `Siren` can only be obtained through validation, so holding one is a
/// guarantee that the string is well-formed.
///
/// Serializes as the original digit string, never as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Siren(String);

impl Siren {
    /// Number of digits in a SIREN.
    pub const LENGTH: usize = 9;

    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidFormat> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(InvalidFormat::new("SIREN", raw, "exactly 9 digits"));
        }
        Ok(Self(raw))
    }

    /// Whether `raw` is a valid SIREN number.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Untyped-input form of [`Siren::is_valid`]: returns `false` for any
    /// JSON value that is not a string, instead of failing.
    #[cfg(feature = "json")]
    pub fn is_valid_value(value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(Self::is_valid)
    }

    /// The backing 9-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Siren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Siren {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Siren {
    type Error = InvalidFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Siren> for String {
    fn from(siren: Siren) -> Self {
        siren.0
    }
}

impl AsRef<str> for Siren {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
