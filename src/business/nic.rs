use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFormat;

/// A NIC number — the 5-digit suffix identifying one establishment within
/// a SIREN. The last 5 digits of a SIRET.
///
/// Deliberately a distinct type from [`PostalCode`](crate::geo::PostalCode)
/// even though both are 5 digits: the two are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nic(String);

impl Nic {
    /// Number of digits in a NIC.
    pub const LENGTH: usize = 5;

    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidFormat> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(InvalidFormat::new("NIC", raw, "exactly 5 digits"));
        }
        Ok(Self(raw))
    }

    /// Whether `raw` is a valid NIC number.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Untyped-input form of [`Nic::is_valid`]: returns `false` for any
    /// JSON value that is not a string, instead of failing.
    #[cfg(feature = "json")]
    pub fn is_valid_value(value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(Self::is_valid)
    }

    /// The backing 5-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Nic {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Nic {
    type Error = InvalidFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Nic> for String {
    fn from(nic: Nic) -> Self {
        nic.0
    }
}

impl AsRef<str> for Nic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
