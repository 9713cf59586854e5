use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Nic, Siren};
use crate::error::InvalidFormat;

/// A SIRET number — the 14-digit identifier of a single French
/// establishment: the company's SIREN (9 digits) followed by the
/// establishment's NIC (5 digits).
///
/// Because the backing value is 14 pure digits, both parts are always
/// independently valid and [`Siret::siren`] / [`Siret::nic`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Siret(String);

impl Siret {
    /// Number of digits in a SIRET.
    pub const LENGTH: usize = 14;

    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidFormat> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(InvalidFormat::new("SIRET", raw, "exactly 14 digits"));
        }
        Ok(Self(raw))
    }

    /// Whether `raw` is a valid SIRET number.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LENGTH && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Untyped-input form of [`Siret::is_valid`]: returns `false` for any
    /// JSON value that is not a string, instead of failing.
    #[cfg(feature = "json")]
    pub fn is_valid_value(value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(Self::is_valid)
    }

    /// The company's SIREN: the first 9 digits.
    pub fn siren(&self) -> Siren {
        Siren::parse(&self.0[..Siren::LENGTH])
            .expect("the first 9 digits of a SIRET form a valid SIREN")
    }

    /// The establishment's NIC: the last 5 digits.
    pub fn nic(&self) -> Nic {
        Nic::parse(&self.0[Siren::LENGTH..])
            .expect("the last 5 digits of a SIRET form a valid NIC")
    }

    /// The backing 14-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Siret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Siret {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Siret {
    type Error = InvalidFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Siret> for String {
    fn from(siret: Siret) -> Self {
        siret.0
    }
}

impl AsRef<str> for Siret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_siret() {
        let siret = Siret::parse("52324793012345").unwrap();
        assert_eq!(siret.as_str(), "52324793012345");
    }

    #[test]
    fn decomposes_into_siren_and_nic() {
        let siret = Siret::parse("12345678901234").unwrap();
        assert_eq!(siret.siren().as_str(), "123456789");
        assert_eq!(siret.nic().as_str(), "01234");
    }

    #[test]
    fn parts_concatenate_back() {
        let siret = Siret::parse("00542012000015").unwrap();
        let rebuilt = format!("{}{}", siret.siren(), siret.nic());
        assert_eq!(rebuilt, siret.as_str());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(Siret::parse("1234567890123").is_err());
        assert!(Siret::parse("123456789012345").is_err());
    }

    #[test]
    fn letters_rejected() {
        assert!(!Siret::is_valid("1234567890123x"));
    }
}
