use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Siren, Siret};
use crate::error::InvalidFormat;
use crate::geo::Country;

/// A French TVA (VAT) identification number: `FR` + 2-digit key + SIREN.
///
/// The 13-character value embeds the company's 9-digit SIREN, preceded by a
/// 2-digit key that is a checksum of it:
///
/// ```text
/// key = (12 + 3 * (siren % 97)) % 97
/// ```
///
/// The key field is always exactly 2 characters; a single-digit key is
/// stored zero-padded (`"09"` for key 9). Validation reads the field as a
/// decimal integer and compares it against the recomputed key, so a string
/// that matches the `FR` + 11-digit pattern but carries the wrong key is
/// rejected with the same [`InvalidFormat`] error as a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tva(String);

impl Tva {
    /// Total length: "FR" + 2 key digits + 9 SIREN digits.
    pub const LENGTH: usize = 13;

    /// Validate `raw` (pattern and key) and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidFormat> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(InvalidFormat::new(
                "TVA number",
                raw,
                "\"FR\" followed by a 2-digit key and a 9-digit SIREN, with the key matching the SIREN checksum",
            ));
        }
        Ok(Self(raw))
    }

    /// Derive the TVA number of a company from its SIREN.
    ///
    /// Always succeeds: the key formula yields 0..=96, which the 2-digit
    /// field always accommodates.
    pub fn from_siren(siren: &Siren) -> Self {
        let number: u64 = siren
            .as_str()
            .parse()
            .expect("a SIREN is exactly 9 ASCII digits");
        let key = (12 + 3 * (number % 97)) % 97;
        Self(format!("FR{key:02}{siren}"))
    }

    /// Derive the TVA number of the company owning an establishment.
    pub fn from_siret(siret: &Siret) -> Self {
        Self::from_siren(&siret.siren())
    }

    /// Whether `raw` is a valid TVA number (pattern and key).
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LENGTH
            && raw.starts_with("FR")
            && raw[2..].chars().all(|c| c.is_ascii_digit())
            && checksum_ok(&raw[2..4], &raw[4..])
    }

    /// Untyped-input form of [`Tva::is_valid`]: returns `false` for any
    /// JSON value that is not a string, instead of failing.
    #[cfg(feature = "json")]
    pub fn is_valid_value(value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(Self::is_valid)
    }

    /// The embedded SIREN: the trailing 9 digits.
    pub fn siren(&self) -> Siren {
        Siren::parse(&self.0[4..])
            .expect("the trailing 9 digits of a TVA number form a valid SIREN")
    }

    /// The 2-character key field.
    pub fn key(&self) -> &str {
        &self.0[2..4]
    }

    /// The country this number belongs to, looked up from the 2-letter
    /// prefix. Infallible here: the format fixes the prefix to `FR`.
    pub fn country(&self) -> Country {
        Country::from_alpha2(&self.0[..2]).expect("the TVA prefix is always the known code \"FR\"")
    }

    /// The backing 13-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key check on an already pattern-matched value: both fields are pure
/// digits, so the integer parses cannot fail and the fallback arm is
/// unreachable.
fn checksum_ok(key: &str, siren: &str) -> bool {
    match (key.parse::<u64>(), siren.parse::<u64>()) {
        (Ok(key), Ok(siren)) => key == (12 + 3 * (siren % 97)) % 97,
        _ => false,
    }
}

impl fmt::Display for Tva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tva {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tva {
    type Error = InvalidFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Tva> for String {
    fn from(tva: Tva) -> Self {
        tva.0
    }
}

impl AsRef<str> for Tva {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tva() {
        let tva = Tva::parse("FR77523247930").unwrap();
        assert_eq!(tva.as_str(), "FR77523247930");
        assert_eq!(tva.key(), "77");
    }

    #[test]
    fn from_siren_computes_key() {
        let siren = Siren::parse("523247930").unwrap();
        assert_eq!(Tva::from_siren(&siren).as_str(), "FR77523247930");
    }

    #[test]
    fn single_digit_key_zero_padded() {
        let siren = Siren::parse("637293879").unwrap();
        assert_eq!(Tva::from_siren(&siren).as_str(), "FR09637293879");
    }

    #[test]
    fn zero_padded_key_reparses() {
        assert!(Tva::is_valid("FR09637293879"));
        let tva = Tva::parse("FR09637293879").unwrap();
        assert_eq!(tva.key(), "09");
    }

    #[test]
    fn from_siret_uses_embedded_siren() {
        let siret = Siret::parse("52324793012345").unwrap();
        assert_eq!(Tva::from_siret(&siret).as_str(), "FR77523247930");
    }

    #[test]
    fn wrong_key_rejected() {
        // Pattern matches, key does not.
        assert!(!Tva::is_valid("FR00523247930"));
        assert!(Tva::parse("FR00523247930").is_err());
    }

    #[test]
    fn missing_prefix_rejected() {
        assert!(!Tva::is_valid("77523247930"));
    }

    #[test]
    fn one_digit_short_rejected() {
        assert!(!Tva::is_valid("FR7752324793"));
    }

    #[test]
    fn lowercase_prefix_rejected() {
        assert!(!Tva::is_valid("fr77523247930"));
    }

    #[test]
    fn multibyte_input_rejected() {
        // 13 bytes but not 13 ASCII chars; must not panic.
        assert!(!Tva::is_valid("FRé752324793"));
    }

    #[test]
    fn embedded_siren_accessor() {
        let tva = Tva::parse("FR77523247930").unwrap();
        assert_eq!(tva.siren().as_str(), "523247930");
    }

    #[test]
    fn country_is_france() {
        let tva = Tva::parse("FR77523247930").unwrap();
        assert_eq!(tva.country().alpha2(), "FR");
    }
}
