//! # sirene
//!
//! Validated value types for French business and geographic identifiers:
//! SIREN, SIRET, NIC, TVA (the French VAT number), and postal codes.
//!
//! Every type validates its raw string once, at construction, and is
//! immutable afterwards — an instance in hand is a guarantee that the value
//! is well-formed. Values serialize as their exact original digit string
//! (leading zeros intact), never as a numeric re-encoding.
//!
//! ## Quick Start
//!
//! ```rust
//! use sirene::business::{Siret, Tva};
//!
//! let siret = Siret::parse("52324793012345")?;
//! assert_eq!(siret.siren().as_str(), "523247930");
//! assert_eq!(siret.nic().as_str(), "12345");
//!
//! let tva = Tva::from_siret(&siret);
//! assert_eq!(tva.as_str(), "FR77523247930");
//! assert_eq!(tva.country().alpha2(), "FR");
//! # Ok::<(), sirene::InvalidFormat>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `business` (default) | SIREN, SIRET, NIC, and TVA types |
//! | `geo` (default) | Postal codes and ISO 3166-1 country lookup |
//! | `json` (default) | Untyped-input validity checks over `serde_json::Value` |
//! | `all` | Everything |

#[cfg(feature = "business")]
pub mod business;

#[cfg(feature = "geo")]
pub mod geo;

mod error;

pub use crate::error::InvalidFormat;
