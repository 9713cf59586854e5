//! French business identifiers: SIREN, SIRET, NIC, and TVA numbers.
//!
//! All four types validate once at construction and are immutable value
//! objects afterwards. SIRET decomposes into its SIREN and NIC parts; TVA
//! can be derived from either.
//!
//! # Example
//!
//! ```rust
//! use sirene::business::{Siren, Tva};
//!
//! let siren = Siren::parse("523247930")?;
//! let tva = Tva::from_siren(&siren);
//! assert_eq!(tva.as_str(), "FR77523247930");
//! # Ok::<(), sirene::InvalidFormat>(())
//! ```

mod nic;
mod siren;
mod siret;
mod tva;

pub use nic::Nic;
pub use siren::Siren;
pub use siret::Siret;
pub use tva::Tva;
