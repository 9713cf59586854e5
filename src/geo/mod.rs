//! Geographic types: French postal codes and ISO 3166-1 country lookup.

mod country;
mod postal_code;

pub use country::{Country, UnknownCountry};
pub use postal_code::PostalCode;
