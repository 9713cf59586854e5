use thiserror::Error;

/// Error returned when a raw value does not form a valid identifier.
///
/// Raised only at construction: pattern failures and checksum failures are
/// the same kind, and an instance that exists has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {label} '{value}': expected {expected}")]
pub struct InvalidFormat {
    /// Which identifier rejected the value (e.g. "SIREN").
    pub label: &'static str,
    /// The offending input.
    pub value: String,
    /// The shape the value must have.
    pub expected: &'static str,
}

impl InvalidFormat {
    pub(crate) fn new(
        label: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self {
            label,
            value: value.into(),
            expected,
        }
    }
}
