//! Decimal parsing error types

/// Errors raised by [`parse_decimal`](crate::decimal::parse_decimal).
///
/// Malformed numeric text is not an error; it parses to zero. Only values
/// that have no textual form at all are rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// The raw value is an array or object.
    #[error("Cannot parse a decimal from a {kind} value")]
    NotScalar { kind: &'static str },
}

impl DecimalError {
    /// Creates a new non-scalar error for the given JSON kind.
    pub fn not_scalar(kind: &'static str) -> Self {
        Self::NotScalar { kind }
    }
}
