//! Locale-tolerant decimal parsing
//!
//! Normalizes user-typed numbers such as `"1.234,56"` or `"€ 12,50"` into
//! floating point values. Parsing is best-effort: text that does not start
//! with a number parses to `0` instead of failing.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::DecimalError;

/// Options for [`parse_decimal`].
///
/// # Example
///
/// ```
/// use kendo_lib::decimal::{parse_decimal_str, DecimalOptions};
///
/// let options = DecimalOptions::default().with_thousands_separator(".");
/// assert_eq!(parse_decimal_str("1.234,56", &options), 1234.56);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalOptions {
    /// Separator removed from the text before parsing (e.g. `"."` or `" "`).
    pub thousands_separator: Option<String>,
}

impl DecimalOptions {
    /// Creates options with no thousands separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thousands separator.
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = Some(separator.into());
        self
    }

    /// Returns the separator if one is set and non-empty.
    pub fn separator(&self) -> Option<&str> {
        self.thousands_separator
            .as_deref()
            .filter(|separator| !separator.is_empty())
    }
}

/// Parses a decimal from a JSON scalar.
///
/// Returns `Ok(None)` only when `allow_null` is set and `raw` is null. A null
/// without `allow_null` is treated as empty text and parses to `0`. JSON
/// numbers are already numeric and are returned as is; only text goes through
/// separator removal.
///
/// # Errors
///
/// Returns [`DecimalError::NotScalar`] for arrays and objects.
pub fn parse_decimal(
    raw: &Value,
    options: &DecimalOptions,
    allow_null: bool,
) -> Result<Option<f64>, DecimalError> {
    let text = match raw {
        Value::Null if allow_null => return Ok(None),
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => return Ok(Some(n.as_f64().unwrap_or(0.0))),
        Value::String(s) => s.clone(),
        Value::Array(_) => return Err(DecimalError::not_scalar("array")),
        Value::Object(_) => return Err(DecimalError::not_scalar("object")),
    };

    Ok(Some(parse_decimal_str(&text, options)))
}

/// Parses a decimal from text.
pub fn parse_decimal_str(text: &str, options: &DecimalOptions) -> f64 {
    let text = match options.separator() {
        Some(separator) => text.replace(separator, ""),
        None => text.to_string(),
    };

    let normalized: String = text
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    leading_number(&normalized)
}

/// Parses the longest `-?digits[.digits]` prefix, or `0` if there is none.
fn leading_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12.5"), 12.5);
        assert_eq!(leading_number("-3"), -3.0);
        assert_eq!(leading_number(".5"), 0.5);
        assert_eq!(leading_number("5."), 5.0);
        assert_eq!(leading_number("1.2.3"), 1.2);
        assert_eq!(leading_number("12-3"), 12.0);
    }

    #[test]
    fn test_leading_number_malformed() {
        assert_eq!(leading_number(""), 0.0);
        assert_eq!(leading_number("-"), 0.0);
        assert_eq!(leading_number("."), 0.0);
        assert_eq!(leading_number("-."), 0.0);
        assert_eq!(leading_number("--5"), 0.0);
    }

    #[test]
    fn test_empty_separator_is_ignored() {
        let options = DecimalOptions::default().with_thousands_separator("");
        assert_eq!(options.separator(), None);
        assert_eq!(parse_decimal_str("1,5", &options), 1.5);
    }
}
