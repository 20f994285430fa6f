//! Price input validation.

use crate::error::{DomainError, DomainResult};

/// Parses a user-supplied price string into a finite number.
///
/// Accepts anything `f64` parsing accepts (`"12.50"`, `"0"`, `"3e2"`) but
/// rejects non-numeric input as well as NaN and infinities, which the
/// backend would otherwise receive as garbage.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] if the input does not parse as a
/// finite number.
pub fn parse_price(input: &str) -> DomainResult<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidPrice(trimmed.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::InvalidPrice(trimmed.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(parse_price("12.50").unwrap(), 12.5);
        assert_eq!(parse_price(" 0 ").unwrap(), 0.0);
        assert_eq!(parse_price("3e2").unwrap(), 300.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            parse_price("abc"),
            Err(DomainError::InvalidPrice(_))
        ));
        assert!(matches!(parse_price(""), Err(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            parse_price("NaN"),
            Err(DomainError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("inf"),
            Err(DomainError::InvalidPrice(_))
        ));
    }
}
