//! The addition helper and its operand parsing.

use crate::error::TourError;

/// Add two integers.
///
/// The lesson's "methods" example: a pure two-argument function with no side
/// effects. `add_numbers(a, b) == a + b` for every pair of operands.
pub fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}

/// Parse a command-line operand for [`add_numbers`].
///
/// Strict: anything `i64` parsing rejects becomes
/// [`TourError::InvalidArgument`] carrying the offending text. Surrounding
/// whitespace is tolerated, coercion is not.
pub fn parse_operand(raw: &str) -> Result<i64, TourError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TourError::InvalidArgument {
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_the_lesson_operands() {
        assert_eq!(add_numbers(10, 20), 30);
    }

    #[test]
    fn adds_arbitrary_pairs() {
        assert_eq!(add_numbers(0, 0), 0);
        assert_eq!(add_numbers(-5, 5), 0);
        assert_eq!(add_numbers(-7, -13), -20);
        assert_eq!(add_numbers(1_000_000, 2_000_000), 3_000_000);
    }

    #[test]
    fn parses_well_formed_operands() {
        assert_eq!(parse_operand("10").unwrap(), 10);
        assert_eq!(parse_operand("-42").unwrap(), -42);
        assert_eq!(parse_operand("  7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric_operands() {
        for raw in ["ten", "3.14", "", "0x10", "1_000"] {
            let err = parse_operand(raw).unwrap_err();
            match err {
                TourError::InvalidArgument { value } => assert_eq!(value, raw),
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
    }
}
