// Released under MIT License.
// Copyright (c) 2024-2025 Ladislav Bartos

//! Simple, auxiliary functions used through the `zacros_rs` library.

use std::fmt::Display;

use colored::{ColoredString, Colorize};

/// Prefix of warnings emitted through the `log` facade.
pub(crate) fn warning_prefix() -> ColoredString {
    "WARNING:".yellow().bold()
}

/// Format a floating point number the way the Zacros input files expect it.
///
/// Uses the shortest representation that round-trips.
/// Integral values keep a trailing `.0`. Magnitudes smaller than `1e-4`
/// or larger than or equal to `1e16` are written in exponential notation
/// with a signed, at least two-digit exponent (e.g. `1e-05`, `2.5e+16`).
/// Non-finite values are written as `nan`, `inf`, and `-inf`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }

    // debug formatting already switches to exponential notation for the same magnitudes
    let repr = format!("{:?}", value);

    match repr.split_once('e') {
        None => repr,
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };

            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}

/// Join displayable items using the provided separator.
pub(crate) fn join<T: Display>(items: impl IntoIterator<Item = T>, separator: &str) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! float_formatted {
        ($name:ident, $value:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(format_float($value), $expected);
            }
        };
    }

    float_formatted!(format_zero, 0.0, "0.0");
    float_formatted!(format_negative_zero, -0.0, "-0.0");
    float_formatted!(format_integral, 2.0, "2.0");
    float_formatted!(format_decimal, 0.1, "0.1");
    float_formatted!(format_negative, -1.5, "-1.5");
    float_formatted!(format_small_decimal, 0.0001, "0.0001");
    float_formatted!(format_tiny, 0.00001, "1e-05");
    float_formatted!(format_tiny_mantissa, -2.5e-7, "-2.5e-07");
    float_formatted!(format_large_decimal, 123456789012345.0, "123456789012345.0");
    float_formatted!(format_huge, 1e16, "1e+16");
    float_formatted!(format_huge_mantissa, 2.5e120, "2.5e+120");
    float_formatted!(format_nan, f64::NAN, "nan");
    float_formatted!(format_negative_nan, -f64::NAN, "nan");
    float_formatted!(format_infinity, f64::INFINITY, "inf");
    float_formatted!(format_negative_infinity, f64::NEG_INFINITY, "-inf");

    #[test]
    fn join_strings() {
        assert_eq!(join(["a", "b", "c"], ","), "a,b,c");
        assert_eq!(join(Vec::<&str>::new(), ","), "");
        assert_eq!(join([1, 2], " "), "1 2");
    }
}
