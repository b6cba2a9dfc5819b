//! # Display Formatting
//!
//! Long numeric values are shortened to 10 significant digits so they fit
//! the display; everything else is shown as-is.

use regex::Regex;
use std::sync::OnceLock;

/// Values longer than this are reformatted
pub const MAX_DISPLAY_CHARS: usize = 12;

/// Significant digits kept when reformatting
pub const SIGNIFICANT_DIGITS: usize = 10;

fn numeric_literal() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("numeric pattern is valid")
    })
}

/// Text to show for `value`
pub fn format_for_display(value: &str) -> String {
    if value.chars().count() <= MAX_DISPLAY_CHARS {
        return value.to_string();
    }

    let trimmed = value.trim();
    if !numeric_literal().is_match(trimmed) {
        return value.to_string();
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => to_precision(number, SIGNIFICANT_DIGITS),
        _ => value.to_string(),
    }
}

/// Digits past the decimal point that hold any `f64` exactly
const EXACT_DIGITS: usize = 800;

/// Render `value` with `precision` significant digits
///
/// Fixed notation is used while the decimal exponent lies in
/// `-6..precision`, exponential notation (`1.234567890e+12`) otherwise.
/// Halfway values round away from zero.
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let (digits, exponent) = round_half_up(value.abs(), precision);
    let sign = if value < 0.0 { "-" } else { "" };

    if exponent < -6 || exponent >= precision as i32 {
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{sign}{lead}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{sign}{lead}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    } else if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let (integer, fraction) = digits.split_at(exponent as usize + 1);
        if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        }
    }
}

/// First `precision` significant digits of a non-negative `value` and its
/// decimal exponent, rounded on the exact decimal expansion
fn round_half_up(value: f64, precision: usize) -> (String, i32) {
    let exact = format!("{value:.EXACT_DIGITS$e}");
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let all_digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept: Vec<u8> = all_digits.iter().take(precision).copied().collect();
    kept.resize(precision, b'0');

    if all_digits.get(precision).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.truncate(precision);
            exponent += 1;
        }
    }

    (String::from_utf8_lossy(&kept).into_owned(), exponent)
}
