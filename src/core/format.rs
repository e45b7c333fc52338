//! Fixed fr-FR / EUR currency rendering.
//!
//! Output follows the browser's `Intl.NumberFormat('fr-FR', { style: 'currency',
//! currency: 'EUR' })`: digits grouped by three with a narrow no-break space,
//! a decimal comma, two fraction digits and a trailing `€` after a no-break
//! space. The host locale never affects the result.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const GROUP_SEPARATOR: char = '\u{202f}';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL_SEPARATOR: char = '\u{a0}';
const CURRENCY_SYMBOL: &str = "€";

pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };
    let body = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        group_digits(&fixed_two_places(amount.abs()))
    };
    format!("{sign}{body}{SYMBOL_SEPARATOR}{CURRENCY_SYMBOL}")
}

/// Renders a non-negative finite value with two decimals. Rounding starts
/// from the shortest round-trip digits, so `2.675` becomes `2.68` the way a
/// browser shows it, and exact midpoints round away from zero.
fn fixed_two_places(value: f64) -> String {
    let shortest = value.to_string();
    match Decimal::from_str(&shortest) {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Outside Decimal's range: large values are whole numbers and tiny
        // ones round to zero cents.
        Err(_) if value < 1.0 => "0.00".to_string(),
        Err(_) => format!("{shortest}.00"),
    }
}

fn group_digits(fixed: &str) -> String {
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed, "00"));
    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 * 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out.push(DECIMAL_SEPARATOR);
    out.push_str(fraction);
    out
}
