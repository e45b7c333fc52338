//! Turns host-supplied text into engine inputs the way a browser number field
//! feeds `Number(...)`: permissive, never failing, NaN on garbage.

pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Number of passes `for (i = 0; i < period; i++)` makes.
pub fn month_count(period: f64) -> i64 {
    if period.is_nan() || period <= 0.0 {
        return 0;
    }
    // `as` saturates, so +inf becomes i64::MAX.
    period.ceil() as i64
}

fn is_number_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix: u32 = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Radixes are powers of two: keep the leading 125+ bits exactly, fold the
    // rest into a sticky bit so the final conversion rounds only once.
    let bits_per_digit = radix.trailing_zeros();
    let mut mantissa: u128 = 0;
    let mut dropped_bits: i32 = 0;
    let mut sticky = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        if dropped_bits == 0 && mantissa.leading_zeros() >= bits_per_digit {
            mantissa = (mantissa << bits_per_digit) | u128::from(digit);
        } else {
            dropped_bits = dropped_bits.saturating_add(bits_per_digit as i32);
            sticky |= digit != 0;
        }
    }
    if sticky {
        mantissa |= 1;
    }
    Some(mantissa as f64 * 2f64.powi(dropped_bits))
}

fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.next_if(|c| c.is_ascii_digit()).is_some() {
        mantissa_digits += 1;
    }
    if chars.next_if_eq(&'.').is_some() {
        while chars.next_if(|c| c.is_ascii_digit()).is_some() {
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if chars.next_if(|c| *c == 'e' || *c == 'E').is_some() {
        chars.next_if(|c| *c == '+' || *c == '-');
        let mut exponent_digits = 0;
        while chars.next_if(|c| c.is_ascii_digit()).is_some() {
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert_eq, proptest};

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   \t\n"), 0.0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(coerce_number(" 12 "), 12.0);
        assert_eq!(coerce_number("\u{a0}10000\u{feff}"), 10_000.0);
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(coerce_number("10000"), 10_000.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("+2.5"), 2.5);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("1e3"), 1_000.0);
        assert_eq!(coerce_number("2.5E-1"), 0.25);
    }

    #[test]
    fn prefixed_integers() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0B101"), 5.0);
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0xZZ").is_nan());
        assert!(coerce_number("-0x10").is_nan());
    }

    #[test]
    fn long_prefixed_integers_round_once() {
        assert_eq!(
            coerce_number("0x20000000000001f"),
            0x20000000000001f_u64 as f64
        );
        // 2^156 + 2^103 + 1: the trailing bit breaks the tie upwards.
        let value = coerce_number("0x1000000000000080000000000000000000000001");
        assert_eq!(value.to_bits(), 5_309_743_960_669_814_785);
        assert_eq!(coerce_number(&format!("0x1{}", "0".repeat(300))), f64::INFINITY);
    }

    #[test]
    fn infinity_spellings() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("+Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("infinity").is_nan());
    }

    #[test]
    fn garbage_is_nan() {
        for text in ["abc", "nan", "NaN", "1,5", "12abc", ".", "1e", "--1", "1 000"] {
            assert!(coerce_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn month_count_matches_loop_bound() {
        assert_eq!(month_count(12.0), 12);
        assert_eq!(month_count(0.0), 0);
        assert_eq!(month_count(-4.0), 0);
        assert_eq!(month_count(0.5), 1);
        assert_eq!(month_count(2.01), 3);
        assert_eq!(month_count(f64::NAN), 0);
        assert_eq!(month_count(f64::INFINITY), i64::MAX);
        assert_eq!(month_count(f64::NEG_INFINITY), 0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(128))]

        #[test]
        fn prop_integers_round_trip(value in any::<i32>()) {
            prop_assert_eq!(coerce_number(&value.to_string()), f64::from(value));
        }

        #[test]
        fn prop_whole_month_counts_are_preserved(months in 0i32..10_000) {
            let text = months.to_string();
            prop_assert_eq!(month_count(coerce_number(&text)), i64::from(months));
        }
    }
}
