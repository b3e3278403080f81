use std::fmt;

use regex::Regex;
use serde_json::Value;

#[cfg(test)]
use proptest::prelude::*;

lazy_static::lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^(\d+)(?:\.(\d+))?(?:[eE]([+-]?\d+))?$").unwrap();
}

/// Number of animals in a request, always a positive integer.
///
/// Counts beyond `u64::MAX` saturate there: no enclosure has room for them either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(n: i64) -> Option<Self> {
        if n > 0 {
            Some(Quantity(n as u64))
        } else {
            None
        }
    }

    /// Accepts any decimal text that denotes a positive integer, so "5", "5.00", "0.5e1" and
    /// "5e0" are all 5 while "5.5", "5e-1", "-5" and "five" are rejected.
    pub fn from_text(text: &str) -> Option<Self> {
        let capt = DECIMAL.captures(text.trim())?;
        let fraction = capt.get(2).map_or("", |m| m.as_str());

        let mut digits = format!("{}{fraction}", &capt[1]);
        let exponent = match capt.get(3) {
            None => 0,
            Some(m) => match m.as_str().parse::<i64>() {
                Ok(e) => e,
                // absurd exponents: huge if positive, a fraction if negative
                Err(_) if m.as_str().starts_with('-') => i64::MIN,
                Err(_) => i64::MAX,
            },
        };
        let shift = exponent.saturating_sub(fraction.len() as i64);

        digits = digits.trim_start_matches('0').to_string();
        if digits.is_empty() {
            return None;
        }

        if shift < 0 {
            let dropped = shift.unsigned_abs();
            let kept = (digits.len() as u64).checked_sub(dropped)?;
            let (int, rest) = digits.split_at(kept as usize);
            if int.is_empty() || rest.bytes().any(|b| b != b'0') {
                return None;
            }
            return Some(Quantity(saturating_parse(int)));
        }

        // u64::MAX has 20 digits
        if (digits.len() as i64).saturating_add(shift) > 20 {
            return Some(Quantity(u64::MAX));
        }
        digits.extend(std::iter::repeat('0').take(shift as usize));
        Some(Quantity(saturating_parse(&digits)))
    }

    /// Only JSON numbers are quantities, a string like `"5"` is not.
    pub fn from_json(val: &Value) -> Option<Self> {
        match val {
            Value::Number(n) => Self::from_text(&n.to_string()),
            _ => None,
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

fn saturating_parse(digits: &str) -> u64 {
    // only digits reach here, so the sole failure is overflow
    digits.parse().unwrap_or(u64::MAX)
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Quantity::new(1), Some(Quantity(1)));
        assert_eq!(Quantity::new(0), None);
        assert_eq!(Quantity::new(-3), None);
        assert_eq!(Quantity::new(5_000_000_000), Some(Quantity(5_000_000_000)));
        assert_eq!(Quantity::new(i64::MAX), Some(Quantity(i64::MAX as u64)));
    }

    #[test]
    fn test_from_text() {
        assert_eq!(Quantity::from_text("5"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text(" 5 "), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("5.0"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("005.000"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("5.5"), None);
        assert_eq!(Quantity::from_text("5."), None);
        assert_eq!(Quantity::from_text("0"), None);
        assert_eq!(Quantity::from_text("0.000"), None);
        assert_eq!(Quantity::from_text("-5"), None);
        assert_eq!(Quantity::from_text("five"), None);
        assert_eq!(Quantity::from_text(""), None);
        assert_eq!(
            Quantity::from_text("5000000000"),
            Some(Quantity(5_000_000_000))
        );
        assert_eq!(
            Quantity::from_text("99999999999999999999999"),
            Some(Quantity(u64::MAX))
        );
    }

    #[test]
    fn test_from_text_exponent() {
        assert_eq!(Quantity::from_text("1e0"), Some(Quantity(1)));
        assert_eq!(Quantity::from_text("5E0"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("1e2"), Some(Quantity(100)));
        assert_eq!(Quantity::from_text("1.0e2"), Some(Quantity(100)));
        assert_eq!(Quantity::from_text("0.5e1"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("1.25e2"), Some(Quantity(125)));
        assert_eq!(Quantity::from_text("500e-2"), Some(Quantity(5)));
        assert_eq!(Quantity::from_text("1e+3"), Some(Quantity(1000)));
        assert_eq!(Quantity::from_text("1e400"), Some(Quantity(u64::MAX)));
        assert_eq!(
            Quantity::from_text("1e99999999999999999999"),
            Some(Quantity(u64::MAX))
        );

        assert_eq!(Quantity::from_text("5e-1"), None);
        assert_eq!(Quantity::from_text("1.25e1"), None);
        assert_eq!(Quantity::from_text("501e-2"), None);
        assert_eq!(Quantity::from_text("0e5"), None);
        assert_eq!(Quantity::from_text("1e-99999999999999999999"), None);
        assert_eq!(Quantity::from_text("1e"), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Quantity::from_json(&json!(3)), Some(Quantity(3)));
        assert_eq!(
            Quantity::from_json(&serde_json::from_str("3.0").unwrap()),
            Some(Quantity(3))
        );
        assert_eq!(
            Quantity::from_json(&serde_json::from_str("1e0").unwrap()),
            Some(Quantity(1))
        );
        assert_eq!(
            Quantity::from_json(&serde_json::from_str("1e2").unwrap()),
            Some(Quantity(100))
        );
        assert_eq!(
            Quantity::from_json(&serde_json::from_str("18446744073709551616").unwrap()),
            Some(Quantity(u64::MAX))
        );
        assert_eq!(
            Quantity::from_json(&serde_json::from_str("3.1").unwrap()),
            None
        );
        assert_eq!(Quantity::from_json(&json!(-3)), None);
        assert_eq!(Quantity::from_json(&json!("3")), None);
        assert_eq!(Quantity::from_json(&json!(null)), None);
        assert_eq!(Quantity::from_json(&json!([3])), None);
    }

    proptest! {
        #[test]
        fn positive_integers_are_quantities(n in 1u64..) {
            prop_assert_eq!(Quantity::from_text(&n.to_string()).map(Quantity::get), Some(n));
        }

        #[test]
        fn positive_i64_are_quantities(n in 1i64..) {
            prop_assert_eq!(Quantity::new(n).map(Quantity::get), Some(n as u64));
        }

        #[test]
        fn non_positive_integers_are_rejected(n in i64::MIN..=0) {
            prop_assert_eq!(Quantity::new(n), None);
            prop_assert_eq!(Quantity::from_text(&n.to_string()), None);
        }

        #[test]
        fn fractions_are_rejected(n in 0u32..10_000, frac in 1u32..1000) {
            let text = format!("{n}.{frac}");
            prop_assert_eq!(Quantity::from_text(&text), None);
        }

        #[test]
        fn scientific_notation_matches_plain(n in 1u32.., shift in 0u32..8) {
            let text = format!("{}e{shift}", n);
            let expected = (n as u64).checked_mul(10u64.pow(shift)).unwrap_or(u64::MAX);
            prop_assert_eq!(Quantity::from_text(&text).map(Quantity::get), Some(expected));
        }
    }
}
