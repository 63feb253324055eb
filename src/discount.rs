use std::num::IntErrorKind;

/// Products must be discounted strictly more than this (percent) to be kept.
pub const DISCOUNT_THRESHOLD: i64 = 50;

/// Numeric discount from the raw savings text: `%` signs and leading `-` are
/// dropped, anything that still isn't an integer counts as no discount.
/// Digit runs too long for `i64` saturate rather than reading as zero.
pub fn discount_value(raw: &str) -> i64 {
    let cleaned = raw.replace('%', "");
    let digits = cleaned.trim().trim_start_matches('-');
    match digits.parse::<i64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => 0,
    }
}

pub fn is_deep_discount(value: i64) -> bool {
    value > DISCOUNT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_savings_text() {
        assert_eq!(discount_value("-55%"), 55);
        assert_eq!(discount_value("55%"), 55);
        assert_eq!(discount_value(" -72 % "), 72);
        assert_eq!(discount_value("50%"), 50);
        assert_eq!(discount_value("abc%"), 0);
        assert_eq!(discount_value(""), 0);
        assert_eq!(discount_value("0%"), 0);
        assert_eq!(discount_value("5-5%"), 0);
    }

    #[test]
    fn oversized_discount_is_still_deep() {
        assert_eq!(discount_value("99999999999999999999%"), i64::MAX);
        assert!(is_deep_discount(discount_value("-99999999999999999999%")));
        assert_eq!(discount_value("9x9999999999999999999%"), 0);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(is_deep_discount(discount_value("-55%")));
        assert!(is_deep_discount(51));
        assert!(!is_deep_discount(discount_value("50%")));
        assert!(!is_deep_discount(discount_value("abc%")));
        assert!(!is_deep_discount(discount_value("")));
    }
}
