//! Coercion for raw form input. The aggregators assume their inputs are
//! already in range; every value coming off a form field passes through
//! these helpers first, and malformed text becomes 0 rather than an error.

/// Clamp a percentage to the 0-100 range. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    value.max(0.0).min(100.0)
}

/// Clamp a risk impact or probability rating to the 1-5 matrix scale.
pub fn clamp_scale(value: u8) -> u8 {
    value.clamp(1, 5)
}

/// Parse a percentage field. Empty or unparseable input is 0; anything else
/// is clamped to 0-100.
pub fn parse_percent(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    clamp_percent(trimmed.parse().unwrap_or(0.0))
}

/// Parse a currency amount field. Empty or unparseable input is 0. No
/// rounding happens here; amounts stay fractional until display time.
pub fn parse_amount(raw: &str) -> f64 {
    let parsed: f64 = raw.trim().parse().unwrap_or(0.0);
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }

    #[test]
    fn clamp_scale_bounds() {
        assert_eq!(clamp_scale(0), 1);
        assert_eq!(clamp_scale(3), 3);
        assert_eq!(clamp_scale(200), 5);
    }

    #[test]
    fn parse_percent_coerces_garbage_to_zero() {
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("abc"), 0.0);
        assert_eq!(parse_percent(" 60 "), 60.0);
        assert_eq!(parse_percent("250"), 100.0);
    }

    #[test]
    fn parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("12.75"), 12.75);
        assert_eq!(parse_amount("-300"), -300.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e3x"), 0.0);
    }
}
