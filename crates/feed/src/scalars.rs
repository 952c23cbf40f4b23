// ABOUTME: Small scalar encoders shared by every namespace writer.
// ABOUTME: Boolean tokens (yes/no, true/false) and shortest-form decimal rendering.

use crate::error::EncodeError;

/// Renders `true`/`false` as `yes`/`no`, the token set used by `podcast:locked`.
pub fn encode_yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Renders `true`/`false` literally, as used by `itunes:explicit` and friends.
pub fn encode_true_false(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses the `yes`/`no` token set. Case-insensitive.
pub fn parse_yes_no(s: &str) -> Result<bool, EncodeError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(EncodeError::parse(format!("expected yes or no, got {:?}", other))),
    }
}

/// Formats a float with the fewest digits that round-trip, never in exponent form.
/// Integral values carry no decimal point: `3900000.0` becomes `"3900000"`.
pub fn trim_decimal(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0.0 as well.
        return "0".to_string();
    }
    format!("{}", value)
}

/// Like [`trim_decimal`] but rejects NaN and infinities.
pub(crate) fn finite_decimal(element: &'static str, value: f64) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::invalid(
            element,
            format!("{} is not a finite number", value),
        ));
    }
    Ok(trim_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(encode_yes_no(true), "yes");
        assert_eq!(encode_yes_no(false), "no");
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no(" no "), Ok(false));
        assert!(parse_yes_no("true").is_err());
    }

    #[test]
    fn test_true_false() {
        assert_eq!(encode_true_false(true), "true");
        assert_eq!(encode_true_false(false), "false");
    }

    #[test]
    fn test_trim_decimal() {
        assert_eq!(trim_decimal(3900000.0), "3900000");
        assert_eq!(trim_decimal(39.7837304), "39.7837304");
        assert_eq!(trim_decimal(-100.445882), "-100.445882");
        assert_eq!(trim_decimal(315.5), "315.5");
        assert_eq!(trim_decimal(-0.0), "0");
        assert_eq!(trim_decimal(0.0000001), "0.0000001");
    }

    #[test]
    fn test_finite_decimal_rejects_nan() {
        assert!(finite_decimal("podcast:value", f64::NAN).is_err());
        assert!(finite_decimal("podcast:value", f64::INFINITY).is_err());
        assert_eq!(finite_decimal("podcast:value", 1.5).unwrap(), "1.5");
    }
}
