// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric parameter inputs.

/// Max speed used before the user edits the input box.
pub const DEFAULT_MAX_SPEED: f64 = 600.0;
/// Smallest accepted max speed; there is no ceiling.
pub const MIN_MAX_SPEED: f64 = 50.0;

/// Parses the leading decimal number of `text`, ignoring leading whitespace
/// and any trailing garbage (`"12.5px"` parses as `12.5`).
///
/// Returns `None` if no digits lead the text or the value is not finite.
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clamps `value` into `[min, max]`.
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Resolves the max-speed input text into the speed to apply.
///
/// Values below [`MIN_MAX_SPEED`] are raised to it. Unparseable text keeps
/// `previous`.
pub fn resolve_max_speed(text: &str, previous: f64) -> f64 {
    match parse_leading_f64(text) {
        Some(v) => constrain(v, MIN_MAX_SPEED, f64::INFINITY),
        None => {
            log::debug!("ignoring unparseable max speed {text:?}");
            previous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_numbers() {
        assert_eq!(parse_leading_f64("600"), Some(600.0));
        assert_eq!(parse_leading_f64("  12.5px"), Some(12.5));
        assert_eq!(parse_leading_f64("-3e2"), Some(-300.0));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("7."), Some(7.0));
        assert_eq!(parse_leading_f64("4e"), Some(4.0));
    }

    #[test]
    fn rejects_text_without_leading_digits() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("abc"), None);
        assert_eq!(parse_leading_f64("-."), None);
        assert_eq!(parse_leading_f64("inf"), None);
    }

    #[test]
    fn max_speed_is_floored_at_fifty() {
        assert_eq!(resolve_max_speed("10", DEFAULT_MAX_SPEED), 50.0);
        assert_eq!(resolve_max_speed("50", DEFAULT_MAX_SPEED), 50.0);
        assert_eq!(resolve_max_speed("1e6", DEFAULT_MAX_SPEED), 1.0e6);
    }

    #[test]
    fn garbage_keeps_previous_speed() {
        assert_eq!(resolve_max_speed("fast", 420.0), 420.0);
    }
}
