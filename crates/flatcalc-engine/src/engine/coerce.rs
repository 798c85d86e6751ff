//! Explicit conversions from token text to numbers.

/// Parse the leading integer of `text`: an optional sign and at least one
/// ASCII digit. Anything after the digits is ignored, so `"12abc"` is 12 and
/// `"3.7"` is 3. Integers too wide for `i64` are kept as the nearest `f64`.
pub fn parse_integer_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Parse a whole token as a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
