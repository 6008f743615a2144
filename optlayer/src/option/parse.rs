//! Lenient decimal parsing.
//!
//! Source text is never rejected: leading whitespace and one sign are
//! accepted, digits are consumed until the first non-digit, and whatever
//! follows is ignored. Text without digits parses as zero. Values outside
//! the target range saturate.

/// Splits optional leading whitespace and sign off `text`.
///
/// Returns whether the number is negative and the digit run that follows.
fn split_sign(text: &str) -> (bool, &str) {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    (negative, &rest[..end])
}

/// Accumulates an ASCII digit run, saturating at `u64::MAX`.
fn accumulate(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

/// Parse the leading decimal number of `text` as an unsigned value.
///
/// A leading `-` yields zero.
///
/// # Examples
///
/// ```
/// use optlayer::option::parse_unsigned;
///
/// assert_eq!(parse_unsigned("42abc"), 42);
/// assert_eq!(parse_unsigned("abc"), 0);
/// assert_eq!(parse_unsigned("99999999999"), u32::MAX);
/// ```
#[must_use]
pub fn parse_unsigned(text: &str) -> u32 {
    let (negative, digits) = split_sign(text);
    if negative {
        return 0;
    }
    u32::try_from(accumulate(digits)).unwrap_or(u32::MAX)
}

/// Parse the leading decimal number of `text` as a signed value.
///
/// # Examples
///
/// ```
/// use optlayer::option::parse_signed;
///
/// assert_eq!(parse_signed(" -15 px"), -15);
/// assert_eq!(parse_signed("+8"), 8);
/// assert_eq!(parse_signed("-"), 0);
/// ```
#[must_use]
pub fn parse_signed(text: &str) -> i32 {
    let (negative, digits) = split_sign(text);
    let magnitude = i64::try_from(accumulate(digits)).unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    saturate_i32(value)
}

/// Clamp a wide integer into the signed setting range.
#[must_use]
pub fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Clamp a wide integer into the unsigned setting range.
#[must_use]
pub fn saturate_u32(value: i64) -> u32 {
    if value < 0 {
        return 0;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}
