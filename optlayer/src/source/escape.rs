//! Single-character decoding with backslash escapes.

/// Character returned when the text cannot be decoded.
const FALLBACK: char = '\n';

fn simple_escape(c: char) -> Option<char> {
    Some(match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        '\\' => '\\',
        '0' => '\0',
        _ => return None,
    })
}

fn hex_escape(digits: &str) -> Option<char> {
    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    u32::from_str_radix(&digits[..end], 16)
        .ok()
        .and_then(char::from_u32)
}

/// Decode one character from `text`.
///
/// Accepts a single literal character, one of the escapes
/// `\a \b \f \n \r \t \v \\ \0`, or a hexadecimal `\xHH` escape. Anything
/// else is logged and decodes to a newline.
///
/// # Examples
///
/// ```
/// use optlayer::source::parse_char;
///
/// assert_eq!(parse_char("|"), '|');
/// assert_eq!(parse_char("\\t"), '\t');
/// assert_eq!(parse_char("\\x1f"), '\x1f');
/// assert_eq!(parse_char("bogus"), '\n');
/// ```
#[must_use]
pub fn parse_char(text: &str) -> char {
    let mut chars = text.chars();
    let first = chars.next();
    let rest = chars.as_str();

    match first {
        Some(c) if rest.is_empty() => return c,
        Some('\\') => {
            let mut escape = rest.chars();
            let decoded = match (escape.next(), escape.as_str()) {
                (Some(e), "") => simple_escape(e),
                (Some('x'), digits) => hex_escape(digits),
                _ => None,
            };
            if let Some(c) = decoded {
                return c;
            }
        }
        _ => {}
    }

    log::warn!("Failed to parse character string: \"{text}\"");
    FALLBACK
}
