//! Character-token decoder.
//!
//! Grammar, checked byte by byte over the raw line:
//!
//! - `{<HH>}` - hexadecimal escape, one or more hex digits.
//! - `{<\n>}` - the newline-as-data sentinel (literal backslash, `n`).
//! - `{<}` - a stray literal `<`; the missing `>` disambiguates it from an
//!   escape.
//! - `{X}` - one UTF-8 encoded character (1-4 bytes).
//! - `{◌Y}` - a dotted-circle base followed by a combining mark; the token's
//!   value is the mark alone, the base identity is discarded.
//!
//! Anything else decodes to [`INVALID_CHAR`]. Bytes after the closing `}` are
//! ignored, so the token may sit at the end of a longer line.

use super::{CharValue, COMBINING_BASE, INVALID_CHAR, NEWLINE_CHAR};

/// Decode one bracket-delimited character token.
///
/// `token` must begin at the `{` delimiter. Returns [`INVALID_CHAR`] for any
/// deviation from the grammar: unexpected byte, missing terminator, invalid
/// hex, truncated or malformed UTF-8.
pub fn decode_token(token: &[u8]) -> CharValue {
    parse_token(token).unwrap_or(INVALID_CHAR)
}

fn parse_token(token: &[u8]) -> Option<CharValue> {
    let body = token.strip_prefix(b"{")?;
    let (value, rest) = if body.first() == Some(&b'<') {
        parse_escape(&body[1..])?
    } else {
        parse_encoded(body)?
    };
    if rest.first() == Some(&b'}') {
        Some(value)
    } else {
        None
    }
}

/// Parse the escape forms, positioned just past the `<`.
fn parse_escape(body: &[u8]) -> Option<(CharValue, &[u8])> {
    if body.first() == Some(&b'}') {
        // No `>` follows at all: a stray literal `<`.
        return Some((CharValue(u32::from(b'<')), body));
    }
    if let Some(rest) = body.strip_prefix(b"\\n") {
        let rest = rest.strip_prefix(b">")?;
        return Some((NEWLINE_CHAR, rest));
    }
    let (value, rest) = parse_hex(body)?;
    let rest = rest.strip_prefix(b">")?;
    Some((CharValue(value), rest))
}

/// Parse one or more hex digits into a u32. Overflow is a parse failure.
fn parse_hex(body: &[u8]) -> Option<(u32, &[u8])> {
    let digits = body
        .iter()
        .position(|b| !b.is_ascii_hexdigit())
        .unwrap_or(body.len());
    if digits == 0 {
        return None;
    }
    let mut value: u32 = 0;
    for &b in &body[..digits] {
        let digit = (b as char).to_digit(16)?;
        value = value.checked_mul(16)?.checked_add(digit)?;
    }
    Some((value, &body[digits..]))
}

/// Parse a UTF-8 encoded character, with the combining-mark special case.
fn parse_encoded(body: &[u8]) -> Option<(CharValue, &[u8])> {
    let (first, len) = decode_utf8_prefix(body)?;
    let mut value = CharValue::from(first);
    let mut rest = &body[len..];
    if value == COMBINING_BASE && rest.first() != Some(&b'}') {
        // The dotted circle is only a display base here; the character the
        // row is about is the combining mark that follows. Combining marks
        // are never ASCII, so a single-byte sequence cannot be one.
        let (mark, mark_len) = decode_utf8_prefix(rest)?;
        if mark_len < 2 {
            return None;
        }
        value = CharValue::from(mark);
        rest = &rest[mark_len..];
    }
    Some((value, rest))
}

/// Decode the single UTF-8 character at the start of `bytes`.
///
/// Returns the character and the number of bytes it occupied.
fn decode_utf8_prefix(bytes: &[u8]) -> Option<(char, usize)> {
    let len = match bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let sequence = bytes.get(..len)?;
    std::str::from_utf8(sequence)
        .ok()?
        .chars()
        .next()
        .map(|c| (c, len))
}
