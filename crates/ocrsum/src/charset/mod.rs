//! Character values and their textual spellings inside accuracy reports.
//!
//! Reports never contain raw control or combining characters in their
//! per-character table. Instead, every character is spelled as a
//! bracket-delimited *token* (`{A}`, `{<41>}`, `{<\n>}`, …) that stays
//! readable while still representing arbitrary code points. This module owns
//! both directions of that encoding:
//!
//! - [`decode_token`] - token text to [`CharValue`] (the reader side),
//! - [`render_char`] - [`CharValue`] to token payload (the writer side),
//! - [`CharClass`] - the broad class a character's statistics are grouped
//!   under.
//!
//! `decode_token` applied to `"{" + render_char(v) + "}"` returns `v` for
//! every representable value.

mod class;
mod decode;
mod render;

pub use class::CharClass;
pub use decode::decode_token;
pub use render::render_char;

/// One decoded character.
///
/// Wide enough for any Unicode scalar value plus the reserved sentinels
/// below. Hex escapes can also produce values that are not valid scalars
/// (surrogates, values above U+10FFFF); those are carried verbatim and
/// classified as [`CharClass::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharValue(pub u32);

/// The newline-as-data token (`{<\n>}`). Numerically the LINE FEED character,
/// but produced only by its escape spelling - a raw newline byte is always a
/// line terminator, never token payload.
pub const NEWLINE_CHAR: CharValue = CharValue(b'\n' as u32);

/// Sentinel for a token that could not be decoded.
pub const INVALID_CHAR: CharValue = CharValue(u32::MAX);

/// U+25CC DOTTED CIRCLE, the placeholder base a combining mark is rendered on.
pub const COMBINING_BASE: CharValue = CharValue(0x25CC);

impl CharValue {
    /// The value as a `char`, or `None` for sentinels and non-scalar values.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub fn is_invalid(self) -> bool {
        self == INVALID_CHAR
    }
}

impl From<char> for CharValue {
    fn from(c: char) -> Self {
        CharValue(c as u32)
    }
}
