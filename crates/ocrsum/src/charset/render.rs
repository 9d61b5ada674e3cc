//! Character rendering for the per-character table.
//!
//! Produces the payload between a token's braces. Characters that would
//! break the line-oriented format (controls, the newline value) or that have
//! no scalar interpretation are spelled as hex escapes; combining marks get
//! a dotted-circle base so they have something visible to attach to.

use unicode_normalization::char::is_combining_mark;

use super::{CharValue, NEWLINE_CHAR};

/// Render a character value as token payload.
///
/// [`crate::charset::decode_token`] applied to the payload wrapped in braces
/// recovers the original value.
pub fn render_char(value: CharValue) -> String {
    if value == NEWLINE_CHAR {
        return "<\\n>".to_string();
    }
    let Some(c) = value.to_char() else {
        return format!("<{:X}>", value.0);
    };
    if c.is_control() {
        format!("<{:X}>", value.0)
    } else if is_combining_mark(c) {
        format!("\u{25CC}{c}")
    } else {
        c.to_string()
    }
}
