//! Byte-oriented line scanning over an in-memory report.
//!
//! Confusion keys may hold arbitrary bytes, so lines are handled as byte
//! slices and never forced through UTF-8 validation.

use memchr::memchr;

/// Splits a byte buffer into lines, tracking the current line number.
pub struct LineScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    line_number: u64,
}

impl<'a> LineScanner<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        LineScanner { bytes, pos: 0, line_number: 0 }
    }

    /// The next line without its terminator, or `None` at end of input.
    ///
    /// A lone `\r` before the `\n` is stripped, so CRLF input reads the same
    /// as LF input. A final line without a terminator still counts.
    pub fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let rest = &self.bytes[self.pos..];
        let (mut line, advance) = match memchr(b'\n', rest) {
            Some(nl) => (&rest[..nl], nl + 1),
            None => (rest, rest.len()),
        };
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        self.pos += advance;
        self.line_number += 1;
        Some(line)
    }

    /// 1-based number of the line most recently returned.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_newline() {
        let mut scanner = LineScanner::new(b"one\ntwo\nthree\n");
        assert_eq!(scanner.next_line(), Some(&b"one"[..]));
        assert_eq!(scanner.next_line(), Some(&b"two"[..]));
        assert_eq!(scanner.next_line(), Some(&b"three"[..]));
        assert_eq!(scanner.next_line(), None);
    }

    #[test]
    fn test_strips_carriage_return() {
        let mut scanner = LineScanner::new(b"one\r\ntwo\r\n");
        assert_eq!(scanner.next_line(), Some(&b"one"[..]));
        assert_eq!(scanner.next_line(), Some(&b"two"[..]));
        assert_eq!(scanner.next_line(), None);
    }

    #[test]
    fn test_final_line_without_terminator() {
        let mut scanner = LineScanner::new(b"one\ntwo");
        assert_eq!(scanner.next_line(), Some(&b"one"[..]));
        assert_eq!(scanner.next_line(), Some(&b"two"[..]));
        assert_eq!(scanner.next_line(), None);
    }

    #[test]
    fn test_blank_lines_are_empty_slices() {
        let mut scanner = LineScanner::new(b"a\n\nb\n");
        assert_eq!(scanner.next_line(), Some(&b"a"[..]));
        assert_eq!(scanner.next_line(), Some(&b""[..]));
        assert_eq!(scanner.next_line(), Some(&b"b"[..]));
    }

    #[test]
    fn test_line_numbers() {
        let mut scanner = LineScanner::new(b"a\nb\n");
        assert_eq!(scanner.line_number(), 0);
        scanner.next_line();
        assert_eq!(scanner.line_number(), 1);
        scanner.next_line();
        assert_eq!(scanner.line_number(), 2);
        scanner.next_line();
        assert_eq!(scanner.line_number(), 2);
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = LineScanner::new(b"");
        assert_eq!(scanner.next_line(), None);
    }

    #[test]
    fn test_interior_carriage_return_is_kept() {
        let mut scanner = LineScanner::new(b"a\rb\n");
        assert_eq!(scanner.next_line(), Some(&b"a\rb"[..]));
    }
}
