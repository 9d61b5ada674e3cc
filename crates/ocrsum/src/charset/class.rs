//! Broad character classes for the class-accuracy section.
//!
//! Every character value falls into exactly one class. Variant order is the
//! order class rows appear in a written report, so the enum doubles as the
//! index into the aggregate's class buckets.

use unicode_normalization::char::is_combining_mark;

use super::CharValue;

/// The broad class a character's statistics are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// C0 and C1 control characters that are not spacing.
    Control,
    AsciiSpacing,
    AsciiSpecial,
    AsciiDigits,
    AsciiUppercase,
    AsciiLowercase,
    /// No-break space.
    Latin1Spacing,
    Latin1Special,
    Latin1Uppercase,
    Latin1Lowercase,
    UnicodeSpacing,
    UnicodeMarks,
    UnicodeLetters,
    UnicodeDigits,
    UnicodeOther,
    /// Sentinels, surrogates and other values with no scalar interpretation.
    Unrecognized,
}

impl CharClass {
    /// Number of classes, and the length of the aggregate's bucket array.
    pub const COUNT: usize = 16;

    /// All classes in report row order.
    pub const ALL: [CharClass; Self::COUNT] = [
        CharClass::Control,
        CharClass::AsciiSpacing,
        CharClass::AsciiSpecial,
        CharClass::AsciiDigits,
        CharClass::AsciiUppercase,
        CharClass::AsciiLowercase,
        CharClass::Latin1Spacing,
        CharClass::Latin1Special,
        CharClass::Latin1Uppercase,
        CharClass::Latin1Lowercase,
        CharClass::UnicodeSpacing,
        CharClass::UnicodeMarks,
        CharClass::UnicodeLetters,
        CharClass::UnicodeDigits,
        CharClass::UnicodeOther,
        CharClass::Unrecognized,
    ];

    /// Classify a character value.
    pub fn of(value: CharValue) -> CharClass {
        let Some(c) = value.to_char() else {
            return CharClass::Unrecognized;
        };
        match c {
            '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' => CharClass::AsciiSpacing,
            '0'..='9' => CharClass::AsciiDigits,
            'A'..='Z' => CharClass::AsciiUppercase,
            'a'..='z' => CharClass::AsciiLowercase,
            '!'..='~' => CharClass::AsciiSpecial,
            '\0'..='\u{1F}' | '\u{7F}'..='\u{9F}' => CharClass::Control,
            '\u{A0}' => CharClass::Latin1Spacing,
            '\u{A1}'..='\u{BF}' | '\u{D7}' | '\u{F7}' => CharClass::Latin1Special,
            '\u{C0}'..='\u{DE}' => CharClass::Latin1Uppercase,
            '\u{DF}'..='\u{FF}' => CharClass::Latin1Lowercase,
            _ if c.is_whitespace() => CharClass::UnicodeSpacing,
            _ if is_combining_mark(c) => CharClass::UnicodeMarks,
            _ if c.is_alphabetic() => CharClass::UnicodeLetters,
            _ if c.is_numeric() => CharClass::UnicodeDigits,
            _ => CharClass::UnicodeOther,
        }
    }

    /// Display name used for the class's row in the report.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Control => "Control Characters",
            CharClass::AsciiSpacing => "ASCII Spacing Characters",
            CharClass::AsciiSpecial => "ASCII Special Symbols",
            CharClass::AsciiDigits => "ASCII Digits",
            CharClass::AsciiUppercase => "ASCII Uppercase Letters",
            CharClass::AsciiLowercase => "ASCII Lowercase Letters",
            CharClass::Latin1Spacing => "Latin1 Spacing Characters",
            CharClass::Latin1Special => "Latin1 Special Symbols",
            CharClass::Latin1Uppercase => "Latin1 Uppercase Letters",
            CharClass::Latin1Lowercase => "Latin1 Lowercase Letters",
            CharClass::UnicodeSpacing => "Unicode Spacing Characters",
            CharClass::UnicodeMarks => "Unicode Combining Marks",
            CharClass::UnicodeLetters => "Unicode Letters",
            CharClass::UnicodeDigits => "Unicode Digits",
            CharClass::UnicodeOther => "Unicode Special Symbols",
            CharClass::Unrecognized => "Unrecognized Values",
        }
    }

    /// Position of this class's bucket, equal to its position in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}
