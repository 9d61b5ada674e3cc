//! Fixed pieces of the report text format.
//!
//! Readers and writers both depend on these byte-exact values; offsets in
//! particular decide where a table row's trailing text field begins, so they
//! must match the widths the row formats produce.

/// Title line up to the version number. The reader matches this prefix and
/// ignores the version, so reports from any release aggregate together.
pub const TITLE_PREFIX: &str = "ocrsum Accuracy Report Version ";

/// Second line of every report, exactly 35 dashes.
pub const DIVIDER: &str = "-----------------------------------";

/// Header over the three operation-count rows.
pub const OPS_HEADER: &str = "     Ins    Subst      Del   Errors";

/// Header over class-accuracy rows and per-character rows.
pub const CLASS_HEADER: &str = "   Count   Missed   %Right";

/// Header over the confusion table.
pub const CONFUSION_HEADER: &str = "  Errors   Marked   Correct-Generated";

/// Width of every right-aligned numeric field.
pub const NUMERIC_WIDTH: usize = 8;

/// Written in place of a percentage whose denominator is zero.
pub const PCT_PLACEHOLDER: &str = "  ------";

/// Byte offset of the key in a confusion row: two numeric fields, a space
/// and a three-space gap.
pub const CONFUSION_KEY_OFFSET: usize = 2 * (NUMERIC_WIDTH + 1) + 2;

/// Byte offset of the character token in a per-character row: three numeric
/// fields, two spaces and a three-space gap.
pub const CHAR_TOKEN_OFFSET: usize = 3 * (NUMERIC_WIDTH + 1) + 2;
