//! End-to-end reader/writer fidelity on realistic report text.

use ocrsum::report::format::TITLE_PREFIX;
use ocrsum::{read_report, render_report, Aggregate, CharClass, CharValue};

/// An authentic single-page report: header, class section, confusion table
/// and per-character table, all column-exact.
fn page_report() -> String {
    format!(
        "{TITLE_PREFIX}{version}\n\
         -----------------------------------\n\
         \x20    216   Characters\n\
         \x20     13   Errors\n\
         \x20  93.98%  Accuracy\n\
         \n\
         \x20      0   Reject Characters\n\
         \x20      4   Suspect Markers\n\
         \x20      2   False Marks\n\
         \x20   1.85%  Characters Marked\n\
         \x20  96.76%  Accuracy After Correction\n\
         \n\
         \x20    Ins    Subst      Del   Errors\n\
         \x20      1        3        2        6   Marked\n\
         \x20      2        4        1        7   Unmarked\n\
         \x20      3        7        3       13   Total\n\
         \n\
         \x20  Count   Missed   %Right\n\
         \x20      3        1    66.67   ASCII Spacing Characters\n\
         \x20      5        0   100.00   ASCII Digits\n\
         \x20    208       12    94.23   ASCII Lowercase Letters\n\
         \x20    216       13    93.98   Total\n\
         \n\
         \x20 Errors   Marked   Correct-Generated\n\
         \x20      4        2   e-c\n\
         \x20      3        1   l-1\n\
         \x20      2        0   rn-m\n\
         \x20      1        1   i-l\n\
         \n\
         \x20  Count   Missed   %Right\n\
         \x20      3        1    66.67   {{<\\n>}}\n\
         \x20      5        0   100.00   {{7}}\n\
         \x20    100        5    95.00   {{e}}\n\
         \x20    108        7    93.52   {{l}}\n",
        version = env!("CARGO_PKG_VERSION")
    )
}

#[test]
fn test_read_populates_every_table() {
    let mut aggregate = Aggregate::new();
    let summary = read_report("page", page_report().as_bytes(), &mut aggregate).unwrap();

    assert_eq!(aggregate.characters, 216);
    assert_eq!(aggregate.errors, 13);
    assert_eq!(aggregate.reject_characters, 0);
    assert_eq!(aggregate.suspect_markers, 4);
    assert_eq!(aggregate.false_marks, 2);
    assert_eq!(aggregate.marked_ops.errors, 6);
    assert_eq!(aggregate.unmarked_ops.errors, 7);
    assert_eq!(aggregate.total_ops.ins, 3);
    assert_eq!(summary.confusion_rows, 4);
    assert_eq!(summary.character_rows, 4);
    assert!(summary.warnings.is_empty());

    // Class statistics come from the per-character rows.
    assert_eq!(aggregate.class_bucket(CharClass::AsciiSpacing).count, 3);
    assert_eq!(aggregate.class_bucket(CharClass::AsciiDigits).count, 5);
    assert_eq!(aggregate.class_bucket(CharClass::AsciiLowercase).count, 208);
    assert_eq!(aggregate.class_bucket(CharClass::AsciiLowercase).missed, 12);
    assert_eq!(aggregate.total_bucket().count, 216);
    assert_eq!(aggregate.total_bucket().missed, 13);
}

#[test]
fn test_write_after_read_reproduces_the_bytes() {
    let report = page_report();
    let mut aggregate = Aggregate::new();
    read_report("page", report.as_bytes(), &mut aggregate).unwrap();

    let written = render_report(&aggregate).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), report);
}

#[test]
fn test_summing_a_report_with_itself_doubles_everything() {
    let report = page_report();
    let mut aggregate = Aggregate::new();
    read_report("page", report.as_bytes(), &mut aggregate).unwrap();
    read_report("page", report.as_bytes(), &mut aggregate).unwrap();

    assert_eq!(aggregate.characters, 432);
    assert_eq!(aggregate.errors, 26);
    assert_eq!(aggregate.total_ops.errors, 26);
    assert_eq!(aggregate.class_bucket(CharClass::AsciiLowercase).count, 416);
    assert_eq!(aggregate.total_bucket().missed, 26);
    let newline_bucket = aggregate
        .character_buckets()
        .next()
        .expect("per-character buckets present");
    assert_eq!(newline_bucket.0, ocrsum::NEWLINE_CHAR);
    assert_eq!(newline_bucket.1.count, 6);
    let confusion_total: u64 = aggregate.confusions().map(|(_, e)| e.errors).sum();
    assert_eq!(confusion_total, 20);
}

/// Zero ground-truth characters with insertion errors only: percentage
/// denominators are zero and the per-character section disappears.
fn insertions_only_report() -> String {
    format!(
        "{TITLE_PREFIX}{version}\n\
         -----------------------------------\n\
         \x20      0   Characters\n\
         \x20      9   Errors\n\
         \x20 ------%  Accuracy\n\
         \n\
         \x20      0   Reject Characters\n\
         \x20      0   Suspect Markers\n\
         \x20      0   False Marks\n\
         \x20 ------%  Characters Marked\n\
         \x20 ------%  Accuracy After Correction\n\
         \n\
         \x20    Ins    Subst      Del   Errors\n\
         \x20      9        0        0        9   Marked\n\
         \x20      0        0        0        0   Unmarked\n\
         \x20      9        0        0        9   Total\n\
         \n\
         \x20  Count   Missed   %Right\n\
         \x20      0        0   ------   Total\n\
         \n\
         \x20 Errors   Marked   Correct-Generated\n\
         \x20      9        0   -x\n",
        version = env!("CARGO_PKG_VERSION")
    )
}

#[test]
fn test_zero_characters_report_roundtrips() {
    let report = insertions_only_report();
    let mut aggregate = Aggregate::new();
    let summary = read_report("inserts", report.as_bytes(), &mut aggregate).unwrap();
    assert_eq!(summary.confusion_rows, 1);
    assert_eq!(summary.character_rows, 0);
    assert_eq!(aggregate.characters, 0);
    assert_eq!(aggregate.errors, 9);

    let written = render_report(&aggregate).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), report);
}

#[test]
fn test_second_report_truncated_after_class_section() {
    let mut first = Aggregate::new();
    first.characters = 100;
    first.errors = 5;
    first.total_ops = ocrsum::OpCounts { ins: 1, subst: 3, del: 1, errors: 5 };
    first.record_character(CharValue::from('T'), 40, 2);
    first.record_character(CharValue::from('e'), 60, 3);
    first.record_confusion(b"e-c", 5, 0);

    let mut second = Aggregate::new();
    second.characters = 50;
    second.record_character(CharValue::from('z'), 50, 0);

    let first_text = render_report(&first).unwrap();
    let second_text = String::from_utf8(render_report(&second).unwrap()).unwrap();
    // Keep the second report only through its class-accuracy section.
    let truncated: String = second_text.split_inclusive('\n').take(20).collect();
    assert!(truncated.ends_with("   Total\n"));

    let mut sum = Aggregate::new();
    read_report("first", &first_text, &mut sum).unwrap();
    read_report("second", truncated.as_bytes(), &mut sum).unwrap();

    assert_eq!(sum.characters, 150);
    assert_eq!(sum.errors, 5);
    // Only the first report reached its per-character table.
    assert_eq!(sum.total_bucket().count, 100);
    let values: Vec<_> = sum.character_buckets().map(|(v, _)| v).collect();
    assert_eq!(values, vec![CharValue::from('T'), CharValue::from('e')]);

    let text = String::from_utf8(render_report(&sum).unwrap()).unwrap();
    assert!(text.contains("     150   Characters"));
    assert!(text.contains("{T}"));
    assert!(!text.contains("{z}"));
}

#[test]
fn test_mixed_sum_of_both_fixtures() {
    let mut aggregate = Aggregate::new();
    read_report("page", page_report().as_bytes(), &mut aggregate).unwrap();
    read_report("inserts", insertions_only_report().as_bytes(), &mut aggregate).unwrap();

    assert_eq!(aggregate.characters, 216);
    assert_eq!(aggregate.errors, 22);
    assert_eq!(aggregate.marked_ops.ins, 10);
    assert_eq!(aggregate.total_ops.errors, 22);
    // One confusion key from each file plus the shared ones.
    assert_eq!(aggregate.confusions().count(), 5);

    // Summed output still reads back to the identical serialization.
    let first = render_report(&aggregate).unwrap();
    let mut reread = Aggregate::new();
    read_report("sum", &first, &mut reread).unwrap();
    assert_eq!(render_report(&reread).unwrap(), first);
}
