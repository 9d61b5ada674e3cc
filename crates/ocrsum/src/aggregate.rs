//! In-memory accumulation of accuracy statistics.
//!
//! An [`Aggregate`] holds everything one report carries: the scalar counters
//! from the header, the three operation-count rows, occurrence buckets at
//! class, grand-total and per-character granularity, and the confusion map.
//! Reading a report accumulates into an existing aggregate, so summing many
//! reports is just reading them one after another into the same value.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::charset::{CharClass, CharValue};

/// Occurrence and error counts for one character or one class of characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassBucket {
    /// How many times the character(s) occurred in ground truth.
    pub count: u64,
    /// How many of those occurrences were missed.
    pub missed: u64,
}

impl ClassBucket {
    fn add(&mut self, count: u64, missed: u64) {
        self.count += count;
        self.missed += missed;
    }
}

/// One row of the edit-operation table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounts {
    pub ins: u64,
    pub subst: u64,
    pub del: u64,
    pub errors: u64,
}

impl OpCounts {
    pub fn accumulate(&mut self, other: OpCounts) {
        self.ins += other.ins;
        self.subst += other.subst;
        self.del += other.del;
        self.errors += other.errors;
    }
}

/// Error and marked counts for one confusion key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionEntry {
    pub errors: u64,
    pub marked: u64,
}

impl ConfusionEntry {
    fn add(&mut self, errors: u64, marked: u64) {
        self.errors += errors;
        self.marked += marked;
    }
}

/// Accumulated statistics for one or more accuracy reports.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Ground-truth characters.
    pub characters: u64,
    /// Character errors.
    pub errors: u64,
    pub reject_characters: u64,
    pub suspect_markers: u64,
    pub false_marks: u64,
    pub marked_ops: OpCounts,
    pub unmarked_ops: OpCounts,
    pub total_ops: OpCounts,
    class_buckets: [ClassBucket; CharClass::COUNT],
    total_bucket: ClassBucket,
    char_buckets: BTreeMap<CharValue, ClassBucket>,
    confusions: AHashMap<Vec<u8>, ConfusionEntry>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `(count, missed)` for one character.
    ///
    /// The broad-class bucket, the grand-total bucket and the per-character
    /// bucket are always updated together, so the three granularities stay
    /// consistent views of the same occurrences.
    pub fn record_character(&mut self, value: CharValue, count: u64, missed: u64) {
        self.class_buckets[CharClass::of(value).index()].add(count, missed);
        self.total_bucket.add(count, missed);
        self.char_buckets.entry(value).or_default().add(count, missed);
    }

    /// Accumulate `(errors, marked)` for one confusion key.
    pub fn record_confusion(&mut self, key: &[u8], errors: u64, marked: u64) {
        if let Some(entry) = self.confusions.get_mut(key) {
            entry.add(errors, marked);
        } else {
            self.confusions
                .insert(key.to_vec(), ConfusionEntry { errors, marked });
        }
    }

    pub fn class_bucket(&self, class: CharClass) -> ClassBucket {
        self.class_buckets[class.index()]
    }

    pub fn total_bucket(&self) -> ClassBucket {
        self.total_bucket
    }

    /// Per-character buckets in ascending character-value order.
    pub fn character_buckets(&self) -> impl Iterator<Item = (CharValue, ClassBucket)> + '_ {
        self.char_buckets.iter().map(|(&value, &bucket)| (value, bucket))
    }

    /// Confusion entries in map order. Callers that need the report order
    /// sort the collected rows themselves.
    pub fn confusions(&self) -> impl Iterator<Item = (&[u8], ConfusionEntry)> + '_ {
        self.confusions.iter().map(|(key, &entry)| (key.as_slice(), entry))
    }

    /// Fold another aggregate into this one.
    pub fn merge(&mut self, other: Aggregate) {
        self.characters += other.characters;
        self.errors += other.errors;
        self.reject_characters += other.reject_characters;
        self.suspect_markers += other.suspect_markers;
        self.false_marks += other.false_marks;
        self.marked_ops.accumulate(other.marked_ops);
        self.unmarked_ops.accumulate(other.unmarked_ops);
        self.total_ops.accumulate(other.total_ops);
        for (ours, theirs) in self.class_buckets.iter_mut().zip(other.class_buckets) {
            ours.add(theirs.count, theirs.missed);
        }
        self.total_bucket.add(other.total_bucket.count, other.total_bucket.missed);
        for (value, bucket) in other.char_buckets {
            self.char_buckets
                .entry(value)
                .or_default()
                .add(bucket.count, bucket.missed);
        }
        for (key, entry) in other.confusions {
            if let Some(ours) = self.confusions.get_mut(&key) {
                ours.add(entry.errors, entry.marked);
            } else {
                self.confusions.insert(key, entry);
            }
        }
    }
}
