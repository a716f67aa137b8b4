//! Negative-corpus occurrence lookup
//!
//! Finds the half-open range of suffixes in the negative corpus's array
//! whose prefixes equal a candidate. Rather than binary-searching the whole
//! array per candidate, the search window grows 1024 suffixes at a time from
//! a cursor that only moves forward: candidates within one LCP interval
//! share a text offset with non-decreasing lengths, so their lower bounds
//! are themselves non-decreasing. The cursor must be reset between
//! intervals.

use std::cmp::Ordering;

const SEARCH_WINDOW: usize = 1024;

pub struct NegativeLookup<'a> {
    text: &'a [u8],
    suffixes: &'a [i32],
    cursor: usize,
}

impl<'a> NegativeLookup<'a> {
    pub fn new(text: &'a [u8], suffixes: &'a [i32]) -> Self {
        Self {
            text,
            suffixes,
            cursor: 0,
        }
    }

    /// Rewind the cursor. Call before the first candidate of each interval.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Half-open suffix-array range `[lo, hi)` whose suffixes start with
    /// `needle`. Advances the cursor to `lo`.
    pub fn bounds(&mut self, needle: &[u8]) -> (usize, usize) {
        let lo = self.windowed(self.cursor, |suffix| {
            suffix_less_than(self.text, suffix, needle)
        });
        self.cursor = lo;
        let hi = self.windowed(lo, |suffix| suffix_has_prefix(self.text, suffix, needle));
        (lo, hi)
    }

    /// Number of suffixes starting with `needle`.
    pub fn count(&mut self, needle: &[u8]) -> usize {
        let (lo, hi) = self.bounds(needle);
        hi - lo
    }

    /// First index at or after `from` where `pred` turns false, growing the
    /// probe window until the boundary lands strictly inside it or the array
    /// is exhausted.
    fn windowed(&self, mut from: usize, pred: impl Fn(usize) -> bool) -> usize {
        let total = self.suffixes.len();
        loop {
            let end = (from + SEARCH_WINDOW).min(total);
            let found = from
                + self.suffixes[from..end]
                    .partition_point(|&suffix| pred(suffix as usize));
            if found == end && end != total {
                from = end;
                continue;
            }
            return found;
        }
    }
}

/// Whether the suffix at `offset` orders before a query of `needle`'s exact
/// length: its leading bytes are smaller, or they match but the suffix runs
/// out before the query does.
fn suffix_less_than(text: &[u8], offset: usize, needle: &[u8]) -> bool {
    let rest = &text[offset..];
    let shared = needle.len().min(rest.len());
    match rest[..shared].cmp(&needle[..shared]) {
        Ordering::Less => true,
        Ordering::Equal => rest.len() < needle.len(),
        Ordering::Greater => false,
    }
}

/// Whether the suffix at `offset` has at least `needle.len()` bytes left and
/// they equal the needle.
fn suffix_has_prefix(text: &[u8], offset: usize, needle: &[u8]) -> bool {
    let rest = &text[offset..];
    rest.len() >= needle.len() && &rest[..needle.len()] == needle
}
