//! Maximal repeated substring enumeration
//!
//! Walks the LCP array of the positive corpus and emits every maximal
//! repeated substring together with its occurrence count. An interval opens
//! wherever the shared prefix grows past the previous rank's; it is then
//! extended rightward until the shared prefix dips below each open length,
//! closing candidates longest-first onto a stack. The stack is drained once
//! per interval, so callers see candidates grouped by interval, sharing one
//! representative text offset, in non-decreasing length order.
//!
//! When `document_ends` is supplied, a candidate's count is the number of
//! distinct documents its occurrence cluster touches rather than the raw
//! number of occurrences.

use anyhow::Result;
use roaring::RoaringBitmap;

use crate::corpus::document_index;

/// A maximal repeated substring: a view into the positive corpus plus its
/// multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Offset of the representative occurrence in the corpus buffer.
    pub start: usize,
    pub length: usize,
    /// Raw occurrences, or distinct documents in document mode.
    pub count: usize,
}

pub struct EnumerateOptions<'a> {
    /// Step between anchor offsets: 1, or 2 when anchors are byte pairs.
    pub stride: usize,
    /// Suppress a candidate whose count matches the one most recently
    /// stacked in the same interval, keeping only the longest of the chain.
    pub skip_samecount_prefixes: bool,
    /// When set, count distinct documents instead of occurrences.
    pub document_ends: Option<&'a [usize]>,
}

/// Enumerate repeated substrings over a filtered suffix array and its LCP
/// array, invoking `visit` once per LCP interval with the interval's
/// candidates in stack-pop order.
pub fn enumerate_repeats(
    suffixes: &[i32],
    lcp: &[usize],
    options: &EnumerateOptions<'_>,
    mut visit: impl FnMut(&[Candidate]) -> Result<()>,
) -> Result<()> {
    let suffix_count = suffixes.len();
    if suffix_count == 0 {
        return Ok(());
    }

    let mut previous_prefix = 0usize;
    let mut stack: Vec<Candidate> = Vec::new();
    let mut popped: Vec<Candidate> = Vec::new();
    let mut documents = RoaringBitmap::new();

    for i in 1..suffix_count {
        let prefix = lcp[i - 1];
        if prefix > previous_prefix {
            documents.clear();
            let mut count = 2usize;
            let mut j = i + 1;

            if let Some(ends) = options.document_ends {
                documents.insert(document_index(ends, suffixes[i - 1] as usize));
                documents.insert(document_index(ends, suffixes[i] as usize));
            }

            let mut length = prefix;
            while j <= suffix_count && length > previous_prefix {
                // The final LCP slot is 0, so every interval still open at
                // the end of the array closes here.
                if lcp[j - 1] < length {
                    let suppress = options.skip_samecount_prefixes
                        && stack.last().is_some_and(|top| top.count == count);
                    if !suppress {
                        stack.push(Candidate {
                            start: suffixes[i] as usize,
                            length,
                            count: match options.document_ends {
                                Some(_) => documents.len() as usize,
                                None => count,
                            },
                        });
                    }
                    length = length.saturating_sub(options.stride);
                    continue;
                }

                if let Some(ends) = options.document_ends {
                    documents.insert(document_index(ends, suffixes[j] as usize));
                }
                count += 1;
                j += 1;
            }

            if !stack.is_empty() {
                popped.clear();
                while let Some(candidate) = stack.pop() {
                    popped.push(candidate);
                }
                visit(&popped)?;
            }
        }

        previous_prefix = prefix;
    }

    Ok(())
}
