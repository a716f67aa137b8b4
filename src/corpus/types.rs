//! Byte-buffer corpus model
//!
//! A corpus is one contiguous byte buffer in which individual documents are
//! separated by a NUL delimiter. All derived structures (document bounds,
//! n-gram histograms) are computed over this flat buffer; substring
//! occurrences never cross a delimiter.

use memchr::memchr_iter;
use memmap2::Mmap;

/// Byte separating documents inside a corpus buffer.
pub const DELIMITER: u8 = 0x00;

enum Buffer {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Owned(v) => v,
            Buffer::Mapped(m) => m,
        }
    }
}

/// A corpus buffer together with its document bounds.
pub struct Corpus {
    buffer: Buffer,
    document_ends: Vec<usize>,
}

impl Corpus {
    pub fn new(text: Vec<u8>) -> Self {
        let document_ends = find_document_bounds(&text);
        Self {
            buffer: Buffer::Owned(text),
            document_ends,
        }
    }

    /// Wrap a memory-mapped file without copying it.
    pub fn from_mmap(map: Mmap) -> Self {
        let document_ends = find_document_bounds(&map);
        Self {
            buffer: Buffer::Mapped(map),
            document_ends,
        }
    }

    pub fn text(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    pub fn len(&self) -> usize {
        self.text().len()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Sorted offsets of the delimiter terminating each document; the last
    /// entry is the buffer length when the final document is unterminated.
    pub fn document_ends(&self) -> &[usize] {
        &self.document_ends
    }

    pub fn document_count(&self) -> usize {
        self.document_ends.len()
    }

    /// `(start, length)` byte span of every document, in buffer order.
    pub fn document_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = Vec::with_capacity(self.document_ends.len());
        let mut start = 0;
        for &end in &self.document_ends {
            spans.push((start, end - start));
            start = end + 1;
        }
        spans
    }

    pub fn longest_document(&self) -> usize {
        self.document_spans()
            .iter()
            .map(|&(_, len)| len)
            .max()
            .unwrap_or(0)
    }

    /// For each length `l`, the number of windows `[p, p + l)` lying entirely
    /// within one document. Indexed by `l`; sized by the longest document
    /// plus one. Used as prior mass when scoring.
    pub fn ngram_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64];
        let mut start = 0;
        for &end in &self.document_ends {
            let len = end - start;
            if counts.len() <= len {
                counts.resize(len + 1, 0);
            }
            for l in 1..=len {
                counts[l] += 1;
            }
            start = end + 1;
        }
        counts
    }
}

/// Scan for document bounds: the offset of each delimiter, plus the buffer
/// length when the buffer does not end on a delimiter. Always yields at
/// least one entry; an empty buffer holds a single empty document.
pub fn find_document_bounds(text: &[u8]) -> Vec<usize> {
    let mut ends: Vec<usize> = memchr_iter(DELIMITER, text).collect();
    if text.last() != Some(&DELIMITER) {
        ends.push(text.len());
    }
    ends
}

/// Index of the document containing the byte at `offset`, given sorted
/// document ends.
pub fn document_index(document_ends: &[usize], offset: usize) -> u32 {
    document_ends.partition_point(|&end| end < offset) as u32
}
