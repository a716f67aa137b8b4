//! Post-selection strategies
//!
//! `unique` keeps one representative per superstring family and prints the
//! survivors in lexicographic order. `cover` greedily selects matches by
//! rank until every positive document containing any selected match has
//! been accounted for.

use anyhow::Result;
use memchr::memmem;
use std::io::Write;
use termcolor::WriteColor;

use super::score::{compare_score, Match};
use crate::output::print_bytes;

/// Superstring dedup: strongest-first by length, a match survives only if
/// it is not contained in an already-kept match. Survivors print in
/// lexicographic order, one per line.
pub fn print_unique<W: WriteColor>(
    out: &mut W,
    matches: &mut Vec<Match<'_>>,
    color: bool,
) -> Result<()> {
    matches.sort_by(|a, b| {
        b.text
            .len()
            .cmp(&a.text.len())
            .then_with(|| a.text.cmp(b.text))
    });

    let mut kept: Vec<&[u8]> = Vec::new();
    for m in matches.iter() {
        if kept.iter().any(|k| memmem::find(k, m.text).is_some()) {
            continue;
        }
        kept.push(m.text);
    }

    kept.sort();
    for text in kept {
        print_bytes(out, text, color)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Greedy minimum cover of the positive documents. Matches are taken in
/// rank order; each removes every remaining document it occurs in, and is
/// printed as `<hits>\t<match>` when it removed more than
/// `cover_threshold` documents. Stops once no documents remain.
pub fn print_cover<W: WriteColor>(
    out: &mut W,
    matches: &mut Vec<Match<'_>>,
    text: &[u8],
    document_ends: &[usize],
    cover_threshold: usize,
    color: bool,
) -> Result<()> {
    matches.sort_by(compare_score);

    let mut remaining: Vec<(usize, usize)> = Vec::with_capacity(document_ends.len());
    let mut start = 0;
    for &end in document_ends {
        remaining.push((start, end - start));
        start = end + 1;
    }

    for m in matches.iter() {
        if remaining.is_empty() {
            break;
        }

        let finder = memmem::Finder::new(m.text);
        let before = remaining.len();
        remaining.retain(|&(doc_start, doc_len)| {
            finder.find(&text[doc_start..doc_start + doc_len]).is_none()
        });
        let hits = before - remaining.len();

        if hits > cover_threshold {
            write!(out, "{}\t", hits)?;
            print_bytes(out, m.text, color)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::find_document_bounds;
    use termcolor::Buffer;

    fn m(text: &'static [u8], score: f64) -> Match<'static> {
        Match { text, score }
    }

    fn unique_lines(matches: &mut Vec<Match<'_>>) -> Vec<u8> {
        let mut buffer = Buffer::no_color();
        print_unique(&mut buffer, matches, false).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_unique_drops_substrings_of_kept() {
        let mut matches = vec![
            m(b"anana", 2.0),
            m(b"banana", 2.0),
            m(b"nana", 2.0),
            m(b"an", 4.0),
        ];
        assert_eq!(unique_lines(&mut matches), b"banana\n");
    }

    #[test]
    fn test_unique_emits_lexicographically() {
        let mut matches = vec![m(b"zebra", 1.0), m(b"apple", 3.0), m(b"mango", 2.0)];
        assert_eq!(unique_lines(&mut matches), b"apple\nmango\nzebra\n");
    }

    #[test]
    fn test_unique_deduplicates_identical() {
        let mut matches = vec![m(b"twin", 1.0), m(b"twin", 2.0)];
        assert_eq!(unique_lines(&mut matches), b"twin\n");
    }

    #[test]
    fn test_cover_removes_hit_documents() {
        let text = b"hello world\0hello there\0hello you\0";
        let ends = find_document_bounds(text);
        let mut matches = vec![m(b"hello ", 3.0), m(b"world", 1.0)];

        let mut buffer = Buffer::no_color();
        print_cover(&mut buffer, &mut matches, text, &ends, 1, false).unwrap();
        // "hello " clears all three documents; nothing is left for "world".
        assert_eq!(buffer.into_inner(), b"3\thello \n");
    }

    #[test]
    fn test_cover_threshold_suppresses_small_hits() {
        let text = b"alpha\0beta\0";
        let ends = find_document_bounds(text);
        let mut matches = vec![m(b"alpha", 2.0), m(b"beta", 1.0)];

        let mut buffer = Buffer::no_color();
        print_cover(&mut buffer, &mut matches, text, &ends, 1, false).unwrap();
        // Each match removes a single document, never exceeding the
        // threshold, so nothing prints even though the cover is complete.
        assert!(buffer.into_inner().is_empty());
    }
}
