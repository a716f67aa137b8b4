//! LCP array construction
//!
//! Kasai-style linear-time construction over a *filtered* suffix array:
//! positions removed by the anchor filter carry a sentinel rank and only
//! decay the running prefix length. The delimiter is a hard stop, so no LCP
//! value ever extends across a document boundary.
//!
//! `lcp[x]` is the longest common prefix of the suffixes at ranks `x` and
//! `x + 1`; the slot for the highest rank is 0, which closes every open
//! interval when the enumerator reaches the end of the array.

use crate::corpus::DELIMITER;

const UNRANKED: usize = usize::MAX;

/// Build the LCP array for `suffixes`, a filtered lexicographic suffix
/// array over `text`.
pub fn lcp_array(text: &[u8], suffixes: &[i32]) -> Vec<usize> {
    let size = text.len();
    let count = suffixes.len();
    let mut lcp = vec![0usize; count];
    if count == 0 {
        return lcp;
    }

    let mut rank = vec![UNRANKED; size];
    for (r, &offset) in suffixes.iter().enumerate() {
        rank[offset as usize] = r;
    }

    // Dropping one leading byte shortens the shared prefix of the next text
    // position by at most one, so `h` only ever re-extends.
    let mut h = 0usize;
    for i in 0..size {
        let x = rank[i];
        if x == UNRANKED {
            h = h.saturating_sub(1);
            continue;
        }
        if x + 1 == count {
            // Highest rank has no successor; restart the decay chain.
            h = 0;
            continue;
        }

        let j = suffixes[x + 1] as usize;
        while i + h < size && j + h < size && text[i + h] != DELIMITER && text[i + h] == text[j + h]
        {
            h += 1;
        }
        lcp[x] = h;
        h = h.saturating_sub(1);
    }

    lcp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::suffix::{filter_anchors, sort_suffixes};

    fn naive_lcp(text: &[u8], a: usize, b: usize) -> usize {
        let mut h = 0;
        while a + h < text.len()
            && b + h < text.len()
            && text[a + h] != DELIMITER
            && text[b + h] != DELIMITER
            && text[a + h] == text[b + h]
        {
            h += 1;
        }
        h
    }

    fn check_against_naive(text: &[u8]) {
        let mut suffixes = sort_suffixes(text).unwrap();
        filter_anchors(&mut suffixes, text, 1);
        let lcp = lcp_array(text, &suffixes);
        for x in 0..suffixes.len().saturating_sub(1) {
            let expected = naive_lcp(text, suffixes[x] as usize, suffixes[x + 1] as usize);
            assert_eq!(lcp[x], expected, "rank {} of {:?}", x, text);
        }
        if let Some(last) = lcp.last() {
            assert_eq!(*last, 0);
        }
    }

    #[test]
    fn test_banana() {
        let text = b"banana\0";
        let mut suffixes = sort_suffixes(text).unwrap();
        filter_anchors(&mut suffixes, text, 1);
        // Ranks: a, ana, anana, banana, na, nana
        assert_eq!(lcp_array(text, &suffixes), vec![1, 3, 0, 0, 2, 0]);
    }

    #[test]
    fn test_delimiter_is_a_hard_stop() {
        // "ab\0x" and "ab\0y" share only "ab"; the LCP must not cross NUL.
        check_against_naive(b"ab\0xq\0ab\0yq\0");
    }

    #[test]
    fn test_matches_naive_on_varied_inputs() {
        check_against_naive(b"abcabc\0");
        check_against_naive(b"the cat sat\0the cat ran\0");
        check_against_naive(b"aaaaaaa\0aaa\0");
        check_against_naive(b"\0\0\0");
        check_against_naive(b"xyz");
    }

    #[test]
    fn test_filtered_positions_decay_correctly() {
        // Multi-byte characters leave unranked holes in the text.
        check_against_naive("caf\u{e9} caf\u{e9}\0".as_bytes());
    }

    #[test]
    fn test_empty() {
        assert!(lcp_array(b"", &[]).is_empty());
    }
}
