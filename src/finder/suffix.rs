//! Suffix sorting and anchor filtering
//!
//! Sorting is delegated to divsufsort; the filter then keeps only offsets
//! that are eligible as the start of a reported substring.

use anyhow::{ensure, Result};

use crate::corpus::DELIMITER;

/// Lexicographically sorted suffix offsets for `text`.
pub fn sort_suffixes(text: &[u8]) -> Result<Vec<i32>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    ensure!(
        text.len() <= i32::MAX as usize,
        "corpus too large to index ({} bytes)",
        text.len()
    );

    let mut suffixes = vec![0i32; text.len()];
    cdivsufsort::sort_in_place(text, &mut suffixes);
    Ok(suffixes)
}

/// Remove suffixes that cannot anchor a reported substring: those starting
/// at a delimiter, at a UTF-8 continuation byte, or at an odd offset when
/// anchors step in pairs (`stride == 2`). The pass is stable, so the
/// surviving offsets stay in lexicographic order.
pub fn filter_anchors(suffixes: &mut Vec<i32>, text: &[u8], stride: usize) {
    suffixes.retain(|&offset| {
        let offset = offset as usize;
        if stride == 2 && offset & 1 == 1 {
            return false;
        }
        let byte = text[offset];
        byte != DELIMITER && byte & 0xC0 != 0x80
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_sort(text: &[u8]) -> Vec<i32> {
        let mut suffixes: Vec<i32> = (0..text.len() as i32).collect();
        suffixes.sort_by_key(|&offset| &text[offset as usize..]);
        suffixes
    }

    #[test]
    fn test_sort_order() {
        let text = b"banana\0";
        assert_eq!(sort_suffixes(text).unwrap(), naive_sort(text));
    }

    #[test]
    fn test_sort_two_documents() {
        let text = b"abcabc\0abc\0";
        assert_eq!(sort_suffixes(text).unwrap(), naive_sort(text));
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_suffixes(b"").unwrap().is_empty());
    }

    #[test]
    fn test_filter_drops_delimiters() {
        let text = b"ab\0cd";
        let mut suffixes = sort_suffixes(text).unwrap();
        filter_anchors(&mut suffixes, text, 1);
        assert!(suffixes.iter().all(|&o| text[o as usize] != DELIMITER));
        assert_eq!(suffixes.len(), 4);
    }

    #[test]
    fn test_filter_drops_continuation_bytes() {
        // "é" is 0xC3 0xA9; the continuation byte must not anchor.
        let text = "x\u{e9}y".as_bytes();
        let mut suffixes = sort_suffixes(text).unwrap();
        filter_anchors(&mut suffixes, text, 1);
        assert_eq!(suffixes.len(), 3);
        assert!(suffixes.iter().all(|&o| text[o as usize] & 0xC0 != 0x80));
    }

    #[test]
    fn test_filter_paired_anchors() {
        let text = b"AxByCz";
        let mut suffixes = sort_suffixes(text).unwrap();
        filter_anchors(&mut suffixes, text, 2);
        assert_eq!(suffixes.len(), 3);
        assert!(suffixes.iter().all(|&o| o % 2 == 0));
    }

    #[test]
    fn test_filter_is_stable() {
        let text = b"ba\0ab";
        let mut suffixes = sort_suffixes(text).unwrap();
        let expected: Vec<i32> = suffixes
            .iter()
            .copied()
            .filter(|&o| text[o as usize] != DELIMITER)
            .collect();
        filter_anchors(&mut suffixes, text, 1);
        assert_eq!(suffixes, expected);
    }
}
