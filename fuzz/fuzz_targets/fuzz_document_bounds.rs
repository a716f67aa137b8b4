#![no_main]

use libfuzzer_sys::fuzz_target;
use subsift::corpus::{document_index, find_document_bounds};

fuzz_target!(|data: &[u8]| {
    let ends = find_document_bounds(data);

    // Bounds are non-empty, strictly increasing, and every offset maps to
    // exactly one document.
    assert!(!ends.is_empty());
    assert!(ends.windows(2).all(|pair| pair[0] < pair[1]));
    for offset in 0..data.len() {
        let doc = document_index(&ends, offset) as usize;
        assert!(doc < ends.len());
        assert!(offset <= ends[doc]);
    }
});
