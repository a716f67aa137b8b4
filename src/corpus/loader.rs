//! Corpus input loading
//!
//! Files are memory-mapped; `-` reads the corpus from stdin into an owned
//! buffer. Either way the result is a [`Corpus`] over a contiguous byte
//! buffer.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::Corpus;

/// Read a corpus from `path`, with `-` meaning stdin.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read corpus from stdin")?;
        return Ok(Corpus::new(buffer));
    }

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?;

    // Zero-length files cannot be mapped.
    if metadata.len() == 0 {
        return Ok(Corpus::new(Vec::new()));
    }

    let map = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to map {}", path.display()))?;
    Ok(Corpus::from_mmap(map))
}
