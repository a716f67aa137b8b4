//! Corpus statistics

use anyhow::Result;
use std::path::Path;

use super::loader::load_corpus;
use super::types::DELIMITER;

/// Display statistics for a corpus file.
pub fn show_stats(path: &Path) -> Result<()> {
    let corpus = load_corpus(path)?;
    let text = corpus.text();

    let delimiter_bytes = text.iter().filter(|&&b| b == DELIMITER).count();
    let continuation_bytes = text.iter().filter(|&&b| b & 0xC0 == 0x80).count();
    let anchors = text.len() - delimiter_bytes - continuation_bytes;

    println!("Corpus Statistics");
    println!("=================");
    println!();
    println!("Path:              {}", path.display());
    println!("Size:              {}", format_size(text.len() as u64));
    println!("Documents:         {}", corpus.document_count());
    println!("Longest document:  {}", format_size(corpus.longest_document() as u64));
    println!("Anchor suffixes:   {}", anchors);
    println!("UTF-8 tail bytes:  {}", continuation_bytes);

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
