//! # subsift - differential substring mining
//!
//! subsift discovers byte sequences that occur frequently in one corpus and
//! rarely (or differentially) in another. Both corpora are flat byte
//! buffers of NUL-delimited documents; the engine enumerates every maximal
//! repeated substring of the positive corpus via suffix and LCP arrays,
//! counts each candidate in the negative corpus, and reports the survivors
//! of configurable count and probability thresholds.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - Corpus loading and the document model
//! - [`finder`] - Suffix/LCP construction, enumeration, scoring, selection
//! - [`output`] - Byte rendering (escapes, optional colour pairing)
//!
//! ## Quick Start
//!
//! ```ignore
//! use subsift::corpus::Corpus;
//! use subsift::finder::{FinderConfig, SubstringFinder};
//! use termcolor::{ColorChoice, StandardStream};
//!
//! let positive = Corpus::new(b"the cat sat\0the cat ran\0".to_vec());
//! let negative = Corpus::new(b"the dog\0".to_vec());
//!
//! let finder = SubstringFinder::new(&positive, &negative, FinderConfig::default()).unwrap();
//! let mut stdout = StandardStream::stdout(ColorChoice::Never);
//! finder.run(&mut stdout).unwrap();
//! ```
//!
//! ## Performance
//!
//! Suffix sorting is delegated to divsufsort; enumeration is a single
//! linear walk over the LCP array, and negative-corpus counting uses a
//! windowed binary search whose cursor only moves forward within an LCP
//! interval. Memory is dominated by the two suffix arrays plus the
//! inverse-rank and LCP vectors, all allocated up front per run.

pub mod corpus;
pub mod finder;
pub mod output;
