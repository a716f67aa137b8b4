//! Differential substring discovery.
//!
//! This module implements the full pipeline: both corpora are suffix-sorted
//! and filtered to anchor-eligible offsets, the positive corpus's LCP array
//! drives enumeration of maximal repeated substrings, each candidate is
//! counted in the negative corpus by windowed binary search, and survivors
//! of the threshold/posterior filters flow into the configured selection
//! strategy.
//!
//! - [`suffix`] - Suffix sorting (divsufsort) and anchor filtering
//! - [`lcp`] - Kasai-style LCP construction with delimiter stops
//! - [`enumerate`] - LCP-interval traversal emitting candidates
//! - [`lookup`] - Windowed occurrence counting in the negative corpus
//! - [`score`] - Thresholds, posterior scoring, top-K accumulation
//! - [`select`] - Unique and cover post-selection

pub mod enumerate;
pub mod lcp;
pub mod lookup;
pub mod score;
pub mod select;
pub mod suffix;

use anyhow::{bail, Result};
use roaring::RoaringBitmap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use termcolor::WriteColor;

use crate::corpus::{document_index, Corpus};
use crate::output::print_bytes;
use score::{Match, MatchAccumulator, PosteriorModel};

/// Tuning knobs for a finder run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Minimum occurrence count in the positive corpus.
    pub min_count: usize,
    /// Maximum occurrence count in the negative corpus.
    pub max_negative_count: usize,
    /// Minimum posterior P(positive | substring); 0 disables the filter.
    pub min_posterior: f64,
    /// Keep only the K best matches in unique mode; 0 keeps everything.
    pub top: usize,
    /// Minimum documents removed per printed line in cover mode.
    pub cover_threshold: usize,
    /// Additive prior mass for the posterior score.
    pub prior_bias: f64,
    /// Count distinct documents instead of raw occurrences.
    pub count_documents: bool,
    /// Report posterior probabilities instead of raw counts.
    pub probability: bool,
    /// Require whitespace (or a buffer edge) on both sides of a match.
    pub word_boundaries: bool,
    /// Treat the corpus as colour-tagged byte pairs; anchors step by two.
    pub color: bool,
    /// Superstring-dedup the matches instead of streaming them.
    pub unique: bool,
    /// Select a greedy minimum cover of the positive documents.
    pub cover: bool,
    /// Keep only the longest representative of a same-count prefix chain.
    pub skip_samecount_prefixes: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            max_negative_count: usize::MAX,
            min_posterior: 0.0,
            top: 0,
            cover_threshold: 0,
            prior_bias: 1.0,
            count_documents: false,
            probability: false,
            word_boundaries: false,
            color: false,
            unique: false,
            cover: false,
            skip_samecount_prefixes: false,
        }
    }
}

/// How surviving candidates reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Stream every survivor as it is found.
    All,
    /// Accumulate, superstring-dedup, print lexicographically.
    Unique,
    /// Accumulate, then greedily cover the positive documents.
    Cover,
}

impl FinderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.unique && self.cover {
            bail!("unique and cover selection are mutually exclusive");
        }
        Ok(())
    }

    pub fn select_mode(&self) -> SelectMode {
        if self.cover {
            SelectMode::Cover
        } else if self.unique {
            SelectMode::Unique
        } else {
            SelectMode::All
        }
    }

    fn anchor_stride(&self) -> usize {
        if self.color {
            2
        } else {
            1
        }
    }

    fn needs_posterior(&self) -> bool {
        self.probability || self.min_posterior > 0.0
    }
}

/// Owns two corpora and a configuration for the duration of one run.
pub struct SubstringFinder<'a> {
    positive: &'a Corpus,
    negative: &'a Corpus,
    config: FinderConfig,
}

impl<'a> SubstringFinder<'a> {
    pub fn new(positive: &'a Corpus, negative: &'a Corpus, config: FinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            positive,
            negative,
            config,
        })
    }

    /// Run the pipeline, writing report lines to `out`.
    pub fn run<W: WriteColor>(&self, out: &mut W) -> Result<()> {
        let config = &self.config;
        let stride = config.anchor_stride();
        let positive_text = self.positive.text();
        let negative_text = self.negative.text();

        let mut positive_suffixes = suffix::sort_suffixes(positive_text)?;
        suffix::filter_anchors(&mut positive_suffixes, positive_text, stride);
        if positive_suffixes.is_empty() {
            return Ok(());
        }

        let mut negative_suffixes = suffix::sort_suffixes(negative_text)?;
        suffix::filter_anchors(&mut negative_suffixes, negative_text, stride);

        let lcp = lcp::lcp_array(positive_text, &positive_suffixes);

        let posterior = config.needs_posterior().then(|| {
            PosteriorModel::new(
                self.positive.ngram_counts(),
                self.negative.ngram_counts(),
                config.prior_bias,
            )
        });

        let mode = config.select_mode();
        let options = enumerate::EnumerateOptions {
            stride,
            skip_samecount_prefixes: config.skip_samecount_prefixes || config.unique,
            document_ends: config
                .count_documents
                .then(|| self.positive.document_ends()),
        };

        let mut lookup = lookup::NegativeLookup::new(negative_text, &negative_suffixes);
        let mut matches = MatchAccumulator::new(if config.unique { config.top } else { 0 });
        let mut negative_documents = RoaringBitmap::new();

        enumerate::enumerate_repeats(&positive_suffixes, &lcp, &options, |candidates| {
            lookup.reset();
            for candidate in candidates {
                if candidate.count < config.min_count {
                    continue;
                }

                let text = &positive_text[candidate.start..candidate.start + candidate.length];
                let (lo, hi) = lookup.bounds(text);
                let negative_count = if config.count_documents {
                    negative_documents.clear();
                    for &offset in &negative_suffixes[lo..hi] {
                        negative_documents
                            .insert(document_index(self.negative.document_ends(), offset as usize));
                    }
                    negative_documents.len() as usize
                } else {
                    hi - lo
                };
                if negative_count > config.max_negative_count {
                    continue;
                }

                if config.word_boundaries
                    && !score::at_word_boundary(positive_text, candidate.start, candidate.length)
                {
                    continue;
                }

                let mut score_value = candidate.count as f64;
                if let Some(model) = &posterior {
                    let Some(p) =
                        model.posterior(candidate.length, candidate.count, negative_count)
                    else {
                        continue;
                    };
                    if p < config.min_posterior {
                        continue;
                    }
                    if config.probability {
                        score_value = p;
                    }
                }

                match mode {
                    SelectMode::All => {
                        if config.probability {
                            write!(out, "{:.9}\t", score_value)?;
                        } else {
                            write!(out, "{}\t{}\t", candidate.count, negative_count)?;
                        }
                        print_bytes(out, text, config.color)?;
                        writeln!(out)?;
                    }
                    SelectMode::Unique | SelectMode::Cover => {
                        matches.push(Match {
                            text,
                            score: score_value,
                        });
                    }
                }
            }
            Ok(())
        })?;

        match mode {
            SelectMode::All => {}
            SelectMode::Unique => {
                let mut collected = matches.into_matches();
                select::print_unique(out, &mut collected, config.color)?;
            }
            SelectMode::Cover => {
                let mut collected = matches.into_matches();
                select::print_cover(
                    out,
                    &mut collected,
                    positive_text,
                    self.positive.document_ends(),
                    config.cover_threshold,
                    config.color,
                )?;
            }
        }

        Ok(())
    }
}
