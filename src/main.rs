mod corpus;
mod finder;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};

use finder::{FinderConfig, SubstringFinder};

#[derive(Parser)]
#[command(name = "subsift")]
#[command(about = "Find substrings frequent in one corpus and rare in another")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Positive corpus of NUL-delimited documents; `-` reads stdin
    positive: Option<PathBuf>,

    /// Negative corpus; omitted means an empty corpus
    negative: Option<PathBuf>,

    /// Minimum occurrence count in the positive corpus
    #[arg(short = 't', long, default_value = "2")]
    min_count: usize,

    /// Maximum occurrence count in the negative corpus
    #[arg(short = 'T', long)]
    max_negative_count: Option<usize>,

    /// Minimum posterior probability P(positive | substring)
    #[arg(long, default_value = "0.0")]
    min_posterior: f64,

    /// Keep only the K best matches (unique mode)
    #[arg(short = 'k', long, default_value = "0")]
    top: usize,

    /// Minimum documents removed per printed line in cover mode
    #[arg(long, default_value = "0")]
    cover_threshold: usize,

    /// Additive prior mass used by the posterior score
    #[arg(long, default_value = "1.0")]
    prior_bias: f64,

    /// Count distinct documents instead of occurrences
    #[arg(short = 'd', long)]
    document: bool,

    /// Print posterior probabilities instead of raw counts
    #[arg(short = 'p', long)]
    probability: bool,

    /// Only report substrings delimited by whitespace
    #[arg(short = 'w', long)]
    words: bool,

    /// Treat input as colour-tagged byte pairs and colourise output
    #[arg(long)]
    color: bool,

    /// Deduplicate: drop substrings contained in a longer match
    #[arg(short = 'u', long, conflicts_with = "cover")]
    unique: bool,

    /// Select a greedy minimum cover of the positive documents
    #[arg(short = 'c', long)]
    cover: bool,

    /// Keep only the longest of a same-count prefix chain
    #[arg(long)]
    skip_samecount_prefixes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show corpus statistics
    Stats {
        /// Corpus file path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats { path }) => {
            corpus::stats::show_stats(&path)?;
        }
        None => {
            run_finder(cli)?;
        }
    }

    Ok(())
}

fn run_finder(cli: Cli) -> Result<()> {
    let Some(positive_path) = cli.positive else {
        bail!("a positive corpus path is required (use `-` for stdin)");
    };

    let positive = corpus::load_corpus(&positive_path)?;
    let negative = match cli.negative {
        Some(path) => corpus::load_corpus(&path)?,
        None => corpus::Corpus::new(Vec::new()),
    };

    let config = FinderConfig {
        min_count: cli.min_count,
        max_negative_count: cli.max_negative_count.unwrap_or(usize::MAX),
        min_posterior: cli.min_posterior,
        top: cli.top,
        cover_threshold: cli.cover_threshold,
        prior_bias: cli.prior_bias,
        count_documents: cli.document,
        probability: cli.probability,
        word_boundaries: cli.words,
        color: cli.color,
        unique: cli.unique,
        cover: cli.cover,
        skip_samecount_prefixes: cli.skip_samecount_prefixes,
    };

    let finder = SubstringFinder::new(&positive, &negative, config)?;

    // ANSI sequences only reach a real terminal.
    let choice = if cli.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    finder.run(&mut stdout)
}
