//! Corpus Conversion Tool
//!
//! Converts token-per-line BMES corpora into two-column (sentence, BIO tags)
//! training tables. Wraps the `tagfold-core` converter with a CLI for batch
//! conversion and corpus inspection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use tagfold_core::{BioTag, ConvertOptions, Converter, OutputFormat, TrainingExample, write_path};

/// Default input corpus path
const DEFAULT_INPUT: &str = "BMEStest.data";

/// Default output table path
const DEFAULT_OUTPUT: &str = "test_BMES.csv";

/// CLI arguments
#[derive(Parser)]
#[command(name = "corpus-convert")]
#[command(about = "Convert BMES-tagged corpora to BIO training tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input corpus file
    #[arg(short, long, env = "TAGFOLD_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Reject malformed records instead of coercing them
    #[arg(short, long)]
    strict: bool,

    /// Initial CSV decode buffer capacity in bytes
    #[arg(short = 'B', long, env = "TAGFOLD_BUFFER_CAPACITY")]
    buffer_capacity: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the corpus and write the training table
    Convert {
        /// Output table file
        #[arg(short, long, env = "TAGFOLD_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Output serialization format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
    /// Print corpus statistics without writing output
    Stats,
}

/// Output format flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Two-column CSV table
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Per-tag character counts, indexed by `BioTag::index`.
fn tag_distribution(examples: &[TrainingExample]) -> [usize; BioTag::NUM_TAGS] {
    let mut counts = [0usize; BioTag::NUM_TAGS];
    for example in examples {
        for c in example.tags.chars() {
            if let Some(tag) = BioTag::from_char(c) {
                counts[tag.index()] += 1;
            }
        }
    }
    counts
}

fn print_stats(examples: &[TrainingExample]) {
    let tokens: usize = examples.iter().map(|e| e.tags.chars().count()).sum();
    let empty = examples.iter().filter(|e| e.sentence.is_empty()).count();
    let counts = tag_distribution(examples);

    println!("sentences: {}", examples.len());
    println!("tokens:    {}", tokens);
    println!("empty:     {}", empty);
    for tag in BioTag::all_tags() {
        println!("tag {}:     {}", tag, counts[tag.index()]);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut options = ConvertOptions::new().with_strict(cli.strict);
    if let Some(capacity) = cli.buffer_capacity {
        options = options.with_buffer_capacity(capacity);
    }

    let converter = Converter::with_options(options);
    let examples = converter
        .convert_path(&cli.input)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    info!(
        "Converted {} sentences from {}",
        examples.len(),
        cli.input.display()
    );
    if examples.is_empty() {
        warn!("no sentence boundaries found; output will be empty");
    }

    match cli.command {
        Commands::Convert { output, format } => {
            write_path(&examples, &output, format.into())
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("Wrote {} rows to {}", examples.len(), output.display());
        }
        Commands::Stats => {
            print_stats(&examples);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mapping() {
        assert_eq!(OutputFormat::from(Format::Csv), OutputFormat::Csv);
        assert_eq!(OutputFormat::from(Format::Jsonl), OutputFormat::Jsonl);
    }

    #[test]
    fn test_tag_distribution() {
        let examples = vec![
            TrainingExample {
                sentence: "我爱北京".into(),
                tags: "BBBI".into(),
            },
            TrainingExample {
                sentence: "猫".into(),
                tags: "O".into(),
            },
        ];
        let counts = tag_distribution(&examples);
        assert_eq!(counts[BioTag::Begin.index()], 3);
        assert_eq!(counts[BioTag::Inside.index()], 1);
        assert_eq!(counts[BioTag::Outside.index()], 1);
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["corpus-convert", "convert"]);
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert!(!cli.strict);
        match cli.command {
            Commands::Convert { output, format } => {
                assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT));
                assert_eq!(format, Format::Csv);
            }
            Commands::Stats => panic!("expected convert subcommand"),
        }
    }
}
