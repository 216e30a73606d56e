//! # Training-table serialization
//!
//! Writes converted examples either as the two-column CSV table consumed by
//! downstream training scripts or as JSONL, one object per example.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::convert::TrainingExample;
use crate::error::Result;

/// Column header for the sentence column.
const SENTENCE_COLUMN: &str = "a";
/// Column header for the tag-string column.
const TAGS_COLUMN: &str = "b";

/// Supported output serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-column CSV table with header row `a,b`, no index column.
    Csv,
    /// One JSON object per line: `{"sentence": ..., "tags": ...}`.
    Jsonl,
}

/// Write the examples as a two-column CSV table.
///
/// Rows are written in example order; the header row is `a,b` and no
/// row-index column is emitted.
pub fn write_csv<W: Write>(examples: &[TrainingExample], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([SENTENCE_COLUMN, TAGS_COLUMN])?;
    for example in examples {
        csv_writer.write_record([example.sentence.as_str(), example.tags.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the examples as JSONL.
pub fn write_jsonl<W: Write>(examples: &[TrainingExample], mut writer: W) -> Result<()> {
    for example in examples {
        serde_json::to_writer(&mut writer, example)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the examples to the file at `path` in the given format.
pub fn write_path<P: AsRef<Path>>(
    examples: &[TrainingExample],
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(examples, writer),
        OutputFormat::Jsonl => write_jsonl(examples, writer),
    }
}
