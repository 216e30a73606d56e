//! # BMES to BIO conversion pass
//!
//! Reconstructs sentences from token-per-line records and collapses their
//! tags into the BIO scheme, producing (sentence, tag-string) training
//! examples.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TagfoldError};
use crate::record::{CorpusRecord, DEFAULT_BUFFER_CAPACITY, RecordReader};
use crate::tags::{BioTag, BmesTag, collapse_field};

/// A completed (sentence, tag-string) pair ready for model training.
///
/// The two strings always contain the same number of characters: one
/// sentence character per one BIO tag character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingExample {
    /// The reconstructed sentence.
    pub sentence: String,
    /// The collapsed tag string, one of `B`/`I`/`O` per character.
    pub tags: String,
}

/// Configuration for the converter.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Reject malformed records and unterminated sentences instead of
    /// coercing them silently.
    pub strict: bool,
    /// Initial capacity of the CSV decode buffer, in bytes.
    pub buffer_capacity: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strict: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl ConvertOptions {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the initial CSV decode buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

/// Mutable (sentence, tags) pair built across consecutive token records.
#[derive(Debug, Default)]
struct Accumulator {
    sentence: String,
    tags: String,
}

impl Accumulator {
    fn push(&mut self, ch: char, tag: BioTag) {
        self.sentence.push(ch);
        self.tags.push(tag.as_char());
    }

    /// Take the accumulated pair as a finished example and reset.
    fn flush(&mut self) -> TrainingExample {
        TrainingExample {
            sentence: std::mem::take(&mut self.sentence),
            tags: std::mem::take(&mut self.tags),
        }
    }

    fn is_empty(&self) -> bool {
        self.sentence.is_empty()
    }

    fn char_count(&self) -> usize {
        self.sentence.chars().count()
    }
}

/// Single-pass converter from BMES corpora to BIO training examples.
///
/// The pass is strictly sequential: records are consumed in input order,
/// sentences flush on boundary records, and the example list preserves
/// flush order.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    reader: RecordReader,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default (permissive) options.
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        let reader = RecordReader::with_buffer_capacity(options.buffer_capacity);
        Self { reader, options }
    }

    /// Convert a fully parsed record list into training examples.
    ///
    /// Every boundary record flushes the accumulator, including boundaries
    /// with nothing accumulated (consecutive blank lines yield empty
    /// examples). A pending sentence at end-of-input is dropped in
    /// permissive mode and rejected in strict mode; there is no implicit
    /// final flush.
    pub fn convert_records(&self, records: &[CorpusRecord]) -> Result<Vec<TrainingExample>> {
        let mut examples = Vec::new();
        let mut acc = Accumulator::default();

        for (idx, record) in records.iter().enumerate() {
            let line = idx + 1;
            match record {
                CorpusRecord::Boundary => {
                    examples.push(acc.flush());
                }
                // A field-less token record is still a sentence boundary.
                CorpusRecord::Token(fields) if fields.is_empty() => {
                    examples.push(acc.flush());
                }
                CorpusRecord::Token(fields) => {
                    if self.options.strict {
                        validate_record(line, fields)?;
                    }

                    let first = &fields[0];
                    let Some(ch) = first.chars().next() else {
                        // Empty first field: no character, no flush.
                        continue;
                    };

                    // Third field when present; otherwise fall back to the
                    // field indexed by (field count - 1). For short records
                    // the fallback can land on an unrelated field, which is
                    // part of the input contract.
                    let raw = if fields.len() > 2 {
                        &fields[2]
                    } else {
                        &fields[fields.len() - 1]
                    };

                    acc.push(ch, collapse_field(raw));
                }
            }
        }

        if !acc.is_empty() {
            if self.options.strict {
                return Err(TagfoldError::UnterminatedSentence {
                    pending: acc.char_count(),
                });
            }
            debug!(
                pending = acc.char_count(),
                "dropping sentence not terminated by a boundary record"
            );
        }

        Ok(examples)
    }

    /// Parse `input` into records, then convert them.
    ///
    /// The whole input is decoded into memory before example-building
    /// starts; the converter is not incremental.
    pub fn convert_reader<R: BufRead>(&self, input: R) -> Result<Vec<TrainingExample>> {
        let records = self.reader.read_all(input)?;
        debug!(records = records.len(), "parsed corpus records");
        self.convert_records(&records)
    }

    /// Convert the corpus file at `path`.
    pub fn convert_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TrainingExample>> {
        let file = File::open(path)?;
        self.convert_reader(BufReader::new(file))
    }
}

/// Strict-mode record validation: at least three fields, and a raw tag
/// field that is exactly one BMES tag character.
fn validate_record(line: usize, fields: &[String]) -> Result<()> {
    if fields.len() < 3 {
        return Err(TagfoldError::ShortRecord {
            line,
            count: fields.len(),
        });
    }

    let raw = &fields[2];
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if BmesTag::from_char(c).is_some() => Ok(()),
        _ => Err(TagfoldError::UnknownTag {
            line,
            tag: raw.clone(),
        }),
    }
}
