//! # Record-level input parsing
//!
//! Splits a corpus file into per-line records. Each non-blank line is
//! decoded as one CSV record with standard quoting rules; a blank line is a
//! sentence boundary.

use std::io::BufRead;

use crate::error::Result;

/// Default initial capacity of the CSV decode buffer, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusRecord {
    /// A blank line separating sentences.
    Boundary,
    /// A token annotation line with its decoded CSV fields.
    Token(Vec<String>),
}

impl CorpusRecord {
    /// Whether this record is a sentence boundary.
    pub fn is_boundary(&self) -> bool {
        matches!(self, CorpusRecord::Boundary)
    }
}

/// Line-oriented reader producing [`CorpusRecord`]s.
///
/// Decoding is strictly per line: quoted fields may contain embedded commas
/// and quotes, but never line breaks. The decoder imposes no ceiling on
/// field size; [`RecordReader::with_buffer_capacity`] only pre-sizes the
/// internal buffer for corpora known to carry very large fields.
#[derive(Debug, Clone)]
pub struct RecordReader {
    buffer_capacity: usize,
}

impl RecordReader {
    /// Create a reader with the default decode buffer capacity.
    pub fn new() -> Self {
        Self::with_buffer_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a reader whose decode buffer starts at `capacity` bytes.
    pub fn with_buffer_capacity(capacity: usize) -> Self {
        Self {
            buffer_capacity: capacity,
        }
    }

    /// Parse a single line (without its trailing newline) into a record.
    pub fn parse_line(&self, line: &str) -> Result<CorpusRecord> {
        if line.is_empty() {
            return Ok(CorpusRecord::Boundary);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(self.buffer_capacity)
            .from_reader(line.as_bytes());

        let mut record = csv::StringRecord::new();
        if reader.read_record(&mut record)? {
            Ok(CorpusRecord::Token(
                record.iter().map(str::to_string).collect(),
            ))
        } else {
            // The decoder yielded nothing for this line; treat it as a boundary.
            Ok(CorpusRecord::Boundary)
        }
    }

    /// Read every line of `input` into a record list.
    pub fn read_all<R: BufRead>(&self, input: R) -> Result<Vec<CorpusRecord>> {
        let mut records = Vec::new();
        for line in input.lines() {
            records.push(self.parse_line(&line?)?);
        }
        Ok(records)
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_boundary() {
        let reader = RecordReader::new();
        assert_eq!(reader.parse_line("").unwrap(), CorpusRecord::Boundary);
    }

    #[test]
    fn test_token_fields() {
        let reader = RecordReader::new();
        let record = reader.parse_line("我,PN,B").unwrap();
        assert_eq!(
            record,
            CorpusRecord::Token(vec!["我".into(), "PN".into(), "B".into()])
        );
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let reader = RecordReader::new();
        let record = reader.parse_line("\",x\",PU,S").unwrap();
        assert_eq!(
            record,
            CorpusRecord::Token(vec![",x".into(), "PU".into(), "S".into()])
        );
    }

    #[test]
    fn test_quoted_field_with_quote() {
        let reader = RecordReader::new();
        let record = reader.parse_line("\"\"\"\",PU,S").unwrap();
        assert_eq!(
            record,
            CorpusRecord::Token(vec!["\"".into(), "PU".into(), "S".into()])
        );
    }

    #[test]
    fn test_whitespace_line_is_token() {
        // Only a physically empty line is a boundary
        let reader = RecordReader::new();
        let record = reader.parse_line(" ").unwrap();
        assert_eq!(record, CorpusRecord::Token(vec![" ".into()]));
    }

    #[test]
    fn test_read_all_preserves_order() {
        let reader = RecordReader::new();
        let input = "我,PN,B\n\n爱,VV,B\n";
        let records = reader.read_all(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[1].is_boundary());
        assert!(!records[2].is_boundary());
    }

    #[test]
    fn test_crlf_blank_line() {
        let reader = RecordReader::new();
        let records = reader.read_all(b"a,X,B\r\n\r\n".as_slice()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].is_boundary());
    }

    #[test]
    fn test_custom_buffer_capacity() {
        let reader = RecordReader::with_buffer_capacity(64);
        let big = "x".repeat(4096);
        let record = reader.parse_line(&format!("{big},NN,B")).unwrap();
        match record {
            CorpusRecord::Token(fields) => assert_eq!(fields[0].len(), 4096),
            CorpusRecord::Boundary => panic!("expected token record"),
        }
    }
}
