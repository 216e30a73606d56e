//! # Tagfold Core
//!
//! The heart of the tagfold conversion toolkit. Reads token-per-line BMES
//! corpora, reconstructs sentences on blank-line boundaries, collapses the
//! four-way B/M/E/S tag scheme into B/I/O, and serializes the resulting
//! (sentence, tag-string) pairs as a training table.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagfold_core::Converter;
//!
//! let corpus = "我,PN,B\n爱,VV,B\n北,NR,B\n京,NR,E\n\n";
//! let examples = Converter::new().convert_reader(corpus.as_bytes()).unwrap();
//!
//! assert_eq!(examples[0].sentence, "我爱北京");
//! assert_eq!(examples[0].tags, "BBBI");
//! ```
pub mod convert;
pub mod error;
pub mod output;
pub mod record;
pub mod tags;

// Re-export primary API
pub use convert::{ConvertOptions, Converter, TrainingExample};
pub use error::{Result, TagfoldError};
pub use output::{OutputFormat, write_csv, write_jsonl, write_path};
pub use record::{CorpusRecord, RecordReader};
pub use tags::{BioTag, BmesTag, collapse_field};
