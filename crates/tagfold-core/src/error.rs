use thiserror::Error;

/// Errors that can occur during tagfold core operations.
#[derive(Debug, Error)]
pub enum TagfoldError {
    /// The input file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded as a CSV record.
    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    /// A training example could not be serialized to JSON.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict mode: a token record carried fewer fields than the format requires.
    #[error("line {line}: expected at least 3 fields, found {count}")]
    ShortRecord {
        /// 1-based input line number.
        line: usize,
        /// Number of fields actually present.
        count: usize,
    },

    /// Strict mode: the raw tag field is not a single BMES tag character.
    #[error("line {line}: unknown tag {tag:?}")]
    UnknownTag {
        /// 1-based input line number.
        line: usize,
        /// The offending field value.
        tag: String,
    },

    /// Strict mode: input ended while a sentence was still accumulating.
    #[error("input ended without a sentence boundary; {pending} pending character(s)")]
    UnterminatedSentence {
        /// Characters accumulated but never flushed.
        pending: usize,
    },
}

/// Result type alias for tagfold operations.
pub type Result<T> = std::result::Result<T, TagfoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TagfoldError::ShortRecord { line: 7, count: 1 };
        assert_eq!(err.to_string(), "line 7: expected at least 3 fields, found 1");

        let err = TagfoldError::UnknownTag {
            line: 3,
            tag: "X".into(),
        };
        assert!(err.to_string().contains("\"X\""));

        let err = TagfoldError::UnterminatedSentence { pending: 4 };
        assert!(err.to_string().contains("4 pending"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TagfoldError>();
    }
}
