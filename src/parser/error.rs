/// Errors that abort a decode.
///
/// A VAMAS file is decoded transactionally: any of these conditions discards
/// the partial record and surfaces to the caller. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// I/O error from the underlying line source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field declared as an integer count failed to parse
    #[error("malformed count for {field} on line {line}: {token:?}")]
    MalformedCount {
        /// Identifier of the count field
        field: &'static str,
        /// 1-based line number of the offending line
        line: usize,
        /// The text that failed to parse
        token: String,
    },

    /// A decoded count was negative
    #[error("negative count for {field} on line {line}: {value}")]
    NegativeCount {
        /// Identifier of the count field
        field: &'static str,
        /// 1-based line number of the offending line
        line: usize,
        /// The decoded value
        value: i64,
    },

    /// A numeric field (ordinate value, min/max pair, abscissa start or
    /// increment, prefix number) failed to parse
    #[error("malformed numeric value for {field} on line {line}: {token:?}")]
    MalformedNumber {
        /// Identifier of the field
        field: &'static str,
        /// 1-based line number of the offending line
        line: usize,
        /// The text that failed to parse
        token: String,
    },

    /// The experiment-mode token is not in the closed enumeration
    #[error("unknown experiment mode {token:?} on line {line}")]
    UnknownExperimentMode {
        /// The unrecognised token
        token: String,
        /// 1-based line number
        line: usize,
    },

    /// The scan-mode token is not in the closed enumeration
    #[error("unknown scan mode {token:?} on line {line}")]
    UnknownScanMode {
        /// The unrecognised token
        token: String,
        /// 1-based line number
        line: usize,
    },

    /// The line source was exhausted while a field still expected a line
    #[error("input ended while expecting {expected} (after line {line})")]
    PrematureEnd {
        /// Identifier of the field whose slot was being decoded
        expected: &'static str,
        /// 1-based number of the last line successfully read
        line: usize,
    },

    /// The declared block count does not match the blocks actually decoded
    #[error("declared {declared} blocks but decoded {decoded}")]
    BlockCountMismatch {
        /// The declared `number_of_blocks`
        declared: usize,
        /// The number of blocks decoded before input ended
        decoded: usize,
    },

    /// The ordinate-value count is not divisible by the number of
    /// corresponding variables
    #[error("{count} ordinate values cannot be divided among {variables} corresponding variables")]
    OrdinateRemainder {
        /// The declared ordinate-value count
        count: usize,
        /// The declared number of corresponding variables
        variables: usize,
    },
}

/// A convenience `Result` alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
