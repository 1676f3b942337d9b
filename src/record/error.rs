/// Errors reported by the read-only query interface.
///
/// These are always recoverable by the caller; a failed query never
/// invalidates the decoded record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Block index exceeds the number of decoded blocks
    #[error("block index {index} out of range: experiment has {count} blocks")]
    BlockIndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of blocks actually decoded
        count: usize,
    },

    /// Corresponding-variable index exceeds the block's declared count
    #[error("corresponding-variable index {index} out of range: block has {count}")]
    VariableIndexOutOfRange {
        /// The requested index
        index: usize,
        /// The block's corresponding-variable count
        count: usize,
    },

    /// The field was never decoded for this file (its gate did not hold)
    #[error("field {field} was not present in this file")]
    AbsentField {
        /// Identifier of the absent field
        field: &'static str,
    },

    /// The field has no single-value representation in the query interface
    #[error("field {field} is not addressable as a value; use the dedicated accessor")]
    NotAddressable {
        /// Identifier of the field
        field: &'static str,
    },
}
