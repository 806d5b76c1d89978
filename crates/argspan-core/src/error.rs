use thiserror::Error;

/// Errors that can occur during argspan core operations.
#[derive(Debug, Error)]
pub enum ArgspanError {
    /// A tagged sequence does not line up with its sentence's tokens.
    /// Fatal for that sentence's extraction call.
    #[error(
        "tag sequence for predicate {predicate:?} has {tags} tags but sentence {sentence:?} has {tokens} tokens"
    )]
    LengthMismatch {
        /// The sentence text the sequence was paired with.
        sentence: String,
        /// The predicate of the offending sequence.
        predicate: String,
        /// Number of tokens in the sentence.
        tokens: usize,
        /// Number of tags in the sequence.
        tags: usize,
    },

    /// A role-mapping line is not `source<TAB>target`.
    #[error("malformed role mapping at line {line}: {content:?}")]
    MappingParse {
        /// 1-based line number within the mapping table.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// The role-mapping table could not be read.
    #[error("failed to read role mapping: {0}")]
    MappingIo(#[from] std::io::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for argspan operations.
pub type Result<T> = std::result::Result<T, ArgspanError>;
