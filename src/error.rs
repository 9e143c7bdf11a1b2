//! Errors raised while resolving and writing uniform blocks.
//!
//! Every variant is local to the call that produced it; nothing is retried and no
//! partial writer or partial write is left behind.

/// Failure of a uniform block lookup, write or upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UboError {
    /// The program has no uniform block with this name. Raised at writer construction.
    #[error("uniform block `{block}` not found in shader program")]
    BlockNotFound { block: String },

    /// The block has no member at this path. The staging buffer is left untouched.
    #[error("member `{member}` not found in uniform block `{block}`")]
    MemberNotFound { block: String, member: String },

    /// The payload does not have the member's exact byte size.
    #[error("payload for `{member}` is {actual} bytes but the member occupies {expected}")]
    PayloadSizeMismatch {
        member: String,
        expected: usize,
        actual: usize,
    },

    /// The writer's staging buffer was moved out or released.
    #[error("uniform block writer used after its buffer was moved out or released")]
    UseAfterMove,

    /// WGSL source failed to parse, validate or lay out.
    #[error("shader `{label}`: {message}")]
    Shader { label: String, message: String },
}
