//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors are the only two ways a tree operation can be refused.
/// Both are local and leave the tree exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "component of kind {kind} cannot be added to section '{container}' (accepts {expected})"
    )]
    InvalidChildType {
        container: String,
        kind: String,
        expected: String,
    },

    #[error("index {index} out of range for section '{label}' with {count} children")]
    IndexOutOfRange {
        index: isize,
        label: String,
        count: usize,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
