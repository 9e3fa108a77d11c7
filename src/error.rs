//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the langtour library.
///
/// The lesson itself operates on well-typed literals and cannot fail; errors
/// come from the edges: operand parsing on the `add` path and transcript
/// sink writes.
#[derive(Debug, Error)]
pub enum TourError {
    /// Non-numeric text handed to the addition helper. The operand is
    /// reported verbatim rather than silently coerced.
    #[error("invalid argument: '{value}' is not an integer")]
    InvalidArgument {
        /// The offending operand text, as given.
        value: String,
    },

    /// The transcript sink rejected a write.
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}
