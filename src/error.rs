// Error taxonomy for the keyword core.
//
// The core does no I/O beyond loading its stopword resource, so only two
// things can go wrong: the resource is missing at startup, or a caller hands
// the ranker a size it can't honor. Everything else (empty text included)
// produces a well-defined empty result.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    /// The stopword or segmentation resource could not be loaded.
    /// Fatal at startup, never raised per request.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// A caller-supplied argument is out of range (e.g. a negative `top_n`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
