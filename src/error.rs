use thiserror::Error;

/// Errors produced by [`compress`](crate::compress) and
/// [`decompress`](crate::decompress).
///
/// Every variant is terminal for the call that produced it; no partial
/// output is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The window size is outside the representable range.
    #[error("invalid window size {window}: expected a value in [4, 510]")]
    Configuration { window: usize },

    /// The compressed stream is not a whole number of records.
    #[error("malformed stream: length {len} is not a multiple of 3")]
    MalformedStream { len: usize },

    /// A record points further back than the output decoded so far.
    #[error("corrupt back-reference: offset {offset} exceeds {available} decoded bytes")]
    CorruptReference { offset: u8, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
