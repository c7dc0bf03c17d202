use std::io;

use thiserror::Error;

/// Errors surfaced by the decompression protocol.
///
/// The two variants are deliberately disjoint: a contract violation is a bug
/// in the calling code and is never produced by well-formed usage, while a
/// decode failure means the compressed data itself is bad and the current
/// stream cannot continue. Neither is retryable.
#[derive(Debug, Error)]
pub enum Error {
    /// The adapter protocol was misused.
    #[error("contract violation: {0}")]
    Contract(&'static str),

    /// The compressed stream is malformed or truncated, or the decode
    /// primitive failed internally.
    #[error("decode failure: {0}")]
    Decode(#[source] io::Error),
}

impl Error {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
