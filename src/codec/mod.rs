//! The decode-primitive contract and the codecs implementing it.

use std::io;

use crate::util::PartialBuffer;

#[cfg(feature = "brotli")]
mod brotli;
#[cfg(feature = "flate2")]
mod flate;

#[cfg(feature = "brotli")]
pub use self::brotli::BrotliDecoder;
#[cfg(feature = "deflate")]
pub use self::flate::DeflateDecoder;
#[cfg(feature = "flate2")]
pub use self::flate::FlateDecoder;
#[cfg(feature = "zlib")]
pub use self::flate::ZlibDecoder;

/// What a decode primitive needs next in order to make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The primitive consumed what it could and wants more compressed bytes.
    NeedsInput,
    /// The primitive holds decoded bytes that did not fit in the output span.
    NeedsOutput,
    /// The end of the compressed stream has been reached.
    Finished,
}

/// Abstraction for decode primitives.
///
/// Implementations may be driven push-style over paired buffers or wrap a
/// stream object internally; the adapter only sees this interface.
pub trait Decode {
    /// Reinitialize this primitive, preparing it to decode a new compressed
    /// unit from scratch.
    fn reinit(&mut self) -> io::Result<()>;

    /// Decode from `input` into `output`, advancing both cursors past the
    /// bytes consumed and produced.
    ///
    /// Consuming no input and producing no output in a single call is legal;
    /// callers are expected to loop on the returned status.
    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> io::Result<DecodeStatus>;
}
