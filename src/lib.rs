//! Pull-style decompression adaptors over swappable decode primitives.
//!
//! [`Decompressor`] exposes the classic pull protocol — stage compressed bytes
//! with [`set_input`](Decompressor::set_input), drain decoded bytes with
//! [`decompress`](Decompressor::decompress) — over any primitive implementing
//! [`Decode`]. The buffering state machine is written once; the algorithms are
//! selected per instance and gated behind cargo features:
//!
//!  Feature   | Decoder            | Backing crate
//! -----------|--------------------|--------------
//!  `brotli`  | [`BrotliDecoder`]  | `brotli`
//!  `deflate` | [`DeflateDecoder`] | `flate2`
//!  `zlib`    | [`ZlibDecoder`]    | `flate2`
//!
//! All algorithm features are enabled by default; disable default features and
//! pick the ones you need to trim the dependency tree.
//!
//! ```
//! # #[cfg(feature = "brotli")] {
//! use std::io::Read;
//!
//! use pull_decompress::{BrotliDecoder, Decompressor};
//!
//! let mut compressed = Vec::new();
//! pull_decompress::brotli::CompressorReader::new(&b"Hello Brotli"[..], 4096, 5, 22)
//!     .read_to_end(&mut compressed)
//!     .unwrap();
//!
//! let mut decompressor: Decompressor<BrotliDecoder> = Decompressor::new();
//! decompressor.set_input(&compressed).unwrap();
//!
//! let mut out = [0; 16];
//! let n = decompressor.decompress(&mut out).unwrap();
//! assert_eq!(&out[..n], b"Hello Brotli");
//! assert!(decompressor.finished());
//! decompressor.end();
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

#[cfg(feature = "brotli")]
pub use brotli;
#[cfg(feature = "flate2")]
pub use flate2;

pub mod codec;
pub mod util;

mod decompress;
mod error;

#[cfg(feature = "brotli")]
pub use self::codec::BrotliDecoder;
#[cfg(feature = "deflate")]
pub use self::codec::DeflateDecoder;
#[cfg(feature = "zlib")]
pub use self::codec::ZlibDecoder;
pub use self::{
    codec::{Decode, DecodeStatus},
    decompress::{decompress_to_vec, Decompressor, DEFAULT_CAPACITY},
    error::{Error, Result},
};
