#![allow(dead_code)] // each test binary uses its own subset of helpers

use std::io::Read;

use pull_decompress::{Decode, Decompressor};

pub fn read_to_vec(mut reader: impl Read) -> Vec<u8> {
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    out
}

/// Repeat a short phrase until the result is `len` bytes long.
pub fn redundant_text(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

/// Drain everything the adapter can currently produce, `chunk` bytes at a
/// time.
pub fn drain_chunked<D: Decode + Default>(
    decompressor: &mut Decompressor<'_, D>,
    chunk: usize,
) -> Vec<u8> {
    assert!(chunk > 0);
    let mut out = Vec::new();
    let mut buf = vec![0; chunk];
    loop {
        let n = decompressor.decompress(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    out
}

#[cfg(feature = "brotli")]
pub mod brotli {
    use pull_decompress::brotli::{enc::backward_references::BrotliEncoderParams, CompressorReader};

    pub fn compress(bytes: &[u8]) -> Vec<u8> {
        let mut params = BrotliEncoderParams::default();
        params.quality = 1;
        super::read_to_vec(CompressorReader::with_params(bytes, 0, &params))
    }
}

#[cfg(feature = "deflate")]
pub mod deflate {
    use pull_decompress::flate2::{bufread::DeflateEncoder, Compression};

    pub fn compress(bytes: &[u8]) -> Vec<u8> {
        super::read_to_vec(DeflateEncoder::new(bytes, Compression::fast()))
    }
}

#[cfg(feature = "zlib")]
pub mod zlib {
    use pull_decompress::flate2::{bufread::ZlibEncoder, Compression};

    pub fn compress(bytes: &[u8]) -> Vec<u8> {
        super::read_to_vec(ZlibEncoder::new(bytes, Compression::fast()))
    }
}
