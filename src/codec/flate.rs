use std::io;

use flate2::{Decompress, FlushDecompress, Status};

use crate::{
    codec::{Decode, DecodeStatus},
    util::PartialBuffer,
};

/// Decode primitive over `flate2::Decompress`, shared by the raw-deflate and
/// zlib codecs.
#[derive(Debug)]
pub struct FlateDecoder {
    zlib_header: bool,
    decompress: Decompress,
}

impl FlateDecoder {
    pub fn new(zlib_header: bool) -> Self {
        Self {
            zlib_header,
            decompress: Decompress::new(zlib_header),
        }
    }
}

impl Decode for FlateDecoder {
    fn reinit(&mut self) -> io::Result<()> {
        self.decompress.reset(self.zlib_header);
        Ok(())
    }

    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> io::Result<DecodeStatus> {
        let prior_in = self.decompress.total_in();
        let prior_out = self.decompress.total_out();

        let status = self
            .decompress
            .decompress(
                input.unwritten(),
                output.unwritten_mut(),
                FlushDecompress::None,
            )
            .map_err(io::Error::other)?;

        input.advance((self.decompress.total_in() - prior_in) as usize);
        output.advance((self.decompress.total_out() - prior_out) as usize);

        Ok(match status {
            Status::StreamEnd => DecodeStatus::Finished,
            // `Ok` and `BufError` both mean "call again"; which buffer is the
            // bottleneck is visible from whether the output span filled up.
            Status::Ok | Status::BufError => {
                if output.unwritten().is_empty() {
                    DecodeStatus::NeedsOutput
                } else {
                    DecodeStatus::NeedsInput
                }
            }
        })
    }
}

/// Raw-deflate decode primitive.
#[cfg(feature = "deflate")]
#[derive(Debug)]
pub struct DeflateDecoder {
    inner: FlateDecoder,
}

#[cfg(feature = "deflate")]
impl DeflateDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "deflate")]
impl Default for DeflateDecoder {
    fn default() -> Self {
        Self {
            inner: FlateDecoder::new(false),
        }
    }
}

#[cfg(feature = "deflate")]
impl Decode for DeflateDecoder {
    fn reinit(&mut self) -> io::Result<()> {
        self.inner.reinit()
    }

    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> io::Result<DecodeStatus> {
        self.inner.decode(input, output)
    }
}

/// Zlib (deflate with a zlib header and checksum) decode primitive.
#[cfg(feature = "zlib")]
#[derive(Debug)]
pub struct ZlibDecoder {
    inner: FlateDecoder,
}

#[cfg(feature = "zlib")]
impl ZlibDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "zlib")]
impl Default for ZlibDecoder {
    fn default() -> Self {
        Self {
            inner: FlateDecoder::new(true),
        }
    }
}

#[cfg(feature = "zlib")]
impl Decode for ZlibDecoder {
    fn reinit(&mut self) -> io::Result<()> {
        self.inner.reinit()
    }

    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> io::Result<DecodeStatus> {
        self.inner.decode(input, output)
    }
}
