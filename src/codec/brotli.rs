use std::{fmt, io};

use brotli::{enc::StandardAlloc, BrotliDecompressStream, BrotliResult, BrotliState};

use crate::{
    codec::{Decode, DecodeStatus},
    util::PartialBuffer,
};

type State = BrotliState<StandardAlloc, StandardAlloc, StandardAlloc>;

fn fresh_state() -> State {
    BrotliState::new(
        StandardAlloc::default(),
        StandardAlloc::default(),
        StandardAlloc::default(),
    )
}

/// Buffer-backed brotli decode primitive driven through the raw streaming API.
pub struct BrotliDecoder {
    state: State,
    total_out: usize,
}

impl BrotliDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for BrotliDecoder {
    fn default() -> Self {
        Self {
            state: fresh_state(),
            total_out: 0,
        }
    }
}

impl Decode for BrotliDecoder {
    fn reinit(&mut self) -> io::Result<()> {
        self.state = fresh_state();
        self.total_out = 0;
        Ok(())
    }

    fn decode(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    ) -> io::Result<DecodeStatus> {
        let in_buf = input.unwritten();
        let out_buf = output.unwritten_mut();

        let mut available_in = in_buf.len();
        let mut input_offset = 0;
        let mut available_out = out_buf.len();
        let mut output_offset = 0;

        let result = BrotliDecompressStream(
            &mut available_in,
            &mut input_offset,
            in_buf,
            &mut available_out,
            &mut output_offset,
            out_buf,
            &mut self.total_out,
            &mut self.state,
        );

        input.advance(input_offset);
        output.advance(output_offset);

        match result {
            BrotliResult::ResultSuccess => Ok(DecodeStatus::Finished),
            BrotliResult::NeedsMoreInput => Ok(DecodeStatus::NeedsInput),
            BrotliResult::NeedsMoreOutput => Ok(DecodeStatus::NeedsOutput),
            BrotliResult::ResultFailure => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "corrupt brotli stream",
            )),
        }
    }
}

impl fmt::Debug for BrotliDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrotliDecoder")
            .field("state", &"<no debug>")
            .field("total_out", &self.total_out)
            .finish()
    }
}
