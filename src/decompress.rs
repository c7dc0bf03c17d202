//! The pull-style buffering adapter over a decode primitive.

use std::{io, panic::Location};

use log::warn;

use crate::{
    codec::{Decode, DecodeStatus},
    error::{Error, Result},
    util::{PartialBuffer, StagingBuffer},
};

/// Default staging-buffer capacity, in bytes.
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

/// A pull-style streaming decompressor over a decode primitive `D`.
///
/// The caller stages compressed bytes with [`set_input`](Self::set_input),
/// drains decompressed bytes in caller-sized chunks with
/// [`decompress`](Self::decompress), and drives its own loop with
/// [`needs_input`](Self::needs_input) and [`finished`](Self::finished).
/// Decoded bytes are staged in a fixed-capacity buffer allocated once at
/// construction; the staging capacity and the caller's chunk size bound the
/// decode work done by any single call.
///
/// A compressed stream may be fed through one `set_input` call per unit or
/// split across several calls; the primitive is re-initialized only when a
/// previous unit decoded to completion. Instances are not thread-safe; use
/// one per concurrent stream.
#[derive(Debug)]
pub struct Decompressor<'a, D: Decode> {
    decoder: Option<D>,
    input: PartialBuffer<&'a [u8]>,
    output: StagingBuffer,
    state: DecodeStatus,
    total_in: u64,
    total_out: u64,
    created_at: &'static Location<'static>,
}

impl<'a, D: Decode + Default> Decompressor<'a, D> {
    /// Create an adapter with the default staging capacity.
    #[track_caller]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an adapter whose staging buffer holds up to `capacity` decoded
    /// bytes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "staging capacity must be nonzero");
        Self {
            decoder: None,
            input: PartialBuffer::new(&[]),
            output: StagingBuffer::with_capacity(capacity),
            state: DecodeStatus::NeedsInput,
            total_in: 0,
            total_out: 0,
            created_at: Location::caller(),
        }
    }

    /// Stage a view over the caller's compressed bytes and eagerly refill the
    /// staging buffer from it.
    ///
    /// The previous input must have been fully consumed first; staging on top
    /// of an unconsumed view is a contract violation. `bytes` is borrowed, not
    /// copied: it must stay untouched until [`needs_input`](Self::needs_input)
    /// reports true again. [`total_bytes_in`](Self::total_bytes_in) grows by
    /// the full `bytes.len()` regardless of how much the primitive consumes
    /// during this call.
    pub fn set_input(&mut self, bytes: &'a [u8]) -> Result<()> {
        if !self.input.unwritten().is_empty() {
            return Err(Error::Contract(
                "set_input called with unconsumed input staged",
            ));
        }

        match self.decoder.as_mut() {
            Some(decoder) => {
                // A completed unit means this input starts a fresh decode
                // session; otherwise it continues the current one.
                if self.state == DecodeStatus::Finished {
                    decoder.reinit().map_err(Error::Decode)?;
                }
            }
            None => self.decoder = Some(D::default()),
        }

        self.input = PartialBuffer::new(bytes);
        self.state = DecodeStatus::NeedsInput;
        self.total_in += bytes.len() as u64;

        // Refill requires a drained staging buffer; with undrained output
        // still present the refill happens on the next drain instead.
        if self.output.is_empty() {
            self.refill()?;
        }
        Ok(())
    }

    /// Drain up to `out.len()` decompressed bytes into `out`, refilling the
    /// staging buffer whenever it empties and more can be produced.
    ///
    /// Returns the number of bytes copied, which may be less than `out.len()`;
    /// a partial fill is not an error. Returns 0 immediately when nothing can
    /// be produced until more input is staged.
    pub fn decompress(&mut self, out: &mut [u8]) -> Result<usize> {
        let mut dest = PartialBuffer::new(out);

        while !dest.unwritten().is_empty() {
            if self.output.is_empty() {
                if !self.can_produce() {
                    break;
                }
                self.refill()?;
                if self.output.is_empty() {
                    break;
                }
            }

            let len = dest.unwritten().len().min(self.output.len());
            dest.unwritten_mut()[..len].copy_from_slice(&self.output.unread()[..len]);
            dest.advance(len);
            self.output.consume(len);
        }

        let written = dest.written().len();
        self.total_out += written as u64;
        Ok(written)
    }

    /// True when the adapter can make no progress without another
    /// [`set_input`](Self::set_input): the input view is exhausted, the
    /// staging buffer is drained, and the primitive holds no pending output.
    pub fn needs_input(&self) -> bool {
        self.input.unwritten().is_empty()
            && self.output.is_empty()
            && !self.has_pending_output()
    }

    /// True when the staged compressed data has been fully consumed and fully
    /// drained.
    pub fn finished(&self) -> bool {
        self.output.is_empty()
            && !self.has_pending_output()
            && (self.input.unwritten().is_empty() || self.state == DecodeStatus::Finished)
    }

    /// Count of decoded bytes ready to drain without further decode work.
    ///
    /// This is a pure query and never drives the primitive. When the staging
    /// buffer is empty it reports the sentinel 1 if another refill could still
    /// produce bytes, and 0 once nothing more can come.
    pub fn get_remaining(&self) -> usize {
        let buffered = self.output.len();
        if buffered > 0 {
            buffered
        } else if self.can_produce() {
            1
        } else {
            0
        }
    }

    /// Preset dictionaries are never requested.
    pub fn needs_dictionary(&self) -> bool {
        false
    }

    /// Preset dictionaries are not supported by this primitive family; this
    /// always fails with a contract violation.
    pub fn set_dictionary(&mut self, _dictionary: &[u8]) -> Result<()> {
        Err(Error::Contract("preset dictionaries are not supported"))
    }

    /// Total compressed bytes accepted through `set_input` since construction
    /// or the last `reset`.
    pub fn total_bytes_in(&self) -> u64 {
        self.total_in
    }

    /// Total decompressed bytes handed to the caller since construction or the
    /// last `reset`.
    pub fn total_bytes_out(&self) -> u64 {
        self.total_out
    }

    /// Return the adapter to its just-constructed state for reuse.
    ///
    /// All produced output must have been drained first; discarding unread
    /// decoded bytes silently would be a bug in the caller, so this fails with
    /// a contract violation instead.
    pub fn reset(&mut self) -> Result<()> {
        if !self.output.is_empty() {
            return Err(Error::Contract("reset called with undrained output"));
        }
        self.release();
        self.total_in = 0;
        self.total_out = 0;
        Ok(())
    }

    /// Release the decode primitive's resources.
    ///
    /// Idempotent: calling it again, or before any input was staged, is a
    /// no-op. Undrained output is discarded with a warning; the diagnostic
    /// counters are kept.
    pub fn end(&mut self) {
        if !self.output.is_empty() {
            warn!(
                "decompressor closed with {} undrained decoded bytes",
                self.output.len()
            );
        }
        self.release();
    }

    fn release(&mut self) {
        self.decoder = None;
        self.input = PartialBuffer::new(&[]);
        self.output.clear();
        self.state = DecodeStatus::NeedsInput;
    }

    fn has_pending_output(&self) -> bool {
        self.state == DecodeStatus::NeedsOutput
    }

    /// Whether another refill could put bytes in the staging buffer.
    fn can_produce(&self) -> bool {
        match self.state {
            DecodeStatus::Finished => false,
            DecodeStatus::NeedsOutput => true,
            DecodeStatus::NeedsInput => !self.input.unwritten().is_empty(),
        }
    }

    /// Drive the primitive until the staging buffer is full, the input view is
    /// exhausted, the stream ends, or no progress is possible.
    ///
    /// Decode failures are fatal to the current stream and are never retried.
    fn refill(&mut self) -> Result<()> {
        assert!(
            self.output.is_empty(),
            "refill requires a drained staging buffer"
        );
        self.output.clear();

        let decoder = match self.decoder.as_mut() {
            Some(decoder) => decoder,
            None => return Ok(()),
        };

        let mut produced = PartialBuffer::new(self.output.storage_mut());
        loop {
            let before_in = self.input.written().len();
            let before_out = produced.written().len();

            let status = decoder
                .decode(&mut self.input, &mut produced)
                .map_err(Error::Decode)?;
            self.state = status;

            match status {
                DecodeStatus::Finished => break,
                DecodeStatus::NeedsOutput if produced.unwritten().is_empty() => break,
                DecodeStatus::NeedsInput if self.input.unwritten().is_empty() => break,
                _ => {}
            }

            // A conforming primitive keeps making progress while it has input
            // and output space; bail out rather than spin if it does not.
            if self.input.written().len() == before_in && produced.written().len() == before_out {
                break;
            }
        }

        let filled = produced.written().len();
        self.output.set_filled(filled);
        Ok(())
    }

    fn stream_complete(&self) -> bool {
        self.state == DecodeStatus::Finished
    }
}

impl<'a, D: Decode + Default> Default for Decompressor<'a, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decode> Drop for Decompressor<'_, D> {
    fn drop(&mut self) {
        // Safety net only; `end` is the supported release path.
        if self.decoder.is_some()
            && (!self.input.unwritten().is_empty() || !self.output.is_empty())
        {
            warn!(
                "decompressor created at {} dropped with {} unconsumed input bytes and {} \
                 undrained output bytes; call end() first",
                self.created_at,
                self.input.unwritten().len(),
                self.output.len(),
            );
        }
    }
}

/// Decompress one complete compressed unit into a freshly allocated `Vec`.
///
/// Fails with a decode error if the input ends before the stream is complete.
pub fn decompress_to_vec<D: Decode + Default>(input: &[u8]) -> Result<Vec<u8>> {
    let mut decompressor = Decompressor::<D>::new();
    decompressor.set_input(input)?;

    let mut out = Vec::new();
    let mut chunk = [0; 4096];
    loop {
        let n = decompressor.decompress(&mut chunk)?;
        if n == 0 {
            if !decompressor.stream_complete() && !input.is_empty() {
                return Err(Error::Decode(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "compressed input ended before the stream was complete",
                )));
            }
            break;
        }
        out.extend_from_slice(&chunk[..n]);
    }
    decompressor.end();
    Ok(out)
}
