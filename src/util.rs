//! Byte-cursor types shared by the codecs and the adapter.

/// Buffer tracking how much of its contents has been consumed or produced.
///
/// For an input view the written prefix is what the decode primitive has
/// already taken; for an output span it is what the primitive has already
/// emitted. The unwritten remainder is what is still available either way.
#[derive(Debug, Default)]
pub struct PartialBuffer<B: AsRef<[u8]>> {
    buffer: B,
    index: usize,
}

impl<B: AsRef<[u8]>> PartialBuffer<B> {
    /// Create a new [`PartialBuffer`] with its cursor at the start.
    pub fn new(buffer: B) -> Self {
        Self { buffer, index: 0 }
    }

    /// Written part of the buffer.
    pub fn written(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.index]
    }

    /// Unwritten part of the buffer.
    pub fn unwritten(&self) -> &[u8] {
        &self.buffer.as_ref()[self.index..]
    }

    /// Advance the cursor past `amount` freshly consumed or produced bytes.
    pub fn advance(&mut self, amount: usize) {
        debug_assert!(self.index + amount <= self.buffer.as_ref().len());
        self.index += amount;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PartialBuffer<B> {
    /// Mutable view of the unwritten part of the buffer.
    pub fn unwritten_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[self.index..]
    }
}

/// Fixed-capacity staging area for decoded bytes.
///
/// Allocated once at construction and logically cleared on each refill; the
/// capacity never changes afterwards. `pos..filled` is the unread region.
#[derive(Debug)]
pub struct StagingBuffer {
    storage: Box<[u8]>,
    filled: usize,
    pos: usize,
}

impl StagingBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            filled: 0,
            pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Count of unread bytes ready to drain.
    pub fn len(&self) -> usize {
        self.filled - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.filled
    }

    /// Reset both cursors, keeping the allocation.
    pub fn clear(&mut self) {
        self.pos = 0;
        self.filled = 0;
    }

    /// The unread region.
    pub fn unread(&self) -> &[u8] {
        &self.storage[self.pos..self.filled]
    }

    /// Advance the read cursor past `amount` drained bytes.
    pub fn consume(&mut self, amount: usize) {
        debug_assert!(self.pos + amount <= self.filled);
        self.pos += amount;
    }

    /// The whole backing allocation, handed to a refill to decode into.
    pub(crate) fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Mark the first `filled` bytes of the backing allocation as unread.
    pub(crate) fn set_filled(&mut self, filled: usize) {
        debug_assert!(filled <= self.storage.len());
        self.pos = 0;
        self.filled = filled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_buffer_splits_written_and_unwritten() {
        let mut buffer = PartialBuffer::new([1u8, 2, 3, 4]);
        assert_eq!(buffer.written(), &[]);
        assert_eq!(buffer.unwritten(), &[1, 2, 3, 4]);

        buffer.advance(3);
        assert_eq!(buffer.written(), &[1, 2, 3]);
        assert_eq!(buffer.unwritten(), &[4]);

        buffer.unwritten_mut()[0] = 9;
        buffer.advance(1);
        assert_eq!(buffer.written(), &[1, 2, 3, 9]);
        assert!(buffer.unwritten().is_empty());
    }

    #[test]
    fn staging_buffer_cursors() {
        let mut staging = StagingBuffer::with_capacity(8);
        assert_eq!(staging.capacity(), 8);
        assert!(staging.is_empty());

        staging.storage_mut()[..3].copy_from_slice(&[7, 8, 9]);
        staging.set_filled(3);
        assert_eq!(staging.len(), 3);
        assert_eq!(staging.unread(), &[7, 8, 9]);

        staging.consume(2);
        assert_eq!(staging.unread(), &[9]);
        staging.consume(1);
        assert!(staging.is_empty());

        staging.clear();
        assert_eq!(staging.capacity(), 8);
    }
}
