//! Fixed-size block source over any byte stream.

use std::io::{self, Read};

/// Yields successive non-overlapping blocks from an underlying reader.
///
/// Every block is `block_len` bytes except possibly the last, which holds
/// whatever remains. An empty block signals end-of-stream; in particular a
/// source whose length is an exact multiple of `block_len` ends with one
/// empty yield.
#[derive(Debug)]
pub struct BlockReader<R> {
    inner: R,
    block_len: u16,
}

impl<R: Read> BlockReader<R> {
    /// Wraps `inner`, cutting it into `block_len`-byte blocks.
    pub const fn new(inner: R, block_len: u16) -> Self {
        Self { inner, block_len }
    }

    /// The configured block length.
    #[must_use]
    pub const fn block_len(&self) -> u16 {
        self.block_len
    }

    /// Reads the next block, short only at end-of-stream.
    ///
    /// Loops over partial reads so a block is never split by an
    /// uncooperative reader; `Interrupted` errors are retried.
    pub fn next_block(&mut self) -> io::Result<Vec<u8>> {
        let mut block = vec![0_u8; usize::from(self.block_len)];
        let mut filled = 0;

        while filled < block.len() {
            match self.inner.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }

        block.truncate(filled);
        Ok(block)
    }

    /// Discards up to `count` blocks, stopping early at end-of-stream.
    ///
    /// Returns the block that follows the skipped run (possibly empty when
    /// the stream ended inside or right after the run).
    pub fn skip_blocks(&mut self, count: u32) -> io::Result<Vec<u8>> {
        let mut block = Vec::new();
        for _ in 0..count {
            block = self.next_block()?;
            if block.is_empty() {
                break;
            }
        }
        Ok(block)
    }
}
