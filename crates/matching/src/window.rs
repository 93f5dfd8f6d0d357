//! Byte-at-a-time sliding window over the modified file.

use std::collections::VecDeque;
use std::io::{self, Read};

/// A `block_len`-byte window that advances one byte per step, remembering
/// the byte it evicted so the rolling checksum can subtract it.
///
/// Until `block_len` bytes have been consumed the window is still filling
/// and nothing is evicted; [`rolled_out`](Self::rolled_out) is meaningful
/// only once the window has been full at least once, which mirrors the
/// rolling checksum's priming phase.
#[derive(Debug)]
pub struct SlidingWindow<R> {
    inner: R,
    frame: VecDeque<u8>,
    block_len: u16,
    latest: u8,
    rolled_out: u8,
}

impl<R: Read> SlidingWindow<R> {
    /// Wraps `inner` with a window of `block_len` bytes.
    ///
    /// # Panics
    ///
    /// Panics when `block_len` is zero; a zero-length window can never
    /// prime and has no meaningful frame.
    #[must_use]
    pub fn new(inner: R, block_len: u16) -> Self {
        assert!(block_len > 0, "window length must be at least one byte");
        Self {
            inner,
            frame: VecDeque::with_capacity(usize::from(block_len)),
            block_len,
            latest: 0,
            rolled_out: 0,
        }
    }

    /// The fixed window length.
    #[must_use]
    pub const fn block_len(&self) -> u16 {
        self.block_len
    }

    /// Consumes one byte from the source.
    ///
    /// Returns `Ok(true)` when a byte was read: the byte becomes
    /// [`latest`](Self::latest), and if the window was already full the
    /// oldest byte is evicted into [`rolled_out`](Self::rolled_out).
    /// Returns `Ok(false)` at end-of-stream, leaving the window untouched.
    pub fn advance(&mut self) -> io::Result<bool> {
        let mut byte = [0_u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => break,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }

        if self.frame.len() == usize::from(self.block_len) {
            self.rolled_out = self.frame.pop_front().expect("full frame is non-empty");
        }
        self.latest = byte[0];
        self.frame.push_back(byte[0]);
        Ok(true)
    }

    /// The byte consumed by the most recent [`advance`](Self::advance).
    #[must_use]
    pub const fn latest(&self) -> u8 {
        self.latest
    }

    /// The byte evicted by the most recent [`advance`](Self::advance).
    #[must_use]
    pub const fn rolled_out(&self) -> u8 {
        self.rolled_out
    }

    /// The current window contents, oldest byte first.
    pub fn frame(&mut self) -> &[u8] {
        self.frame.make_contiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn fills_then_slides() {
        let mut window = SlidingWindow::new(Cursor::new(b"abcdef".to_vec()), 4);

        for _ in 0..4 {
            assert!(window.advance().unwrap());
        }
        assert_eq!(window.frame(), b"abcd");
        assert_eq!(window.latest(), b'd');

        assert!(window.advance().unwrap());
        assert_eq!(window.frame(), b"bcde");
        assert_eq!(window.rolled_out(), b'a');

        assert!(window.advance().unwrap());
        assert_eq!(window.frame(), b"cdef");
        assert_eq!(window.rolled_out(), b'b');

        assert!(!window.advance().unwrap());
        assert_eq!(window.frame(), b"cdef");
    }

    #[test]
    fn short_source_never_fills() {
        let mut window = SlidingWindow::new(Cursor::new(b"xy".to_vec()), 8);
        assert!(window.advance().unwrap());
        assert!(window.advance().unwrap());
        assert!(!window.advance().unwrap());
        assert_eq!(window.frame(), b"xy");
    }

    #[test]
    #[should_panic(expected = "window length")]
    fn zero_length_window_is_refused() {
        let _ = SlidingWindow::new(Cursor::new(Vec::new()), 0);
    }
}
