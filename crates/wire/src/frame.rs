//! Length-prefixed frame writer and reader.
//!
//! Integers are big-endian and width-exact. A frame is the serialized body
//! prefixed by its own byte length as a `u64`; the reader refuses to hand
//! out a single field until that prefix has been validated against the
//! input, so a truncated or padded file fails before any decoding happens.

use crate::error::WireError;

/// Accumulates a frame body and prepends the length prefix on completion.
#[derive(Clone, Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Appends a big-endian `u16`.
    pub fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a big-endian `u32`.
    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a big-endian `u64`.
    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends raw bytes verbatim.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of body bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when no body bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and returns the complete frame: the body length
    /// as a big-endian `u64` followed by the body itself.
    #[must_use]
    pub fn finish_frame(self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(8 + self.buf.len());
        frame.extend_from_slice(&(self.buf.len() as u64).to_be_bytes());
        frame.extend_from_slice(&self.buf);
        frame
    }
}

/// Cursor over a validated frame body.
#[derive(Clone, Debug, PartialEq)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Validates the frame prefix of `input` and positions the cursor at the
    /// first body byte.
    ///
    /// Fails when the prefix itself is truncated or when the declared body
    /// length differs from the bytes that follow the prefix.
    pub fn open_frame(input: &'a [u8]) -> Result<Self, WireError> {
        if input.len() < 8 {
            return Err(WireError::Truncated {
                needed: 8,
                remaining: input.len() as u64,
            });
        }

        let declared = u64::from_be_bytes(input[..8].try_into().expect("slice of length 8"));
        let actual = (input.len() - 8) as u64;
        if declared != actual {
            return Err(WireError::FrameLength { declared, actual });
        }

        Ok(Self {
            buf: input,
            pos: 8,
        })
    }

    /// Bytes left unread in the body.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if len > self.remaining() {
            return Err(WireError::Truncated {
                needed: len as u64,
                remaining: self.remaining() as u64,
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Reads a big-endian `u16`.
    pub fn take_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(
            self.take(2)?.try_into().expect("slice of length 2"),
        ))
    }

    /// Reads a big-endian `u32`.
    pub fn take_u32(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_be_bytes(
            self.take(4)?.try_into().expect("slice of length 4"),
        ))
    }

    /// Reads a big-endian `u64`.
    pub fn take_u64(&mut self) -> Result<u64, WireError> {
        Ok(u64::from_be_bytes(
            self.take(8)?.try_into().expect("slice of length 8"),
        ))
    }

    /// Reads `len` raw bytes.
    pub fn take_bytes(&mut self, len: u64) -> Result<&'a [u8], WireError> {
        let Ok(len) = usize::try_from(len) else {
            return Err(WireError::Truncated {
                needed: len,
                remaining: self.remaining() as u64,
            });
        };
        self.take(len)
    }

    /// Rejects a declared element count that cannot fit in the remaining
    /// body even at `min_elem_len` bytes per element.
    ///
    /// Codecs call this before looping over a count so a corrupt header
    /// cannot drive an effectively unbounded loop.
    pub fn ensure_count(&self, count: u64, min_elem_len: u64) -> Result<(), WireError> {
        let capacity = self.remaining() as u64 / min_elem_len.max(1);
        if count > capacity {
            return Err(WireError::ImpossibleCount {
                count,
                remaining: self.remaining() as u64,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_a_frame() {
        let mut writer = WireWriter::new();
        writer.put_u64(7);
        writer.put_u32(42);
        writer.put_u16(9);
        writer.put_bytes(b"abc");
        assert_eq!(writer.len(), 8 + 4 + 2 + 3);
        let frame = writer.finish_frame();

        let mut reader = WireReader::open_frame(&frame).expect("frame is well-formed");
        assert_eq!(reader.take_u64().unwrap(), 7);
        assert_eq!(reader.take_u32().unwrap(), 42);
        assert_eq!(reader.take_u16().unwrap(), 9);
        assert_eq!(reader.take_bytes(3).unwrap(), b"abc");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn empty_body_frame_is_valid() {
        let writer = WireWriter::new();
        assert!(writer.is_empty());
        let frame = writer.finish_frame();
        let reader = WireReader::open_frame(&frame).expect("empty body is a valid frame");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn prefix_body_disagreement_is_rejected() {
        // Declares a one-byte body but carries none.
        let input = [0, 0, 0, 0, 0, 0, 0, 1];
        assert_eq!(
            WireReader::open_frame(&input),
            Err(WireError::FrameLength {
                declared: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn short_prefix_is_rejected() {
        let input = [0, 0, 0];
        assert!(matches!(
            WireReader::open_frame(&input),
            Err(WireError::Truncated { needed: 8, .. })
        ));
    }

    #[test]
    fn reading_past_the_body_is_rejected() {
        let mut writer = WireWriter::new();
        writer.put_u16(1);
        let frame = writer.finish_frame();

        let mut reader = WireReader::open_frame(&frame).unwrap();
        assert!(matches!(
            reader.take_u32(),
            Err(WireError::Truncated { needed: 4, .. })
        ));
    }

    #[test]
    fn impossible_count_is_rejected() {
        let mut writer = WireWriter::new();
        writer.put_u64(u64::MAX);
        let frame = writer.finish_frame();

        let mut reader = WireReader::open_frame(&frame).unwrap();
        let count = reader.take_u64().unwrap();
        assert!(matches!(
            reader.ensure_count(count, 12),
            Err(WireError::ImpossibleCount { .. })
        ));
    }
}
