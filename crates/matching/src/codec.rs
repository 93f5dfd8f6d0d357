//! Wire codec for [`DeltaScript`].
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! total_len : u64
//! sha_len   : u64        sha[sha_len]
//! block_len : u16
//! inserts   : u64        inserts x { key : u32 | bytes_len : u64 | bytes }
//! deletes   : u64        deletes x { key : u32 | run : u32 }
//! ```

use wire::{WireError, WireReader, WireWriter};

use crate::delta::DeltaScript;

impl DeltaScript {
    /// Serializes the script into a length-prefixed frame.
    ///
    /// Entries are written in ascending key order, the order the patcher
    /// expects to encounter them.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer.put_u64(self.content_hash().len() as u64);
        writer.put_bytes(self.content_hash());
        writer.put_u16(self.block_len());

        writer.put_u64(self.insert_count() as u64);
        for (index, bytes) in self.inserts() {
            writer.put_u32(index);
            writer.put_u64(bytes.len() as u64);
            writer.put_bytes(bytes);
        }

        writer.put_u64(self.delete_count() as u64);
        for (index, run) in self.deletes() {
            writer.put_u32(index);
            writer.put_u32(run);
        }

        writer.finish_frame()
    }

    /// Deserializes a delta frame produced by [`Self::to_bytes`].
    ///
    /// Zero-length inserts and zero-block delete runs are rejected: the
    /// generator never emits them and the patcher cannot make progress on
    /// them, so their presence means the frame is corrupt.
    pub fn from_bytes(input: &[u8]) -> Result<Self, WireError> {
        let mut reader = WireReader::open_frame(input)?;

        let sha_len = reader.take_u64()?;
        let content_hash = reader.take_bytes(sha_len)?.to_vec();
        let block_len = reader.take_u16()?;

        let mut delta = Self::new(block_len);
        delta.set_content_hash(content_hash);

        let insert_count = reader.take_u64()?;
        // key (4) + bytes_len (8) + at least one literal byte
        reader.ensure_count(insert_count, 13)?;
        for _ in 0..insert_count {
            let index = reader.take_u32()?;
            let bytes_len = reader.take_u64()?;
            if bytes_len == 0 {
                return Err(WireError::Invalid {
                    what: "zero-length insert",
                });
            }
            let bytes = reader.take_bytes(bytes_len)?.to_vec();
            delta.insert_literals(index, bytes);
        }

        let delete_count = reader.take_u64()?;
        // key (4) + run (4)
        reader.ensure_count(delete_count, 8)?;
        for _ in 0..delete_count {
            let index = reader.take_u32()?;
            let run = reader.take_u32()?;
            if run == 0 {
                return Err(WireError::Invalid {
                    what: "zero-block delete run",
                });
            }
            delta.delete_run(index, run);
        }

        Ok(delta)
    }
}
