//! Wire codec for [`FileSignature`].
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! total_len : u64
//! sha_len   : u64        sha[sha_len]
//! block_len : u16
//! entries   : u64
//! entries x { weak : u32 | inner : u64 | inner x { strong : u64 | index : u32 } }
//! ```

use wire::{WireError, WireReader, WireWriter};

use crate::signature::FileSignature;

impl FileSignature {
    /// Serializes the signature into a length-prefixed frame.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        writer.put_u64(self.content_hash().len() as u64);
        writer.put_bytes(self.content_hash());
        writer.put_u16(self.block_len());

        let entries = self.sorted_entries();
        writer.put_u64(entries.len() as u64);
        for (weak, strongs) in entries {
            writer.put_u32(weak);
            writer.put_u64(strongs.len() as u64);
            for (strong, index) in strongs {
                writer.put_u64(strong);
                writer.put_u32(index);
            }
        }

        writer.finish_frame()
    }

    /// Deserializes a signature frame produced by [`Self::to_bytes`].
    pub fn from_bytes(input: &[u8]) -> Result<Self, WireError> {
        let mut reader = WireReader::open_frame(input)?;

        let sha_len = reader.take_u64()?;
        let content_hash = reader.take_bytes(sha_len)?.to_vec();
        let block_len = reader.take_u16()?;

        let mut signature = Self::new(block_len);
        signature.set_content_hash(content_hash);

        let outer_count = reader.take_u64()?;
        // weak (4) + inner count (8)
        reader.ensure_count(outer_count, 12)?;
        for _ in 0..outer_count {
            let weak = reader.take_u32()?;
            let inner_count = reader.take_u64()?;
            // strong (8) + index (4)
            reader.ensure_count(inner_count, 12)?;
            for _ in 0..inner_count {
                let strong = reader.take_u64()?;
                let index = reader.take_u32()?;
                signature.insert(weak, strong, index);
            }
        }

        Ok(signature)
    }
}
