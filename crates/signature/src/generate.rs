//! Signature generation: one streaming pass over the base file.

use std::io;

use checksums::RollingChecksum;
use checksums::strong;
use tracing::debug;

use crate::reader::BlockReader;
use crate::signature::FileSignature;

/// Builds the signature of the base file behind `blocks`.
///
/// Blocks are enumerated in file order; each non-empty block contributes
/// its weak rolling checksum and strong digest under its index. A trailing
/// short block is indexed like any other. The signature inherits the
/// reader's block length. `content_hash`, when supplied, is the caller's
/// whole-file digest of the same input (the signer itself only sees the
/// stream once, so it cannot compute it here).
pub fn generate_signature<R: io::Read>(
    mut blocks: BlockReader<R>,
    content_hash: Option<[u8; 32]>,
) -> io::Result<FileSignature> {
    let block_len = blocks.block_len();
    let mut signature = FileSignature::new(block_len);
    if let Some(hash) = content_hash {
        signature.set_content_hash(hash);
    }

    let mut index: u32 = 0;
    loop {
        let block = blocks.next_block()?;
        if block.is_empty() {
            break;
        }

        let weak = RollingChecksum::hash_buffer(&block);
        let strong = strong::block_digest(&block);
        signature.insert(weak, strong, index);
        index += 1;
    }

    debug!(blocks = index, block_len, "indexed base file");
    Ok(signature)
}
