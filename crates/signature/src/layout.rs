//! Block-size heuristic for unforced signatures.

/// Largest block length the heuristic will pick.
pub const MAX_BLOCK_LEN: u16 = 4096;

/// Fewest blocks the heuristic aims to cut a file into.
const MIN_BLOCK_COUNT: u64 = 2;

/// Derives a block length from the base file's size.
///
/// Starts at [`MAX_BLOCK_LEN`] and halves until the file would span at
/// least [`MIN_BLOCK_COUNT`] blocks, never going below 1. Small files get
/// proportionally small blocks so a signature always has something to
/// match against; large files cap out at 4 KiB.
#[must_use]
pub fn derive_block_len(file_len: u64) -> u16 {
    let mut block_len = MAX_BLOCK_LEN;
    while block_len > 1 && file_len / MIN_BLOCK_COUNT < u64::from(block_len) {
        block_len /= 2;
    }
    block_len
}
