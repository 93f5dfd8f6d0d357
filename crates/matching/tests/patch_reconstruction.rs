//! Patch-side reconstruction scenarios.
//!
//! Every delta the generation suite pins down is replayed here against the
//! base buffer, and the output must equal the modified file byte for byte.
//! The sign → diff → patch round trip is the engine's defining property, so
//! it is checked both for the hand-edited scenarios and for less regular
//! inputs.

use std::io::Cursor;

use matching::{SlidingWindow, apply_delta, generate_delta};
use signature::{BlockReader, FileSignature, generate_signature};

const BLOCK_LEN: u16 = 4;

fn base_buffer() -> Vec<u8> {
    vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5]
}

fn sign(data: &[u8], block_len: u16) -> FileSignature {
    generate_signature(BlockReader::new(Cursor::new(data.to_vec()), block_len), None)
        .expect("cursor reads cannot fail")
}

/// Signs `base`, diffs `modified` against it, applies the delta back onto
/// `base`, and asserts the reconstruction is exact.
fn assert_round_trip(base: &[u8], modified: &[u8], block_len: u16) {
    let signature = sign(base, block_len);
    let window = SlidingWindow::new(Cursor::new(modified.to_vec()), block_len);
    let delta = generate_delta(&signature, window, false).expect("cursor reads cannot fail");

    let mut reader = BlockReader::new(Cursor::new(base.to_vec()), delta.block_len());
    let mut output = Vec::new();
    apply_delta(&delta, &mut reader, &mut output, None).expect("apply succeeds");

    assert_eq!(output, modified, "reconstruction diverged from the input");
}

#[test]
fn append_past_the_end() {
    let mut modified = base_buffer();
    modified.extend_from_slice(&[0, 0]);
    assert_round_trip(&base_buffer(), &modified, BLOCK_LEN);
}

#[test]
fn insert_between_blocks() {
    let mut modified = base_buffer();
    modified.splice(8..8, [0, 0]);
    assert_round_trip(&base_buffer(), &modified, BLOCK_LEN);
}

#[test]
fn insert_before_the_first_block() {
    let mut modified = vec![0, 0];
    modified.extend_from_slice(&base_buffer());
    assert_round_trip(&base_buffer(), &modified, BLOCK_LEN);
}

#[test]
fn edit_straddling_two_blocks() {
    let modified = vec![
        1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 0, 0, 4, 4, 4, 5, 5, 5, 5,
    ];
    assert_round_trip(&base_buffer(), &modified, BLOCK_LEN);
}

#[test]
fn truncate_the_last_block() {
    let mut modified = base_buffer();
    modified.truncate(16);
    assert_round_trip(&base_buffer(), &modified, BLOCK_LEN);
}

#[test]
fn drop_the_first_block() {
    assert_round_trip(&base_buffer(), &base_buffer()[4..], BLOCK_LEN);
}

#[test]
fn empty_modified_file() {
    assert_round_trip(&base_buffer(), &[], BLOCK_LEN);
}

#[test]
fn unrelated_content() {
    assert_round_trip(&base_buffer(), &[6, 6, 6, 6, 6], BLOCK_LEN);
}

// ============================================================================
// Beyond the fixed scenarios
// ============================================================================

#[test]
fn identical_files_round_trip() {
    assert_round_trip(&base_buffer(), &base_buffer(), BLOCK_LEN);
}

#[test]
fn empty_base_file_is_pure_insertion() {
    assert_round_trip(&[], b"written from nothing", BLOCK_LEN);
}

#[test]
fn reordered_blocks_round_trip() {
    // The second occurrence of each block is ignored as out-of-order, but
    // the reconstruction must still be exact.
    assert_round_trip(b"aaaabbbbcccc", b"ccccbbbbaaaa", BLOCK_LEN);
}

#[test]
fn repeated_base_blocks_round_trip() {
    // Identical base blocks collapse to a single index entry; the script
    // leans on literals instead and must still reproduce the input.
    assert_round_trip(&[9_u8; 16], &[9_u8; 16], BLOCK_LEN);
    assert_round_trip(&[9_u8; 16], &[9_u8; 24], BLOCK_LEN);
}

#[test]
fn unaligned_lengths_round_trip() {
    let base: Vec<u8> = (0..103).map(|i| (i * 31 % 256) as u8).collect();
    let mut modified = base.clone();
    modified.splice(40..45, [250, 251, 252]);
    modified.extend_from_slice(&[1, 2, 3]);
    assert_round_trip(&base, &modified, 8);
}

#[test]
fn single_byte_blocks_round_trip() {
    assert_round_trip(b"abcdef", b"abXdeY", 1);
}

#[test]
fn scattered_edits_round_trip() {
    // Period-251 sequence: no two of the 16-byte blocks are identical, so
    // every base block keeps its own index entry.
    let base: Vec<u8> = (0_u32..512).map(|i| (i * 73 % 251) as u8).collect();
    let mut modified = base.clone();
    modified.splice(0..0, [7, 7, 7]);
    modified.splice(200..232, std::iter::empty::<u8>());
    modified.splice(300..300, [9; 10]);
    assert_round_trip(&base, &modified, 16);
}
