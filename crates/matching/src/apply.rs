//! Delta application: reconstructing the modified file from the base.

use std::io::{self, Read, Write};

use signature::BlockReader;
use thiserror::Error;
use tracing::debug;

use crate::delta::DeltaScript;

/// Errors raised while applying a delta.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The delta's content hash disagrees with the base file's.
    #[error("delta content hash does not match the base file")]
    IntegrityMismatch,
    /// Reading the base or writing the output failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

/// Replays `delta` against the base file's block stream, writing the
/// reconstructed file to `output`.
///
/// When `expected_hash` is supplied (integrity on) it must equal the
/// delta's stored content hash byte-for-byte; on mismatch the function
/// fails before a single byte reaches `output`. Callers either recompute
/// the base digest or pass one they already hold.
///
/// At each block index, pending literal inserts are emitted first; a delete
/// run then skips base blocks without emitting, otherwise the block itself
/// is copied through. A trailing insert keyed one past the last base block
/// is emitted after the stream ends.
pub fn apply_delta<R: Read, W: Write>(
    delta: &DeltaScript,
    base: &mut BlockReader<R>,
    output: &mut W,
    expected_hash: Option<&[u8]>,
) -> Result<(), ApplyError> {
    if let Some(expected) = expected_hash {
        if expected != delta.content_hash() {
            return Err(ApplyError::IntegrityMismatch);
        }
    }

    let mut index: u32 = 0;
    let mut block = base.next_block()?;

    while !block.is_empty() {
        if let Some(bytes) = delta.insert_at(index) {
            output.write_all(bytes)?;
        }

        if let Some(run) = delta.delete_at(index) {
            block = base.skip_blocks(run)?;
            index += run;
        } else {
            output.write_all(&block)?;
            block = base.next_block()?;
            index += 1;
        }
    }

    if let Some(bytes) = delta.insert_at(index) {
        output.write_all(bytes)?;
    }

    output.flush()?;
    debug!(blocks = index, "applied delta");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn apply(delta: &DeltaScript, base: &[u8], expected_hash: Option<&[u8]>) -> Vec<u8> {
        let mut reader = BlockReader::new(Cursor::new(base.to_vec()), delta.block_len());
        let mut output = Vec::new();
        apply_delta(delta, &mut reader, &mut output, expected_hash).expect("apply succeeds");
        output
    }

    #[test]
    fn identity_script_copies_the_base_through() {
        let delta = DeltaScript::new(4);
        assert_eq!(apply(&delta, b"abcdefgh", None), b"abcdefgh");
    }

    #[test]
    fn insert_and_delete_at_the_same_index_apply_insert_first() {
        let mut delta = DeltaScript::new(4);
        delta.insert_literals(1, b"XY".to_vec());
        delta.delete_run(1, 1);
        // Base blocks: "aaaa" "bbbb" "cccc"; block 1 is replaced by "XY".
        assert_eq!(apply(&delta, b"aaaabbbbcccc", None), b"aaaaXYcccc");
    }

    #[test]
    fn supplied_hash_matching_the_delta_passes() {
        let mut delta = DeltaScript::new(4);
        delta.set_content_hash(vec![1, 2, 3, 4, 5]);
        assert_eq!(apply(&delta, b"abcd", Some([1, 2, 3, 4, 5].as_slice())), b"abcd");
    }

    #[test]
    fn supplied_hash_mismatch_writes_nothing() {
        let mut delta = DeltaScript::new(4);
        delta.set_content_hash(vec![1, 2, 3, 4, 5]);

        let mut reader = BlockReader::new(Cursor::new(b"abcd".to_vec()), 4);
        let mut output = Vec::new();
        let err = apply_delta(
            &delta,
            &mut reader,
            &mut output,
            Some([6, 7, 8, 9, 10].as_slice()),
        )
        .expect_err("hash mismatch must fail");

        assert!(matches!(err, ApplyError::IntegrityMismatch));
        assert!(output.is_empty());
    }

    #[test]
    fn integrity_off_ignores_the_stored_hash() {
        let mut delta = DeltaScript::new(4);
        delta.set_content_hash(vec![1, 2, 3, 4, 5]);
        assert_eq!(apply(&delta, b"abcd", None), b"abcd");
    }
}
