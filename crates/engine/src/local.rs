//! The three whole-file operations: sign, diff, patch.

use std::io::Write;
use std::path::Path;

use matching::{DeltaScript, apply_delta, generate_delta};
use signature::{FileSignature, generate_signature};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::fs;

/// Summarizes `base` into a signature file at `out`.
///
/// With `integrity` the base file's SHA-256 digest is embedded so a later
/// patch can verify it is rewriting the file the signature described. A
/// `block_len` of zero derives the block length from the base file's size.
pub fn sign(base: &Path, out: &Path, integrity: bool, block_len: u16) -> EngineResult<()> {
    let content_hash = if integrity {
        Some(fs::content_digest(base)?)
    } else {
        None
    };

    let blocks = fs::open_block_reader(base, block_len)?;
    let block_len = blocks.block_len();
    let signature = generate_signature(blocks, content_hash)?;

    write_out(out, &signature.to_bytes())?;
    debug!(base = %base.display(), block_len, integrity, "wrote signature file");
    Ok(())
}

/// Computes the delta between the signed base file and `modified`, writing
/// it to `out`.
///
/// Only the signature file is read on this side; the base file itself is
/// never touched. With `integrity` the delta inherits the signature's
/// content hash for patch-time verification.
pub fn diff(signature_path: &Path, modified: &Path, out: &Path, integrity: bool) -> EngineResult<()> {
    let bytes = non_empty(signature_path, fs::read_all(signature_path)?)?;
    let signature = FileSignature::from_bytes(&bytes)?;
    if signature.block_len() == 0 {
        return Err(EngineError::InvalidArgument(
            "signature declares a zero block length".to_owned(),
        ));
    }

    let window = fs::open_window(modified, signature.block_len())?;
    let delta = generate_delta(&signature, window, integrity)?;

    write_out(out, &delta.to_bytes())?;
    debug!(
        modified = %modified.display(),
        inserts = delta.insert_count(),
        deletes = delta.delete_count(),
        "wrote delta file"
    );
    Ok(())
}

/// Rebuilds the modified file at `out` from `base` and the delta file.
///
/// With `integrity` the base file is digested first and compared against
/// the hash stored in the delta; a mismatch fails before the output file is
/// even created.
pub fn patch(base: &Path, delta_path: &Path, out: &Path, integrity: bool) -> EngineResult<()> {
    let bytes = non_empty(delta_path, fs::read_all(delta_path)?)?;
    let delta = DeltaScript::from_bytes(&bytes)?;
    if delta.block_len() == 0 {
        return Err(EngineError::InvalidArgument(
            "delta declares a zero block length".to_owned(),
        ));
    }

    // Checked before the sink exists so a mismatch leaves no file behind.
    let expected = if integrity {
        let digest = fs::content_digest(base)?;
        if digest.as_slice() != delta.content_hash() {
            return Err(EngineError::IntegrityMismatch);
        }
        Some(digest)
    } else {
        None
    };

    let mut reader = fs::open_block_reader(base, delta.block_len())?;
    let mut sink = fs::create_sink(out)?;
    apply_delta(
        &delta,
        &mut reader,
        &mut sink,
        expected.as_ref().map(|hash| hash.as_slice()),
    )?;

    debug!(base = %base.display(), out = %out.display(), integrity, "wrote patched file");
    Ok(())
}

fn non_empty(path: &Path, bytes: Vec<u8>) -> EngineResult<Vec<u8>> {
    if bytes.is_empty() {
        return Err(EngineError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

fn write_out(path: &Path, bytes: &[u8]) -> EngineResult<()> {
    let mut sink = fs::create_sink(path)?;
    sink.write_all(bytes)?;
    sink.flush()?;
    Ok(())
}
