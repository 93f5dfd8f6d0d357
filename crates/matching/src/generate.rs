//! Delta generation: the rolling-hash matching pass over the modified file.

use std::io::{self, Read};
use std::mem;

use checksums::RollingChecksum;
use checksums::strong;
use signature::FileSignature;
use tracing::{debug, trace};

use crate::delta::DeltaScript;
use crate::window::SlidingWindow;

/// Computes the delta rewriting the signed base file into the bytes behind
/// `window`.
///
/// Every consumed byte lands in a pending-literal buffer; when the rolling
/// weak checksum hits the signature and the strong digest of the current
/// window confirms, the matched window is retracted from the buffer, any
/// remaining prefix becomes an insert, and skipped base blocks become a
/// delete run. The rolling state is never reset on a match: it keeps
/// describing the window as it continues to slide.
///
/// A confirmed match pointing at or before the last matched block would
/// require rewinding the base file, so it is ignored and its bytes stay in
/// the pending buffer. With `copy_content_hash` the delta inherits the
/// signature's content hash for patch-time integrity checking.
///
/// # Panics
///
/// Panics when the window's length disagrees with the signature's block
/// length; such a pairing cannot produce a meaningful match.
pub fn generate_delta<R: Read>(
    signature: &FileSignature,
    mut window: SlidingWindow<R>,
    copy_content_hash: bool,
) -> io::Result<DeltaScript> {
    let block_len = signature.block_len();
    assert_eq!(
        window.block_len(),
        block_len,
        "window and signature block lengths must agree"
    );
    let mut delta = DeltaScript::new(block_len);
    if copy_content_hash {
        delta.set_content_hash(signature.content_hash());
    }

    let mut rolling = RollingChecksum::new(block_len);
    let mut pending: Vec<u8> = Vec::new();
    // Index of the last base block matched so far; -1 before any match.
    let mut last_matched: i64 = -1;

    while window.advance()? {
        rolling.slide(window.rolled_out(), window.latest());
        pending.push(window.latest());

        let weak = rolling.value();
        if !signature.contains_weak(weak) {
            continue;
        }

        let (strong, frame_len) = {
            let frame = window.frame();
            (strong::block_digest(frame), frame.len())
        };
        let Some(index) = signature.find(weak, strong) else {
            continue;
        };
        if i64::from(index) <= last_matched {
            trace!(index, last_matched, "ignoring out-of-order match");
            continue;
        }

        let next = (last_matched + 1) as u32;
        if i64::from(index) > last_matched + 1 {
            delta.delete_run(next, index - next);
        }

        // The tail of the pending buffer is the matched window itself.
        pending.truncate(pending.len().saturating_sub(frame_len));
        if !pending.is_empty() {
            delta.insert_literals(next, mem::take(&mut pending));
        }

        trace!(index, "matched base block");
        last_matched = i64::from(index);
    }

    let block_count = signature.entry_count();
    let next = (last_matched + 1) as u64;
    if next < block_count {
        delta.delete_run(next as u32, (block_count - next) as u32);
    }
    if !pending.is_empty() {
        delta.insert_literals(next as u32, pending);
    }

    debug!(
        inserts = delta.insert_count(),
        deletes = delta.delete_count(),
        block_len,
        "generated delta"
    );
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signature::{BlockReader, generate_signature};
    use std::io::Cursor;

    fn sign(data: &[u8], block_len: u16) -> FileSignature {
        generate_signature(BlockReader::new(Cursor::new(data.to_vec()), block_len), None).unwrap()
    }

    fn window_over(data: &[u8], block_len: u16) -> SlidingWindow<Cursor<Vec<u8>>> {
        SlidingWindow::new(Cursor::new(data.to_vec()), block_len)
    }

    #[test]
    fn identical_input_yields_an_identity_script() {
        let data = b"identical contents, block aligned!!!";
        let signature = sign(data, 4);
        let delta = generate_delta(&signature, window_over(data, 4), false).unwrap();
        assert!(delta.is_identity());
    }

    #[test]
    fn block_length_is_inherited_from_the_signature() {
        let signature = sign(b"12345678", 4);
        let delta = generate_delta(&signature, window_over(b"12345678", 4), false).unwrap();
        assert_eq!(delta.block_len(), signature.block_len());
    }

    #[test]
    fn content_hash_is_copied_only_on_request() {
        let mut signature = sign(b"12345678", 4);
        signature.set_content_hash([0x42_u8; 32]);

        let plain = generate_delta(&signature, window_over(b"12345678", 4), false).unwrap();
        assert!(plain.content_hash().is_empty());

        let hashed = generate_delta(&signature, window_over(b"12345678", 4), true).unwrap();
        assert_eq!(hashed.content_hash(), [0x42_u8; 32]);
    }

    #[test]
    fn reordered_blocks_do_not_rewind_the_base() {
        // "bbbb" matches base block 1 first; the later "aaaa" window points
        // back at block 0 and must be ignored, not emitted as an overlap.
        let signature = sign(b"aaaabbbb", 4);
        let delta = generate_delta(&signature, window_over(b"bbbbaaaa", 4), false).unwrap();

        let deletes: Vec<(u32, u32)> = delta.deletes().collect();
        assert_eq!(deletes, vec![(0, 1)]);
        let inserts: Vec<(u32, Vec<u8>)> =
            delta.inserts().map(|(k, v)| (k, v.to_vec())).collect();
        assert_eq!(inserts, vec![(2, b"aaaa".to_vec())]);
    }

    #[test]
    #[should_panic(expected = "block lengths must agree")]
    fn mismatched_window_length_is_refused() {
        let signature = sign(b"12345678", 4);
        let _ = generate_delta(&signature, window_over(b"12345678", 8), false);
    }
}
