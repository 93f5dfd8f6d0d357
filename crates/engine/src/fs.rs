//! File-backed sources and sinks.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::Path;

use checksums::content::Sha256;
use matching::SlidingWindow;
use signature::{BlockReader, derive_block_len};

use crate::error::{EngineError, EngineResult};

/// Opens `path` for reading, mapping open failures to
/// [`EngineError::NotFound`].
pub(crate) fn open_readable(path: &Path) -> EngineResult<File> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => EngineError::NotFound {
            path: path.to_path_buf(),
        },
        _ => EngineError::Io(err),
    })
}

/// Opens a base file as a block source.
///
/// A `block_len` of zero derives the length from the file's size with
/// [`derive_block_len`].
pub fn open_block_reader(path: &Path, block_len: u16) -> EngineResult<BlockReader<BufReader<File>>> {
    let file = open_readable(path)?;
    let block_len = resolve_block_len(&file, block_len)?;
    Ok(BlockReader::new(BufReader::new(file), block_len))
}

/// Opens a modified file as a byte-at-a-time sliding window.
pub fn open_window(path: &Path, block_len: u16) -> EngineResult<SlidingWindow<BufReader<File>>> {
    if block_len == 0 {
        return Err(EngineError::InvalidArgument(
            "window block length must be non-zero".to_owned(),
        ));
    }
    let file = open_readable(path)?;
    Ok(SlidingWindow::new(BufReader::new(file), block_len))
}

/// Creates (or truncates) `path` as a buffered output sink.
pub fn create_sink(path: &Path) -> EngineResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Reads an entire serialized signature or delta file into memory.
pub fn read_all(path: &Path) -> EngineResult<Vec<u8>> {
    let mut file = open_readable(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Computes the whole-file content digest of `path` in one streaming pass.
pub(crate) fn content_digest(path: &Path) -> EngineResult<[u8; 32]> {
    let file = open_readable(path)?;
    Ok(Sha256::from_reader(BufReader::new(file))?)
}

fn resolve_block_len(file: &File, block_len: u16) -> EngineResult<u16> {
    if block_len > 0 {
        return Ok(block_len);
    }
    Ok(derive_block_len(file.metadata()?.len()))
}
