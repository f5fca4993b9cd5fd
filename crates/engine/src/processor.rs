use crate::config::Config;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the lines of a single file.
///
/// The file is streamed in `config.chunk_size` chunks. The result is the
/// number of `\n` bytes plus one: an empty file counts as one line, and a
/// file ending in `\n` counts the empty tail after it as well.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn count_lines(path: &Path, config: &Config) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::with_capacity(config.chunk_size, file);

    count_reader(&mut reader).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Count lines from any buffered source using the same convention as
/// [`count_lines`]. Works on raw bytes, so invalid encodings never fail.
///
/// # Errors
///
/// Propagates the first I/O error other than `Interrupted`.
pub fn count_reader<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut newlines = 0;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        newlines += bytecount::count(buf, b'\n');

        let len = buf.len();
        reader.consume(len);
    }

    Ok(newlines + 1)
}
