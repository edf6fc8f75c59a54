//! Streaming file copies
//!
//! Archives can be large, so copies go through a fixed-size buffer instead of
//! reading whole files into memory.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use crate::progress::CopyProgress;

/// Size of the chunks copied at a time
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copy everything from `reader` into `writer`, returning the byte count
pub fn copy_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    progress: &CopyProgress,
) -> io::Result<u64> {
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut copied = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer[..read])?;
        copied += read as u64;
        progress.inc(read as u64);
    }

    writer.flush()?;
    Ok(copied)
}

/// Open `path` for a copy and report its size
pub fn open_source(path: &Path) -> io::Result<(File, u64)> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    Ok((file, len))
}

/// File name of `path` for progress labels
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
