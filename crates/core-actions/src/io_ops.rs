//! File IO adapters between a path on disk and the editor's byte streams.
//!
//! Synchronous and minimal: open reads the whole file through `Editor::open`,
//! write truncates (or creates) the target and streams `Editor::save` into it.
//! Failures surface as `EditorError::Io` carrying the OS error, so callers can
//! tell "not found" from "permission denied" by `ErrorKind`.

use core_state::{Editor, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Load `path` into the editor, replacing its content. Returns units read.
pub fn open_file(editor: &mut Editor, path: &Path) -> Result<usize> {
    let file = File::open(path).inspect_err(|e| {
        tracing::error!(target: "io", file = %path.display(), ?e, "file_open_error");
    })?;
    let count = editor.open(BufReader::new(file)).inspect_err(|e| {
        tracing::error!(target: "io", file = %path.display(), ?e, "file_read_error");
    })?;
    tracing::debug!(target: "io", file = %path.display(), size_bytes = count, "file_read_ok");
    Ok(count)
}

/// Write the editor content to `path`, overwriting anything already there.
pub fn write_file(editor: &Editor, path: &Path) -> Result<usize> {
    let file = File::create(path).inspect_err(|e| {
        tracing::error!(target: "io", file = %path.display(), ?e, "file_create_error");
    })?;
    let count = editor.save(BufWriter::new(file)).inspect_err(|e| {
        tracing::error!(target: "io", file = %path.display(), ?e, "file_write_error");
    })?;
    tracing::debug!(target: "io", file = %path.display(), size_bytes = count, "file_write_ok");
    Ok(count)
}
