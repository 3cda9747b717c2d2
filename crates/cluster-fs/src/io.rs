//! Plain-text reads and atomic, locked writes

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes, so a
/// resolver reading the same file concurrently sees either the old value or
/// the new one. Every call gets its own uniquely named temp file, so
/// concurrent writers to the same path never share one; the last rename wins.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    // Ensure parent directory exists
    let parent = match native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    // Temp file lives in the same directory so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(&parent).map_err(|e| Error::io(&parent, e))?;

    temp_file.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file.as_file().unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .persist(&native_path)
        .map_err(|e| Error::io(&native_path, e.error))?;

    tracing::trace!(path = %path, bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    tracing::trace!(path = %path, "reading file");
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// List the regular files directly inside `dir`.
///
/// A directory that does not exist has no files. Entries whose names are not
/// valid UTF-8 are skipped, as are subdirectories and anything else that is
/// not a regular file.
pub fn list_files(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = match fs::read_dir(&native_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir, "directory does not exist; no files");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(&native_dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let file_path = dir.join(&name);
        if file_path.is_file() {
            files.push(file_path);
        }
    }
    files.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    Ok(files)
}
