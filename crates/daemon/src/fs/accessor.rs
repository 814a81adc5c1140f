//! Direct filesystem operations.
//!
//! Each operation is an unguarded pass-through to the OS: no path
//! sanitization, no caching, no size limits. Errors are mapped into the
//! [`FsError`] taxonomy so the HTTP layer can translate them into the
//! uniform failure envelope.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// Errors that can occur during filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// The path does not exist.
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// The OS denied access to the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path is not a regular file.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// The path is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The file content is not valid UTF-8.
    #[error("file is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FsError {
    fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                FsError::PermissionDenied(path.to_path_buf())
            }
            _ => FsError::Io(err),
        }
    }
}

/// Raw metadata for one directory entry, as enumerated by the OS.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Full path: the listed directory joined with the name.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Size in bytes (0 for directories).
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub modified: SystemTime,
}

/// Raw metadata for a single stat'd path.
#[derive(Debug, Clone)]
pub struct RawStat {
    /// File name component, or the path itself for a root.
    pub name: String,
    /// The queried path.
    pub path: PathBuf,
    /// Whether the path is a directory.
    pub is_directory: bool,
    /// Whether the path is a regular file. False for directories and for
    /// special files such as FIFOs and sockets.
    pub is_file: bool,
    /// Raw stat size in bytes, reported even for directories.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub modified: SystemTime,
    /// Creation timestamp. Falls back to the modified time on filesystems
    /// without a birth time.
    pub created: SystemTime,
}

/// List the entries of a directory.
///
/// Entries whose individual stat fails are skipped rather than aborting
/// the listing, so an entry deleted mid-enumeration does not fail the
/// whole call. Hidden (dot) entries are included. No ordering is
/// guaranteed; callers sort via [`super::listing::format_entries`].
pub fn list(path: &Path) -> Result<Vec<RawEntry>, FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

    let mut entries = Vec::new();
    for entry_result in read_dir {
        let entry = match entry_result {
            Ok(e) => e,
            Err(_) => continue, // Skip entries we can't read
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue, // Skip entries we can't stat
        };

        let is_directory = metadata.is_dir();
        entries.push(RawEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            is_directory,
            size_bytes: if is_directory { 0 } else { metadata.len() },
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    Ok(entries)
}

/// Stat a single path.
pub fn stat(path: &Path) -> Result<RawStat, FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;

    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
    let created = metadata.created().unwrap_or(modified);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    Ok(RawStat {
        name,
        path: path.to_path_buf(),
        is_directory: metadata.is_dir(),
        is_file: metadata.is_file(),
        size_bytes: metadata.len(),
        modified,
        created,
    })
}

/// Read the entire file at `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    if !metadata.is_file() {
        return Err(FsError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| FsError::from_io(e, path))?;
    String::from_utf8(bytes).map_err(|_| FsError::NotUtf8(path.to_path_buf()))
}

/// Create or truncate the file at `path` and write `content` to it.
///
/// Fails if the parent directory does not exist; parents are not created
/// implicitly (use [`make_directory`] first).
pub fn write_text(path: &Path, content: &str) -> Result<(), FsError> {
    fs::write(path, content).map_err(|e| FsError::from_io(e, path))
}

/// Create a directory, including missing parents.
///
/// Idempotent: succeeds silently if the directory already exists.
pub fn make_directory(path: &Path) -> Result<(), FsError> {
    fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
}

/// Delete a file, or a directory and all its contents recursively.
pub fn delete(path: &Path) -> Result<(), FsError> {
    // symlink_metadata so a dangling symlink is still deletable as a file
    let metadata = fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;

    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| FsError::from_io(e, path))
    } else {
        fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}
