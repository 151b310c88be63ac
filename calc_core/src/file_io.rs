//! # File I/O Module
//!
//! Atomic writes and the writer lock for the JSON calculation store.
//!
//! The lock is an fs2 exclusive lock on a sidecar file next to the data file
//! (`saved_calcs.json.lock`). The sidecar holds a single line, `<pid> <time>`,
//! naming the current holder so a refused writer can report who is in the way.
//! It stays on disk after release; only the OS lock counts, and the OS drops
//! it when the holding process exits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{write_atomic, FileLock};
//! use std::path::Path;
//!
//! let path = Path::new("saved_calcs.json");
//! let lock = FileLock::acquire(path)?;
//! write_atomic(path, b"{}")?;
//! drop(lock);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};

/// Exclusive writer lock on a data file, released on drop.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Take the writer lock for `path` without waiting.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - This process now holds the lock
    /// * `Err(CalcError::FileLocked)` - Another holder has it; nothing was touched
    pub fn acquire(path: &Path) -> CalcResult<Self> {
        let lock_path = sidecar_path(path, "lock");
        create_parent_dir(&lock_path)?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| CalcError::file_error("open lock", lock_path.display().to_string(), e.to_string()))?;

        if file.try_lock_exclusive().is_err() {
            let (holder, since) = read_holder(&mut file);
            return Err(CalcError::file_locked(path.display().to_string(), holder, since));
        }

        let note = format!("{} {}", std::process::id(), Utc::now().to_rfc3339());
        file.set_len(0)
            .and_then(|_| file.seek(SeekFrom::Start(0)))
            .and_then(|_| file.write_all(note.as_bytes()))
            .map_err(|e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), "store lock acquired");
        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(path = %self.lock_path.display(), error = %e, "failed to release store lock");
        }
    }
}

/// Holder and start time from a locked sidecar, as far as they can be read.
fn read_holder(file: &mut File) -> (String, String) {
    let mut note = String::new();
    let read = file.seek(SeekFrom::Start(0)).and_then(|_| file.read_to_string(&mut note));
    match read.ok().and_then(|_| note.trim().split_once(' ')) {
        Some((pid, since)) => (format!("pid {}", pid), since.to_string()),
        None => ("another process".to_string(), "unknown".to_string()),
    }
}

/// `saved_calcs.json` → `saved_calcs.json.<suffix>`
fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

fn create_parent_dir(path: &Path) -> CalcResult<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent)
            .map_err(|e| CalcError::file_error("create directory", parent.display().to_string(), e.to_string())),
        None => Ok(()),
    }
}

/// Read a whole file into a string.
pub fn read_to_string(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

/// Replace a file's contents atomically.
///
/// Writes `<name>.tmp`, syncs it, then renames it over the target, so readers
/// see either the old file or the new one. Missing parent directories are
/// created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    create_parent_dir(path)?;
    let tmp_path = sidecar_path(path, "tmp");

    let written = File::create(&tmp_path).and_then(|mut tmp| {
        tmp.write_all(contents)?;
        tmp.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename", path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sidecar_paths() {
        let data_path = Path::new("/path/to/saved_calcs.json");
        assert_eq!(sidecar_path(data_path, "lock"), Path::new("/path/to/saved_calcs.json.lock"));
        assert_eq!(sidecar_path(data_path, "tmp"), Path::new("/path/to/saved_calcs.json.tmp"));
        assert_eq!(sidecar_path(Path::new("calcs"), "lock"), Path::new("calcs.lock"));
    }

    #[test]
    fn test_atomic_write_creates_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("calcs.json");

        write_atomic(&path, b"{\"Circle\": []}").unwrap();
        write_atomic(&path, b"{\"Square\": []}").unwrap();

        assert!(!sidecar_path(&path, "tmp").exists());
        assert_eq!(read_to_string(&path).unwrap(), "{\"Square\": []}");
    }

    #[test]
    fn test_second_lock_refused_and_names_holder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("calcs.json");

        let _held = FileLock::acquire(&path).unwrap();
        match FileLock::acquire(&path) {
            Err(CalcError::FileLocked { locked_by, locked_at, .. }) => {
                assert_eq!(locked_by, format!("pid {}", std::process::id()));
                assert_ne!(locked_at, "unknown");
            }
            other => panic!("expected FileLocked, got {:?}", other),
        }
    }

    #[test]
    fn test_lock_released_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join("calcs.json");

        let lock = FileLock::acquire(&path).unwrap();
        drop(lock);
        assert!(FileLock::acquire(&path).is_ok());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_to_string(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
