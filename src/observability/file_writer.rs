//! Rotating file writer with size-based rotation and numbered backups.
//!
//! When the file grows past the size limit it is shifted to `<name>.1`, the
//! previous `<name>.1` to `<name>.2`, and so on; the oldest backup beyond the
//! retention count is deleted. Disk usage is therefore bounded by roughly
//! `(backups + 1) * limit`.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::error::{Result, ShelfError};

/// Maximum file size before rotation (10 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe, line-oriented rotating file writer.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Writer with the default 10 MiB limit and three backups.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the
    /// limit, and flushes.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Io`] on I/O errors while rotating, opening or
    /// writing, or if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|e| {
            ShelfError::Io(io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
        })?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    /// Shifts `<name>.N` to `<name>.N+1`, dropping the oldest, then moves the
    /// live file to `<name>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = backup_path(&self.file_path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, n + 1))?;
            }
        }

        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

/// `<path>.<n>`, keeping the original extension in place.
fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotation_keeps_bounded_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        // Every write after the first finds the file over the limit.
        let writer = FileWriter::with_limits(path.clone(), 4, 3);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-5\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 1)).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 3)).unwrap(), "line-2\n");
        assert!(!backup_path(&path, 4).exists());

        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 4);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("missing").join("trace.json"));
        let err = writer.write_line("{}").unwrap_err();
        assert!(matches!(err, ShelfError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn backup_name_appends_number() {
        let path = Path::new("/data/zshelf-otlp.json");
        assert_eq!(backup_path(path, 2), PathBuf::from("/data/zshelf-otlp.json.2"));
    }
}
