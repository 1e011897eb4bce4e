//! File sink implementation

use crate::core::Sink;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for newly created log files, before the process umask.
pub const FILE_MODE: u32 = 0o666;

/// Append-only log file identified by the path it was opened from.
///
/// Writes go straight to the file descriptor without buffering, so a handle
/// returned by rotation holds every line written before the swap.
/// There is no internal lock: callers writing outside a `Logger` must
/// serialize their writes or lines may interleave.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` for appending, creating it with [`FILE_MODE`] if missing.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        Ok(Self { path, file })
    }

    /// Open a fresh handle on the same path. The existing handle is left
    /// untouched.
    pub fn reopen(&self) -> io::Result<Self> {
        Self::open(self.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path)
}

impl Sink for FileSink {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        (&self.file).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (&self.file).flush()
    }

    fn name(&self) -> &str {
        "file"
    }

    fn as_file(&self) -> Option<&FileSink> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        sink.write(b"appended\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");
        assert_eq!(sink.path(), path.as_path());
        assert!(sink.as_file().is_some());
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(FileSink::open(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_created_file_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.log");
        let _sink = FileSink::open(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o111, 0);
        assert_eq!(mode & !FILE_MODE, 0);
    }

    #[test]
    fn test_reopen_follows_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let rotated = dir.path().join("app.log.1");

        let sink = FileSink::open(&path).unwrap();
        sink.write(b"before\n").unwrap();
        fs::rename(&path, &rotated).unwrap();

        let fresh = sink.reopen().unwrap();
        fresh.write(b"after\n").unwrap();
        sink.write(b"late\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
        assert_eq!(fs::read_to_string(&rotated).unwrap(), "before\nlate\n");
    }

    #[test]
    fn test_serialized_writers_keep_lines_whole() {
        use parking_lot::Mutex;
        use std::sync::Arc;
        use std::thread;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shared.log");
        let sink = Arc::new(Mutex::new(FileSink::open(&path).unwrap()));

        let handles: Vec<_> = (0..4)
            .map(|id| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for n in 0..50 {
                        let line = format!("writer-{}-{}\n", id, n);
                        sink.lock().write(line.as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 200);
        assert!(contents.lines().all(|line| line.starts_with("writer-")));
    }
}
