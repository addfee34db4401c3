//! Exclusive advisory lock on a cache directory

use dirsweep_core::{Error, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An exclusive lock held on a lock file inside a directory.
///
/// The lock is released when the value is dropped. The lock file itself is
/// left in place.
#[derive(Debug)]
pub struct DirectoryLock {
    lock_file: File,
    lock_path: PathBuf,
    pid: u32,
}

impl DirectoryLock {
    /// Try to acquire the lock without blocking
    pub fn try_acquire(lock_path: &Path) -> Result<Self> {
        let mut lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)
            .map_err(|e| Error::file_system(lock_path, "open lock file", e))?;

        match lock_file.try_lock_exclusive() {
            Ok(()) => {
                let pid = std::process::id();
                let record = |file: &mut File| -> io::Result<()> {
                    file.set_len(0)?;
                    writeln!(file, "{pid}")?;
                    file.sync_all()
                };
                record(&mut lock_file)
                    .map_err(|e| Error::file_system(lock_path, "write lock owner", e))?;

                tracing::trace!(path = %lock_path.display(), pid, "Acquired directory lock");

                Ok(Self {
                    lock_file,
                    lock_path: lock_path.to_path_buf(),
                    pid,
                })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(Error::lock_unavailable(
                    lock_path,
                    "already locked by another process",
                ))
            }
            Err(e) => Err(Error::file_system(lock_path, "lock", e)),
        }
    }

    /// Get the PID that owns this lock
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Path of the lock file
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for DirectoryLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.lock_file);
    }
}
