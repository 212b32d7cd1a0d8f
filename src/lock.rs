//! Bounded-wait mutual exclusion on the relay device.
//!
//! The lock scopes the whole read-modify-write sequence of one invocation,
//! not single register accesses, so two invocations can never interleave
//! their latch updates. It only protects invocations of this binary;
//! another process talking to the device without taking the lock file is
//! outside the contract.

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use thiserror::Error;

const RETRY_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum LockError {
    #[error("Failed to open lock file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    Flock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Device is busy, gave up on '{path}' after {timeout:?}")]
    Timeout { path: PathBuf, timeout: Duration },
}

/// Exclusive `flock` on a lock file, released when the guard drops.
pub struct DeviceLock {
    file: File,
}

impl DeviceLock {
    /// Blocks up to `timeout` trying to take the lock exclusively,
    /// polling every 50 ms. A lock held by another invocation is never
    /// bypassed; after `timeout` the attempt fails with `Timeout`.
    pub fn acquire(path: &Path, timeout: Duration) -> Result<DeviceLock, LockError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .map_err(|source| LockError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let deadline = Instant::now() + timeout;
        loop {
            let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
            if result == 0 {
                debug!("Acquired lock '{}'", path.display());
                return Ok(DeviceLock { file });
            }

            let source = io::Error::last_os_error();
            if source.raw_os_error() != Some(libc::EWOULDBLOCK) {
                return Err(LockError::Flock {
                    path: path.to_path_buf(),
                    source,
                });
            }

            if Instant::now() >= deadline {
                return Err(LockError::Timeout {
                    path: path.to_path_buf(),
                    timeout,
                });
            }

            thread::sleep(RETRY_INTERVAL);
        }
    }
}

impl Drop for DeviceLock {
    fn drop(&mut self) {
        unsafe { libc::flock(self.file.as_raw_fd(), libc::LOCK_UN) };
    }
}
