//! Durable key-value persistence for the session record.
//!
//! DESIGN
//! ======
//! One file per key under a caller-chosen profile directory. The session
//! manager writes two keys (`user`, `token`) as two separate operations, so
//! a crash can leave one without the other; restoration therefore requires
//! both keys before adopting a session. Only the session manager is
//! expected to write these keys — a second store opened on the same
//! directory races without coordination.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted key holding the JSON-serialized user record.
pub const KEY_USER: &str = "user";
/// Persisted key holding the raw access token.
pub const KEY_TOKEN: &str = "token";

/// File-backed key-value store scoped to one client profile directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        debug_assert!(!key.contains(['/', '\\']), "store keys are simple names");
        self.dir.join(key)
    }

    /// Read a key. Any read failure is treated as "absent".
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    /// Write a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path(key), value)
    }

    /// Remove a key. A missing key is a no-op; other failures are logged
    /// and swallowed so sign-out stays infallible.
    pub fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path(key)) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(key, error = %e, "failed to remove persisted key");
            }
        }
    }
}
