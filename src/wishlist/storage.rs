//! Key-value storage backends for persisted state.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What: Durable key-value storage used by write-through stores.
///
/// Details:
/// - Values are opaque strings; callers own the serialization format.
/// - `read` distinguishes "absent" (`Ok(None)`) from I/O failure.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    /// - Returns an error when the backing medium cannot be read.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// - Returns an error when the backing medium cannot be written.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// What: Storage keeping one JSON file per key inside a directory.
///
/// Details:
/// - Key `k` lives at `<dir>/<k>.json`. Bytes outside `[A-Za-z0-9_-]` are
///   percent-encoded (`.` becomes `%2E`), so distinct keys map to distinct files and
///   no key can escape the directory.
/// - The directory is created lazily on first write.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = encode_key(key);
        name.push_str(".json");
        self.dir.join(name)
    }
}

fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// What: In-process storage, lost when dropped.
///
/// Details:
/// - Used for ephemeral sessions and tests.
/// - [`MemoryStorage::set_fail_writes`] simulates a full or read-only medium.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut s = Self::default();
        s.entries.insert(key.to_string(), value.to_string());
        s
    }

    /// Make subsequent writes fail with `io::ErrorKind::StorageFull` (or succeed again).
    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::StorageFull,
                "storage quota exceeded",
            ));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
