use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::store::{KeyValueStore, StoreError};

/// One JSON file per key under a base directory.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kanaquiz");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", Self::sanitize_key(key)))
    }

    /// File stem for `key`. ASCII letters, digits and `-` pass through; every
    /// other byte, `_` included, becomes `_XX` in hex, so distinct keys never
    /// share a file.
    fn sanitize_key(key: &str) -> String {
        let mut stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                stem.push(byte as char);
            } else {
                stem.push_str(&format!("_{byte:02X}"));
            }
        }
        stem
    }

    /// Remove `.tmp` files left behind by a write that never reached its
    /// rename. Returns true if any were found.
    pub fn clean_interrupted_writes(&self) -> bool {
        let Ok(entries) = fs::read_dir(&self.base_dir) else {
            return false;
        };
        let mut found = false;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|x| x.to_str()) == Some("tmp") {
                found = true;
                let _ = fs::remove_file(&path);
            }
        }
        found
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::new(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("tmp");

        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::new(key, e)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new(key, e)),
        }
    }
}
