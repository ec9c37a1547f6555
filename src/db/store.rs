// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value JSON store.
//!
//! Each key maps to one JSON document. The file-backed store writes
//! `<data_dir>/<key>.json` through a temporary file and a rename, so a
//! crash mid-write leaves the previous document intact.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistent store for tracker state.
#[derive(Debug)]
pub struct Store {
    backend: Backend,
}

#[derive(Debug)]
enum Backend {
    Dir(PathBuf),
    Memory(HashMap<String, String>),
}

impl Store {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::info!(path = %dir.display(), "Opened data store");
        Ok(Self {
            backend: Backend::Dir(dir),
        })
    }

    /// Create an in-memory store for testing. Nothing touches disk.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(HashMap::new()),
        }
    }

    /// Read and decode the document under `key`, if present.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match &self.backend {
            Backend::Dir(dir) => match fs::read_to_string(document_path(dir, key)) {
                Ok(raw) => raw,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(e.into()),
            },
            Backend::Memory(map) => match map.get(key) {
                Some(raw) => raw.clone(),
                None => return Ok(None),
            },
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Encode `value` and store it under `key`, replacing any previous document.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        match &mut self.backend {
            Backend::Dir(dir) => {
                let path = document_path(dir, key);
                let tmp = path.with_extension("json.tmp");
                fs::write(&tmp, raw)?;
                fs::rename(&tmp, &path)?;
            }
            Backend::Memory(map) => {
                map.insert(key.to_string(), raw);
            }
        }
        tracing::debug!(key, "Stored document");
        Ok(())
    }

    /// Delete the document under `key`. Missing keys are not an error.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match &mut self.backend {
            Backend::Dir(dir) => match fs::remove_file(document_path(dir, key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
            Backend::Memory(map) => {
                map.remove(key);
                Ok(())
            }
        }
    }
}

fn document_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Stored document '{key}' is unreadable: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
}
