//! JSON File Storage
//!
//! A single JSON document on disk, guarded by an async mutex so that every
//! read-modify-write of the file is serialized.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{StoreError, StoreResult};

pub struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hold this while reading and writing the file
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Read the document. A missing or empty file yields `T::default()`.
    pub async fn read<T: DeserializeOwned + Default>(&self) -> StoreResult<T> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if data.is_empty() {
            return Ok(T::default());
        }

        serde_json::from_slice(&data).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the document with two-space indented JSON
    pub async fn write<T: Serialize>(&self, value: &T) -> StoreResult<()> {
        let data = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
