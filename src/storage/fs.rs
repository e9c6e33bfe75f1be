// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! JSON file store backing session records.
//!
//! One JSON document per file, written atomically via a temp file and
//! rename. The store is opened explicitly at startup ([`JsonStore::open`])
//! and injected into the repositories; nothing here runs at import time.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::StoragePaths;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("session id generation failed")]
    Rng,

    #[error("self test failed: {0}")]
    SelfTest(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed JSON document store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    paths: StoragePaths,
}

impl JsonStore {
    /// Open the store, creating the directory layout. Idempotent; called
    /// once during process startup.
    pub fn open(paths: StoragePaths) -> StoreResult<Self> {
        fs::create_dir_all(paths.sessions_dir())?;
        Ok(Self { paths })
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StoreResult<T> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StoreResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    /// Delete a file.
    pub fn delete(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List file stems in a directory with the given extension.
    pub fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> StoreResult<Vec<String>> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        Ok(ids)
    }

    /// Write-read-delete self test, used by the health endpoint to verify
    /// the data directory is writable.
    pub fn self_test(&self) -> StoreResult<()> {
        let test_file = self.paths.root().join(".self_test");
        let test_data = b"self_test_data";

        fs::write(&test_file, test_data)?;
        let read_back = fs::read(&test_file)?;
        fs::remove_file(&test_file)?;

        if read_back != test_data {
            return Err(StoreError::SelfTest("data mismatch".to_string()));
        }

        Ok(())
    }
}
