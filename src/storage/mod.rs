// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # Session Storage
//!
//! File-backed persistence for session records. The store is opened once
//! at startup and handed to the repository; request handlers never touch
//! paths or files directly.

pub mod fs;
pub mod paths;
pub mod sessions;

pub use fs::{JsonStore, StoreError, StoreResult};
pub use paths::StoragePaths;
pub use sessions::{SessionRepository, StoredSession, SESSION_ID_BYTES};
