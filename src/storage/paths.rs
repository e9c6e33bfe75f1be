// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Storage path layout under the data directory.
//!
//! ```text
//! <DATA_DIR>/
//!   sessions/
//!     {session_id}.json
//! ```

use std::path::{Path, PathBuf};

/// Path layout for the session store.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one JSON file per session.
    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("sessions")
    }

    /// File backing a single session record.
    pub fn session(&self, session_id: &str) -> PathBuf {
        self.sessions_dir().join(format!("{session_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_paths_nest_under_root() {
        let paths = StoragePaths::new("/data");
        assert_eq!(paths.sessions_dir(), PathBuf::from("/data/sessions"));
        assert_eq!(
            paths.session("abc123"),
            PathBuf::from("/data/sessions/abc123.json")
        );
    }
}
