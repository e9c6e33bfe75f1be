// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # Expired-Session Sweeper
//!
//! Background task standing in for a document database's TTL index: every
//! sweep interval it deletes session records whose `expires_at` has
//! passed. Request handlers never sweep; they only compare `expires_at`
//! at read time, so a session is reported unauthenticated the moment it
//! expires regardless of when the sweeper next runs.
//!
//! ## Shutdown
//!
//! Uses `tokio_util::sync::CancellationToken` for graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::storage::SessionRepository;

/// Background sweeper deleting expired session records.
pub struct SessionSweeper {
    sessions: Arc<SessionRepository>,
    interval: Duration,
}

impl SessionSweeper {
    /// Create a sweeper over the session repository.
    pub fn new(sessions: Arc<SessionRepository>, interval: Duration) -> Self {
        Self { sessions, interval }
    }

    /// Run the sweep loop until the cancellation token is triggered.
    ///
    /// Should be spawned as a background task:
    /// ```rust,ignore
    /// tokio::spawn(sweeper.run(shutdown.clone()));
    /// ```
    pub async fn run(self, shutdown: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            "session sweeper starting"
        );

        loop {
            if shutdown.is_cancelled() {
                info!("session sweeper shutting down");
                return;
            }

            self.sweep_step();

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {},
                _ = shutdown.cancelled() => {
                    info!("session sweeper shutting down");
                    return;
                }
            }
        }
    }

    fn sweep_step(&self) {
        match self.sessions.purge_expired(Utc::now()) {
            Ok(0) => debug!("session sweep: nothing to purge"),
            Ok(purged) => info!(purged, "session sweep: purged expired sessions"),
            Err(error) => warn!(%error, "session sweep failed; will retry next interval"),
        }
    }
}
