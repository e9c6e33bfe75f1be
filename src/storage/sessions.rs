// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Session repository.
//!
//! One JSON file per session under `sessions/`, keyed by a random session
//! id. At most one session exists per wallet: a repeat login refreshes
//! the existing record instead of creating a second one.
//!
//! Expired sessions stay on disk until the background sweeper purges
//! them; readers only ever do a point-in-time `expires_at` comparison.
//! Concurrent logins for one wallet are last-write-wins on `expires_at`,
//! a known race whose worst case is a shorter-than-intended window.

use chrono::{DateTime, Duration, Utc};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};

use super::{JsonStore, StoreError, StoreResult};

/// Length of the random session identifier, in bytes (hex-encoded on disk).
pub const SESSION_ID_BYTES: usize = 32;

/// Session record persisted per authenticated wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    /// Random session identifier, 32 bytes hex. Also the cookie value.
    pub session_id: String,
    /// Wallet identifier: the base58 pubkey that logged in.
    pub wallet: String,
    /// Base58 detached signature presented at the most recent login.
    pub wallet_signature: String,
    /// Authentication flag carried in the session payload.
    pub is_authenticated: bool,
    /// When the session was first created. Immutable across refreshes.
    pub created_at: DateTime<Utc>,
    /// When the session stops being valid. Refreshed on repeat login.
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    /// Whether the session is still live at `now`.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Repository for session records.
pub struct SessionRepository {
    store: JsonStore,
    ttl: Duration,
}

impl SessionRepository {
    /// Create a repository over an opened store with the given session
    /// lifetime in seconds.
    pub fn new(store: JsonStore, ttl_secs: i64) -> Self {
        Self {
            store,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Log a wallet in: refresh the existing session for this wallet or
    /// create a new one. Returns the persisted record.
    pub fn login(&self, wallet: &str, signature: &str) -> StoreResult<StoredSession> {
        let now = Utc::now();

        if let Some(mut session) = self.find_by_wallet(wallet)? {
            session.expires_at = now + self.ttl;
            session.wallet_signature = signature.to_string();
            session.is_authenticated = true;
            self.insert(&session)?;
            return Ok(session);
        }

        let session = StoredSession {
            session_id: new_session_id()?,
            wallet: wallet.to_string(),
            wallet_signature: signature.to_string(),
            is_authenticated: true,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.insert(&session)?;
        Ok(session)
    }

    /// Persist a session record, overwriting any previous file for the
    /// same session id.
    pub fn insert(&self, session: &StoredSession) -> StoreResult<()> {
        self.store
            .write_json(self.store.paths().session(&session.session_id), session)
    }

    /// Find the session for a wallet identifier, if any.
    pub fn find_by_wallet(&self, wallet: &str) -> StoreResult<Option<StoredSession>> {
        self.scan(|session| session.wallet == wallet)
    }

    /// Find the session matching an exact `(signature, pubkey)` pair.
    pub fn find_by_credentials(
        &self,
        signature: &str,
        pubkey: &str,
    ) -> StoreResult<Option<StoredSession>> {
        self.scan(|session| session.wallet_signature == signature && session.wallet == pubkey)
    }

    /// Delete the session matching an exact `(signature, pubkey)` pair.
    /// Returns whether a session was removed.
    pub fn delete_by_credentials(&self, signature: &str, pubkey: &str) -> StoreResult<bool> {
        match self.find_by_credentials(signature, pubkey)? {
            Some(session) => {
                self.store
                    .delete(self.store.paths().session(&session.session_id))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete every session with `expires_at <= now`. Returns the number
    /// of sessions removed. Called from the background sweeper only.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> StoreResult<usize> {
        let mut purged = 0;
        for id in self.session_ids()? {
            let path = self.store.paths().session(&id);
            let Ok(session) = self.store.read_json::<StoredSession>(&path) else {
                // Unreadable record: drop it rather than leak it forever.
                self.store.delete(&path)?;
                purged += 1;
                continue;
            };
            if !session.is_live(now) {
                self.store.delete(&path)?;
                purged += 1;
            }
        }
        Ok(purged)
    }

    /// Storage self test, exposed for the health endpoint.
    pub fn self_test(&self) -> StoreResult<()> {
        self.store.self_test()
    }

    fn session_ids(&self) -> StoreResult<Vec<String>> {
        self.store
            .list_files(self.store.paths().sessions_dir(), "json")
    }

    fn scan(
        &self,
        matches: impl Fn(&StoredSession) -> bool,
    ) -> StoreResult<Option<StoredSession>> {
        for id in self.session_ids()? {
            if let Ok(session) = self
                .store
                .read_json::<StoredSession>(self.store.paths().session(&id))
            {
                if matches(&session) {
                    return Ok(Some(session));
                }
            }
        }
        Ok(None)
    }
}

/// Fresh random session identifier: 32 cryptographically random bytes,
/// hex-encoded. Collision probability is negligible.
fn new_session_id() -> StoreResult<String> {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| StoreError::Rng)?;
    Ok(hex::encode(bytes))
}
