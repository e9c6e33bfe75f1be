// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Authentication Models
// =============================================================================

/// Request to log a wallet in.
///
/// The signature is the wallet's detached Ed25519 signature over the
/// canonical login message for this pubkey, freshly produced by the
/// frontend before calling login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Wallet identifier: base58-encoded Ed25519 public key.
    pub wallet: String,
    /// Base58-encoded detached signature over the canonical login message.
    pub signature: String,
}

/// Successful login response. The session cookie is set alongside.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Session identifier (also the value of the session cookie).
    pub session_id: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

/// Request to check whether a `(signature, pubkey)` pair is authenticated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckAuthRequest {
    /// Base58-encoded public key.
    pub wallet_pubkey: String,
    /// Base58-encoded detached signature (mirrored from the client-side
    /// signature cookie).
    pub wallet_signature: String,
}

/// Authentication decision.
///
/// The denied form is identical for "no session", "expired", and
/// "signature does not verify"; the API does not reveal which.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckAuthResponse {
    /// Whether the pair represents a currently authenticated wallet.
    pub is_authenticated: bool,
    /// Stored signature, present only when authenticated.
    pub wallet_signature: Option<String>,
    /// Stored pubkey, present only when authenticated.
    pub wallet_pubkey: Option<String>,
    /// Session expiry, present only when authenticated.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckAuthResponse {
    /// The uniform "not authenticated" response.
    pub fn denied() -> Self {
        Self {
            is_authenticated: false,
            wallet_signature: None,
            wallet_pubkey: None,
            expires_at: None,
        }
    }

    /// Response for a verified, unexpired session.
    pub fn authenticated(signature: String, pubkey: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            is_authenticated: true,
            wallet_signature: Some(signature),
            wallet_pubkey: Some(pubkey),
            expires_at: Some(expires_at),
        }
    }
}

/// Request to end a session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    /// Base58-encoded public key.
    pub wallet_pubkey: String,
    /// Base58-encoded detached signature.
    pub wallet_signature: String,
}

/// Logout acknowledgement. Logout always succeeds from the client's point
/// of view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    /// Human-readable outcome message.
    pub message: String,
}

// =============================================================================
// Fingerprint Models
// =============================================================================

/// Computed Merkle fingerprint of a record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MerkleRootResponse {
    /// 32-byte root as 64 hex characters, no `0x` prefix.
    pub merkle_root: String,
}
