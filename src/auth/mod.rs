// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # Wallet-Signature Authentication
//!
//! Decides whether a presented `(signature, pubkey)` pair represents a
//! wallet that signed the canonical deResearcher login message.
//!
//! ## Auth Flow
//!
//! 1. Frontend asks the wallet to sign the canonical login message for its
//!    public key (see [`message`]).
//! 2. Frontend posts the base58 signature and pubkey to `/v1/auth/login`.
//! 3. Server verifies the detached Ed25519 signature, persists or refreshes
//!    the session record, and issues an HTTP-only session cookie.
//! 4. Subsequent `/v1/auth/check` calls look up the session by the exact
//!    `(signature, pubkey)` pair and re-verify before trusting it.
//!
//! ## Security
//!
//! - Verification failure is reported identically to "no session" so the
//!   API never leaks whether a pubkey is known.
//! - Malformed base58 input is a verification failure, never a server error.

pub mod message;
pub mod verify;

pub use message::{canonical_message_bytes, canonical_message_text, minimize_pubkey};
pub use verify::verify_wallet_signature;
