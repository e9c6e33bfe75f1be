// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! deResearcher - Wallet Auth & Fingerprint Service
//!
//! This crate provides the two load-bearing cores of the deResearcher
//! platform as a standalone HTTP service: wallet-signature authentication
//! with session lifecycle management, and the deterministic Merkle
//! fingerprint committed on-chain for content integrity.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Canonical login message and Ed25519 signature verification
//! - `fingerprint` - SHA-256 Merkle root over ordered record fields
//! - `storage` - File-backed session records

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod models;
pub mod state;
pub mod storage;
pub mod sweeper;
