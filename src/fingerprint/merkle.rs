// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Binary Merkle tree over an ordered list of string leaves.
//!
//! SHA-256 is both the leaf hash and the node hash. An unpaired node at
//! the end of a level is promoted unchanged to the next level, matching
//! the construction used when existing roots were committed on-chain.

use sha2::{Digest, Sha256};

/// Root of an empty leaf list. Stands in for "no content"; no SHA-256
/// output ever collides with it.
pub const EMPTY_ROOT: [u8; 32] = [0u8; 32];

/// SHA-256 of `data`, as raw bytes.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 of a string's bytes, hex-encoded.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(sha256(data.as_bytes()))
}

fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Compute the Merkle root of `leaves`, in order.
///
/// Each leaf string is hashed with SHA-256, then levels are folded
/// pairwise until a single root remains. An empty list yields
/// [`EMPTY_ROOT`]. Order is significant: reordering leaves changes the
/// root.
pub fn merkle_root(leaves: &[String]) -> [u8; 32] {
    if leaves.is_empty() {
        return EMPTY_ROOT;
    }

    let mut current: Vec<[u8; 32]> = leaves.iter().map(|leaf| sha256(leaf.as_bytes())).collect();

    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        for pair in current.chunks(2) {
            if pair.len() == 2 {
                next.push(hash_pair(&pair[0], &pair[1]));
            } else {
                // Odd node: promoted unchanged
                next.push(pair[0]);
            }
        }
        current = next;
    }

    current[0]
}
