// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Detached Ed25519 verification of wallet login signatures.

use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

use super::message::canonical_message_bytes;

/// Verify that `signature_b58` is a valid detached Ed25519 signature by
/// `pubkey_b58` over the canonical login message for that pubkey.
///
/// Total: malformed base58, wrong lengths, and off-curve keys all return
/// `false` rather than an error, so the caller cannot distinguish a bad
/// signature from garbage input.
pub fn verify_wallet_signature(signature_b58: &str, pubkey_b58: &str) -> bool {
    let Ok(signature_bytes) = bs58::decode(signature_b58).into_vec() else {
        return false;
    };
    let Ok(pubkey_bytes) = bs58::decode(pubkey_b58).into_vec() else {
        return false;
    };

    let Ok(signature_arr) = <[u8; SIGNATURE_LENGTH]>::try_from(signature_bytes.as_slice()) else {
        return false;
    };
    let Ok(pubkey_arr) = <[u8; PUBLIC_KEY_LENGTH]>::try_from(pubkey_bytes.as_slice()) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&pubkey_arr) else {
        return false;
    };

    let signature = Signature::from_bytes(&signature_arr);
    let message = canonical_message_bytes(pubkey_b58);
    verifying_key.verify(&message, &signature).is_ok()
}
