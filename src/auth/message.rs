// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Canonical login message construction.
//!
//! The message a wallet signs is the compact JSON text
//! `{"auth":"Login to deresearcher","pubkey":"<minimized>"}` where the
//! minimized pubkey is its first four and last four characters joined by
//! `...`.
//!
//! ## Encoding Compatibility
//!
//! The signed byte buffer is NOT the UTF-8 encoding of that text. Each
//! UTF-16 code unit is truncated to its low byte, matching the encoding
//! used when the already-issued wallet signatures were produced. Changing
//! this to UTF-8 would invalidate every existing signature. For the ASCII
//! text produced from base58 pubkeys the two encodings coincide, but the
//! truncation is load-bearing for any non-ASCII input.

use serde_json::json;

/// Fixed statement embedded in every login message.
pub const LOGIN_STATEMENT: &str = "Login to deresearcher";

/// Shorten a base58 pubkey to `head...tail` with four characters on each
/// side. Short inputs saturate: the head and tail may overlap, mirroring
/// how the frontend slices the string.
pub fn minimize_pubkey(pubkey: &str) -> String {
    let chars: Vec<char> = pubkey.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// The canonical login message as JSON text for the given base58 pubkey.
///
/// Field order (`auth`, then `pubkey`) and compact separators are part of
/// the signed contract.
pub fn canonical_message_text(pubkey: &str) -> String {
    json!({
        "auth": LOGIN_STATEMENT,
        "pubkey": minimize_pubkey(pubkey),
    })
    .to_string()
}

/// The exact byte buffer a wallet signs for the given pubkey: one byte per
/// UTF-16 code unit of the message text, truncated to the low byte.
pub fn canonical_message_bytes(pubkey: &str) -> Vec<u8> {
    canonical_message_text(pubkey)
        .encode_utf16()
        .map(|unit| unit as u8)
        .collect()
}
