// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! # Merkle Content Fingerprinting
//!
//! Produces the deterministic content hash committed on-chain whenever a
//! research paper, profile, or review is created or updated. The root is
//! a pure function of the record's values in insertion order; callers
//! must pass fields in a stable, agreed order.
//!
//! ## Leaf Sequence
//!
//! For every field value, in order:
//!
//! - A list contributes TWO leaves: the hex root of a sub-tree built over
//!   its elements' string forms, followed by the hex SHA-256 of the
//!   elements joined with `,`. This double contribution reproduces the
//!   exact leaf sequence behind already-committed roots; verifiers depend
//!   on it, so it must not be "corrected" here.
//! - A scalar contributes one leaf: the hex SHA-256 of its string form.
//!
//! The fingerprint is the hex root of the outer tree over those leaves,
//! with any `0x` prefix stripped.

pub mod merkle;

use serde_json::Value;
use thiserror::Error;

use self::merkle::{merkle_root, sha256_hex};

/// An ordered record of named fields. `serde_json`'s `preserve_order`
/// feature keeps JSON body order intact through deserialization.
pub type Record = serde_json::Map<String, Value>;

/// Fingerprint computation failure.
///
/// A partial fingerprint would silently corrupt the integrity guarantee,
/// so any non-stringifiable field fails the whole computation.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// Field holds a nested object or nested list, which has no canonical
    /// string form.
    #[error("field '{field}' cannot be fingerprinted: values must be scalars or lists of scalars")]
    Unhashable { field: String },
}

/// Canonical string form of a scalar value. Lists and objects have none.
fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn strip_hex_prefix(hash: String) -> String {
    match hash.strip_prefix("0x") {
        Some(stripped) => stripped.to_string(),
        None => hash,
    }
}

/// Compute the Merkle fingerprint of `record`.
///
/// Deterministic for identical input (same keys, values, and order) and
/// order-sensitive by design. No I/O, no shared state; safe under
/// unlimited concurrency.
pub fn compute_root(record: &Record) -> Result<String, FingerprintError> {
    let mut leaves: Vec<String> = Vec::with_capacity(record.len());

    for (field, value) in record {
        match value {
            Value::Array(items) => {
                let mut elements = Vec::with_capacity(items.len());
                for item in items {
                    let element = string_form(item).ok_or_else(|| FingerprintError::Unhashable {
                        field: field.clone(),
                    })?;
                    elements.push(element);
                }

                // Sub-tree root over the per-element strings, then the
                // whole-list string hash (see module docs on why both).
                leaves.push(strip_hex_prefix(hex::encode(merkle_root(&elements))));
                leaves.push(sha256_hex(&elements.join(",")));
            }
            scalar => {
                let form = string_form(scalar).ok_or_else(|| FingerprintError::Unhashable {
                    field: field.clone(),
                })?;
                leaves.push(sha256_hex(&form));
            }
        }
    }

    Ok(strip_hex_prefix(hex::encode(merkle_root(&leaves))))
}
