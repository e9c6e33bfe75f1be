// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

//! Merkle fingerprint endpoint.

use axum::Json;
use tracing::debug;

use crate::{
    error::ApiError,
    fingerprint::{compute_root, Record},
    models::MerkleRootResponse,
};

/// Compute the Merkle fingerprint of a record.
///
/// The request body is a flat JSON object whose values are scalars or
/// lists of scalars; fields are hashed in the order they appear in the
/// body. A non-stringifiable field fails the whole computation rather
/// than producing a partial fingerprint.
#[utoipa::path(
    post,
    path = "/v1/generate-merkle-root",
    request_body = Object,
    tag = "Fingerprint",
    responses(
        (status = 200, description = "Computed fingerprint", body = MerkleRootResponse),
        (status = 422, description = "Record contains a non-stringifiable field"),
    )
)]
pub async fn generate_merkle_root(
    Json(record): Json<Record>,
) -> Result<Json<MerkleRootResponse>, ApiError> {
    let merkle_root = compute_root(&record).map_err(|error| {
        debug!(%error, "fingerprint rejected");
        ApiError::unprocessable(error.to_string())
    })?;

    Ok(Json(MerkleRootResponse { merkle_root }))
}
