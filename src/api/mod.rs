// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        CheckAuthRequest, CheckAuthResponse, LoginRequest, LoginResponse, LogoutRequest,
        LogoutResponse, MerkleRootResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod fingerprint;
pub mod health;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/check", post(auth::check))
        .route("/auth/logout", post(auth::logout))
        .route(
            "/generate-merkle-root",
            post(fingerprint::generate_merkle_root),
        )
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::check,
        auth::logout,
        fingerprint::generate_merkle_root,
        health::health
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            CheckAuthRequest,
            CheckAuthResponse,
            LogoutRequest,
            LogoutResponse,
            MerkleRootResponse
        )
    ),
    tags(
        (name = "Auth", description = "Wallet-signature authentication and session lifecycle"),
        (name = "Fingerprint", description = "Merkle content fingerprinting"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::{JsonStore, SessionRepository, StoragePaths};

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonStore::open(StoragePaths::new(dir.path())).expect("open store");
        let state = AppState::new(SessionRepository::new(store, 600), Config::default());

        let app = router(state);
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
