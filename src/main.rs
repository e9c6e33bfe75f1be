// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deresearcher_server::{
    api::router,
    config::Config,
    state::AppState,
    storage::{JsonStore, SessionRepository, StoragePaths},
    sweeper::SessionSweeper,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json_logs = env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Configuration and storage are set up exactly once here; everything
    // downstream receives injected handles.
    let config = Config::from_env();
    let store = JsonStore::open(StoragePaths::new(&config.data_dir))
        .expect("failed to open session storage");
    let sessions = Arc::new(SessionRepository::new(store, config.session_ttl_secs));

    let shutdown = CancellationToken::new();
    let sweeper = SessionSweeper::new(
        sessions.clone(),
        Duration::from_secs(config.sweep_interval_secs),
    );
    tokio::spawn(sweeper.run(shutdown.clone()));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("failed to parse bind address");

    let state = AppState {
        sessions,
        config: Arc::new(config),
    };
    let app = router(state);

    info!(%addr, "deResearcher auth service listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .expect("server failed");
}

/// Resolve on Ctrl-C / SIGTERM and cancel the background tasks.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
    token.cancel();
}
