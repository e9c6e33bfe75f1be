// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 deResearcher

use std::sync::Arc;

use crate::config::Config;
use crate::storage::SessionRepository;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(sessions: SessionRepository, config: Config) -> Self {
        Self {
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
