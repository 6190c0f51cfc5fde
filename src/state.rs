// src/state.rs
use crate::config::DbConfig;

/// Shared application state. Holds the database connection parameters;
/// each handler opens its own connection per request (no pooling).
#[derive(Clone)]
pub struct AppState {
    pub db: DbConfig,
}

impl AppState {
    pub fn new(db: DbConfig) -> Self {
        Self { db }
    }
}
