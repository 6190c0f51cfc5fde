// src/database.rs
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::Connection;

use crate::config::DbConfig;

/// Builds MySQL connect options from the configuration struct.
pub fn connect_options(cfg: &DbConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .database(&cfg.database)
        .charset("utf8mb4")
        .ssl_mode(ssl_mode(cfg.require_ssl));

    if !cfg.password.is_empty() {
        options = options.password(&cfg.password);
    }

    options
}

/// Managed MySQL offerings refuse plaintext; local instances often run
/// without TLS at all, so Preferred keeps both working.
fn ssl_mode(require_ssl: bool) -> MySqlSslMode {
    if require_ssl {
        MySqlSslMode::Required
    } else {
        MySqlSslMode::Preferred
    }
}

/// Opens one dedicated connection. Callers scope writes with
/// `conn.begin()`: the transaction commits explicitly and rolls back
/// when dropped on an error path, and the connection is released when
/// it goes out of scope.
pub async fn connect(cfg: &DbConfig) -> Result<MySqlConnection, sqlx::Error> {
    MySqlConnection::connect_with(&connect_options(cfg)).await
}
