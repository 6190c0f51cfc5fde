// src/config.rs
use std::net::IpAddr;

/// Database connection parameters, read once at startup.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Require TLS on the database connection (managed MySQL offerings
    /// such as Azure refuse plaintext connections).
    pub require_ssl: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub db: DbConfig,
}

impl Config {
    /// Builds the configuration from the process environment.
    /// Missing variables fall back to local-development defaults.
    pub fn from_env() -> Self {
        let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
        let port = parse_port(std::env::var("PORT").ok().as_deref(), 8000);

        let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let require_ssl = resolve_ssl(&db_host, std::env::var("DB_SSL").ok().as_deref());

        Config {
            host,
            port,
            db: DbConfig {
                port: parse_port(std::env::var("DB_PORT").ok().as_deref(), 3306),
                user: std::env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
                password: std::env::var("DB_PASSWORD").unwrap_or_default(),
                database: std::env::var("DB_NAME").unwrap_or_else(|_| "pos_db".to_string()),
                host: db_host,
                require_ssl,
            },
        }
    }
}

fn parse_port(value: Option<&str>, default: u16) -> u16 {
    value.and_then(|p| p.parse::<u16>().ok()).unwrap_or(default)
}

/// DB_SSL wins when set; otherwise infer from the host, since Azure
/// MySQL requires secure transport.
fn resolve_ssl(db_host: &str, flag: Option<&str>) -> bool {
    match flag {
        Some(v) => v == "1" || v.eq_ignore_ascii_case("true"),
        None => db_host.contains("azure.com"),
    }
}
