//! Database connectivity check.
//!
//! Connects with the same configuration the server uses, counts the
//! product master, and prints a few sample rows. Run it before first
//! start to confirm the `.env` settings actually reach the database.
//!
//! ```bash
//! cargo run --bin db_check
//! ```

use dotenvy::dotenv;
use sqlx::Row;

#[path = "../config.rs"]
mod config;
#[path = "../database.rs"]
mod database;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = config::Config::from_env();
    let db = &config.db;

    println!("=== Database connectivity check ===");
    println!("Host:     {}", db.host);
    println!("Port:     {}", db.port);
    println!("User:     {}", db.user);
    println!("Database: {}", db.database);
    if db.require_ssl {
        println!("TLS:      required");
    }
    println!();

    if let Err(e) = run(db).await {
        eprintln!("Error: {}", e);
        eprintln!();
        eprintln!("Checklist:");
        eprintln!("1. Is the MySQL service running?");
        eprintln!("2. Do the .env values match your MySQL connection settings?");
        eprintln!("3. Has db/schema.sql been applied to the database?");
        std::process::exit(1);
    }

    println!();
    println!("All checks passed.");
}

async fn run(db: &config::DbConfig) -> Result<(), sqlx::Error> {
    let mut conn = database::connect(db).await?;
    println!("Connected.");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_master")
        .fetch_one(&mut conn)
        .await?;
    println!("product_master rows: {}", count);

    let samples = sqlx::query("SELECT CODE, NAME, PRICE FROM product_master LIMIT 3")
        .fetch_all(&mut conn)
        .await?;
    if !samples.is_empty() {
        println!("Sample products:");
        for row in samples {
            let code: String = row.try_get("CODE")?;
            let name: String = row.try_get("NAME")?;
            let price: i32 = row.try_get("PRICE")?;
            println!("  - {}: {} ({})", code, name, price);
        }
    }

    Ok(())
}
