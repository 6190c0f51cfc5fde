// src/dtos/transaction.rs
use serde::{Deserialize, Serialize};

use crate::models::transaction::TransactionHeader;

#[derive(Debug, Deserialize)]
pub struct TransactionListQuery {
    /// Not upper-bounded; this endpoint is a debug view.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionHeader>,
}
