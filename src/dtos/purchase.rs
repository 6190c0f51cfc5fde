// src/dtos/purchase.rs
use serde::{Deserialize, Serialize};

/// One line item. Prices are snapshotted from the request as sent;
/// they are not re-read from the product master.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PurchaseItem {
    pub prd_id: i64,
    pub prd_code: String,
    pub prd_name: String,
    pub prd_price: i32,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    /// Cashier code
    #[serde(rename = "EMP_CD", default = "default_emp_cd")]
    pub emp_cd: String,
    /// Store code
    #[serde(rename = "STORE_CD", default = "default_store_cd")]
    pub store_cd: String,
    /// Register (POS terminal) id
    #[serde(rename = "POS_NO", default = "default_pos_no")]
    pub pos_no: String,
    pub items: Vec<PurchaseItem>,
}

fn default_emp_cd() -> String {
    "9999999999".to_string()
}

fn default_store_cd() -> String {
    "30".to_string()
}

fn default_pos_no() -> String {
    "90".to_string()
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub total_amount: i32,
    pub transaction_id: Option<i64>,
}
