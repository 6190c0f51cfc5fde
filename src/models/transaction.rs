use serde::Serialize;
use sqlx::FromRow;
use chrono::NaiveDateTime;

/// Transaction header row. Serialized with the column names so the
/// history endpoint mirrors the table layout.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TransactionHeader {
    pub trd_id: i64,
    pub datetime: NaiveDateTime,
    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,
    pub total_amt: i32,
}
