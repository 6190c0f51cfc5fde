// src/handlers/purchase.rs
use axum::{extract::State, Json};
use chrono::Utc;
use sqlx::Connection;
use tracing::{error, instrument};

use crate::config::DbConfig;
use crate::database;
use crate::dtos::purchase::{PurchaseRequest, PurchaseResponse};
use crate::error::AppError;
use crate::state::AppState;

// POST /api/purchase - Record one purchase atomically
#[instrument(skip(state, req))]
pub async fn purchase(
    State(state): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let (transaction_id, total_amount) = record_purchase(&state.db, &req).await.map_err(|e| {
        error!(?e, "Failed to record purchase");
        AppError::Purchase(e)
    })?;

    Ok(Json(PurchaseResponse {
        success: true,
        total_amount,
        transaction_id: Some(transaction_id),
    }))
}

/// Header insert, detail inserts, total update, all in one transaction.
/// Dropping `tx` on any error path rolls the whole sequence back, so a
/// failed purchase leaves no trace.
async fn record_purchase(db: &DbConfig, req: &PurchaseRequest) -> Result<(i64, i32), sqlx::Error> {
    let mut conn = database::connect(db).await?;
    let mut tx = conn.begin().await?;

    // 1. Header row with a placeholder total of 0
    let result = sqlx::query(
        "INSERT INTO transaction (DATETIME, EMP_CD, STORE_CD, POS_NO, TOTAL_AMT)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(Utc::now().naive_utc())
    .bind(&req.emp_cd)
    .bind(&req.store_cd)
    .bind(&req.pos_no)
    .bind(0_i32)
    .execute(&mut *tx)
    .await?;

    let transaction_id = result.last_insert_id() as i64;

    // 2. Detail rows in request order, DTL_ID starting at 1.
    //    One line item equals one unit; no quantity column exists.
    let mut total_amount: i32 = 0;
    for (idx, item) in req.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO transaction_detail
             (TRD_ID, DTL_ID, PRD_ID, PRD_CODE, PRD_NAME, PRD_PRICE)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(transaction_id)
        .bind(idx as i32 + 1)
        .bind(item.prd_id)
        .bind(&item.prd_code)
        .bind(&item.prd_name)
        .bind(item.prd_price)
        .execute(&mut *tx)
        .await?;

        total_amount += item.prd_price;
    }

    // 3. Finalize the header total
    sqlx::query("UPDATE transaction SET TOTAL_AMT = ? WHERE TRD_ID = ?")
        .bind(total_amount)
        .bind(transaction_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok((transaction_id, total_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::purchase::PurchaseItem;

    // These run against a real MySQL with db/schema.sql applied:
    //   cargo test -- --ignored

    fn test_db() -> DbConfig {
        dotenvy::dotenv().ok();
        crate::config::Config::from_env().db
    }

    fn request(items: Vec<PurchaseItem>) -> PurchaseRequest {
        PurchaseRequest {
            emp_cd: "9999999999".to_string(),
            store_cd: "30".to_string(),
            pos_no: "90".to_string(),
            items,
        }
    }

    fn item(prd_id: i64, price: i32) -> PurchaseItem {
        PurchaseItem {
            prd_id,
            prd_code: format!("490108508192{}", prd_id),
            prd_name: format!("test item {}", prd_id),
            prd_price: price,
        }
    }

    async fn header_count(conn: &mut sqlx::MySqlConnection) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM transaction")
            .fetch_one(conn)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn purchase_writes_header_and_ordered_details() {
        let db = test_db();

        let (trd_id, total) = record_purchase(&db, &request(vec![item(1, 100), item(2, 250)]))
            .await
            .unwrap();
        assert_eq!(total, 350);

        let mut conn = database::connect(&db).await.unwrap();

        let header_total: i32 =
            sqlx::query_scalar("SELECT TOTAL_AMT FROM transaction WHERE TRD_ID = ?")
                .bind(trd_id)
                .fetch_one(&mut conn)
                .await
                .unwrap();
        assert_eq!(header_total, 350);

        let details = sqlx::query_as::<_, (i32, i32)>(
            "SELECT DTL_ID, PRD_PRICE FROM transaction_detail
             WHERE TRD_ID = ? ORDER BY DTL_ID",
        )
        .bind(trd_id)
        .fetch_all(&mut conn)
        .await
        .unwrap();
        assert_eq!(details, vec![(1, 100), (2, 250)]);
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn repeated_purchases_get_distinct_transaction_ids() {
        let db = test_db();
        let req = request(vec![item(1, 100)]);

        let (first, _) = record_purchase(&db, &req).await.unwrap();
        let (second, _) = record_purchase(&db, &req).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn empty_item_list_records_a_zero_total_header() {
        let db = test_db();

        let (trd_id, total) = record_purchase(&db, &request(vec![])).await.unwrap();
        assert_eq!(total, 0);

        let mut conn = database::connect(&db).await.unwrap();
        let detail_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM transaction_detail WHERE TRD_ID = ?")
                .bind(trd_id)
                .fetch_one(&mut conn)
                .await
                .unwrap();
        assert_eq!(detail_count, 0);
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn failed_detail_insert_rolls_back_the_header() {
        let db = test_db();
        let mut conn = database::connect(&db).await.unwrap();
        let before = header_count(&mut conn).await;

        // PRD_NAME is VARCHAR(50); an oversized name fails the second
        // detail insert after the header and first detail succeeded.
        let mut oversized = item(2, 250);
        oversized.prd_name = "x".repeat(80);

        let result = record_purchase(&db, &request(vec![item(1, 100), oversized])).await;
        assert!(result.is_err());

        assert_eq!(header_count(&mut conn).await, before);
    }
}
