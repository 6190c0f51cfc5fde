// src/handlers/transaction.rs
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{error, instrument};

use crate::database;
use crate::dtos::transaction::{TransactionListQuery, TransactionListResponse};
use crate::error::AppError;
use crate::models::transaction::TransactionHeader;
use crate::state::AppState;

// GET /api/transactions - Recent headers, newest first (debug view)
#[instrument(skip(state))]
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListQuery>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let mut conn = database::connect(&state.db).await?;

    match sqlx::query_as::<_, TransactionHeader>(
        "SELECT TRD_ID, DATETIME, EMP_CD, STORE_CD, POS_NO, TOTAL_AMT
         FROM transaction
         ORDER BY DATETIME DESC
         LIMIT ?",
    )
    .bind(params.limit)
    .fetch_all(&mut conn)
    .await
    {
        Ok(transactions) => Ok(Json(TransactionListResponse { transactions })),
        Err(e) => {
            error!(?e, "Failed to fetch transactions");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> State<AppState> {
        dotenvy::dotenv().ok();
        State(AppState::new(crate::config::Config::from_env().db))
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn limit_zero_returns_an_empty_list() {
        let Json(response) = get_transactions(test_state(), Query(TransactionListQuery { limit: 0 }))
            .await
            .unwrap();
        assert!(response.transactions.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a provisioned MySQL database"]
    async fn headers_come_back_newest_first() {
        let Json(response) = get_transactions(test_state(), Query(TransactionListQuery { limit: 10 }))
            .await
            .unwrap();

        assert!(response.transactions.len() <= 10);
        for pair in response.transactions.windows(2) {
            assert!(pair[0].datetime >= pair[1].datetime);
        }
    }
}
