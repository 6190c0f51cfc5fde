// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use crate::database;
use crate::dtos::product::ProductSearchResponse;
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use tracing::instrument;

// GET /api/product/{code} - Product master lookup
#[instrument(skip(state), fields(code))]
pub async fn search_product(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductSearchResponse>, AppError> {
    let mut conn = database::connect(&state.db).await?;

    let product = sqlx::query_as::<_, Product>(
        "SELECT PRD_ID, CODE, NAME, PRICE
         FROM product_master
         WHERE CODE = ?",
    )
    .bind(&code)
    .fetch_optional(&mut conn)
    .await?;

    // A missing code is a normal outcome: all-null body, not a 404
    Ok(Json(match product {
        Some(product) => ProductSearchResponse::from(product),
        None => ProductSearchResponse::not_found(),
    }))
}
