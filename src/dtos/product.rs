// src/dtos/product.rs
use serde::Serialize;

use crate::models::product::Product;

/// Lookup response. A miss is a normal outcome: every field comes back
/// null together, never a 404.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProductSearchResponse {
    pub prd_id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<i32>,
}

impl ProductSearchResponse {
    pub fn not_found() -> Self {
        Self::default()
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductSearchResponse {
    fn from(product: Product) -> Self {
        Self {
            prd_id: Some(product.prd_id),
            code: Some(product.code),
            name: Some(product.name),
            price: Some(product.price),
        }
    }
}
