use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::search_product;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product/{code}", get(search_product))
}
