use axum::{
    routing::get,
    Router,
};
use crate::handlers::transaction::get_transactions;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(get_transactions))
}
