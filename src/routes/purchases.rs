use axum::{
    routing::post,
    Router,
};
use crate::handlers::purchase::purchase;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/purchase", post(purchase))
}
