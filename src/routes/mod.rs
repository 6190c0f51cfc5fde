pub mod products;
pub mod purchases;
pub mod transactions;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(purchases::routes())
        .merge(transactions::routes())
}
