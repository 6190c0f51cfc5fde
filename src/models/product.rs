use sqlx::FromRow;

/// One row of the product master. Maintained externally; this system
/// only ever reads it.
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Product {
    pub prd_id: i64,
    pub code: String,
    pub name: String,
    pub price: i32,
}
