use sqlx::FromRow;

/// Read model for a product owned by a category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
}
