use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::{Category, ProductSummary};
use crate::shared::types::PaginationQuery;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List categories ordered by id, with the total count
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<Category>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count categories: {:?}", e);
                AppError::Database(e)
            })?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM category
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((categories, total))
    }

    /// Get category by id; products are left unresolved
    pub async fn get_by_id(&self, id: i32) -> Result<Category> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Get category by id with its products resolved
    pub async fn get_with_products(&self, id: i32) -> Result<Category> {
        let category = self.get_by_id(id).await?;
        self.load_products(category).await
    }

    /// Resolve the products owned by `category` and attach them
    pub async fn load_products(&self, mut category: Category) -> Result<Category> {
        let products = sqlx::query_as::<_, ProductSummary>(
            r#"
            SELECT id, name, category_id
            FROM product
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to load products for category {}: {:?}",
                category.id,
                e
            );
            AppError::Database(e)
        })?;

        tracing::debug!(
            "Resolved {} products for category {}",
            products.len(),
            category.id
        );

        category.products = Some(products);
        Ok(category)
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<Category> {
        let draft = Category::new(dto.name);
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO category (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&draft.name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_db)?;

        tracing::info!("Category created: id={}, name={:?}", category.id, category.name);

        Ok(category)
    }

    pub async fn update(&self, id: i32, dto: UpdateCategoryDto) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE category
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(&dto.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_db)?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        tracing::info!("Category updated: id={}, name={:?}", category.id, category.name);

        Ok(category)
    }

    /// Delete a category; its products are detached by the foreign key rule
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::from_db(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }
}
