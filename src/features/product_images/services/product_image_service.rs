use sqlx::PgPool;
use tracing::{error, info};

use crate::core::error::{AppError, Result};
use crate::features::product_images::dtos::{CreateProductImageDto, UpdateProductImageDto};
use crate::features::product_images::models::ProductImage;
use crate::shared::types::PaginationQuery;

/// Service for product image records
pub struct ProductImageService {
    pool: PgPool,
}

impl ProductImageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<ProductImage>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_image")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to count product images: {:?}", e);
                AppError::Database(e)
            })?;

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, file_name
            FROM product_image
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list product images: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((images, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ProductImage> {
        sqlx::query_as::<_, ProductImage>("SELECT id, file_name FROM product_image WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to get product image {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Product image {} not found", id)))
    }

    pub async fn create(&self, dto: CreateProductImageDto) -> Result<ProductImage> {
        let draft = ProductImage::new(dto.file_name);
        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            INSERT INTO product_image (file_name)
            VALUES ($1)
            RETURNING id, file_name
            "#,
        )
        .bind(&draft.file_name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_db)?;

        info!(
            "Product image created: id={}, file_name={}",
            image.id, image.file_name
        );

        Ok(image)
    }

    pub async fn update(&self, id: i32, dto: UpdateProductImageDto) -> Result<ProductImage> {
        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            UPDATE product_image
            SET file_name = $1
            WHERE id = $2
            RETURNING id, file_name
            "#,
        )
        .bind(&dto.file_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_db)?
        .ok_or_else(|| AppError::NotFound(format!("Product image {} not found", id)))?;

        info!(
            "Product image updated: id={}, file_name={}",
            image.id, image.file_name
        );

        Ok(image)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM product_image WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to delete product image {}: {:?}", id, e);
                AppError::from_db(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Product image {} not found",
                id
            )));
        }

        info!("Product image deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_crud_lifecycle(pool: PgPool) {
        let service = ProductImageService::new(pool);

        let image = service
            .create(CreateProductImageDto {
                file_name: "cot.jpg".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.get_by_id(image.id).await.unwrap().file_name, "cot.jpg");

        let updated = service
            .update(
                image.id,
                UpdateProductImageDto {
                    file_name: "pram.png".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated, image);
        assert_eq!(updated.file_name, "pram.png");

        service.delete(image.id).await.unwrap();
        assert!(matches!(
            service.get_by_id(image.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(image.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
