use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::product_images::handlers::{
    create_product_image, delete_product_image, get_product_image, list_product_images,
    update_product_image,
};
use crate::features::product_images::services::ProductImageService;

/// Create routes for the product images feature
pub fn routes(service: Arc<ProductImageService>) -> Router {
    Router::new()
        .route(
            "/api/product-images",
            get(list_product_images).post(create_product_image),
        )
        .route(
            "/api/product-images/{id}",
            get(get_product_image)
                .put(update_product_image)
                .delete(delete_product_image),
        )
        .with_state(service)
}
