use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::metadata::{dtos as metadata_dtos, handlers as metadata_handlers};
use crate::features::product_images::{
    dtos as product_images_dtos, handlers as product_images_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::list_category_products,
        // Product images
        product_images_handlers::list_product_images,
        product_images_handlers::create_product_image,
        product_images_handlers::get_product_image,
        product_images_handlers::update_product_image,
        product_images_handlers::delete_product_image,
        // Display metadata
        metadata_handlers::list_metadata,
        metadata_handlers::get_entity_metadata,
        metadata_handlers::get_field_label,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::ProductSummaryDto,
            categories_dtos::CategoryInclude,
            // Product images
            product_images_dtos::CreateProductImageDto,
            product_images_dtos::UpdateProductImageDto,
            product_images_dtos::ProductImageResponseDto,
            // Metadata
            metadata_dtos::EntityDisplayDto,
            metadata_dtos::FieldDisplayDto,
            ApiResponse<metadata_dtos::EntityDisplayDto>,
            ApiResponse<metadata_dtos::FieldDisplayDto>,
        )
    ),
    tags(
        (name = "categories", description = "Store categories and their products"),
        (name = "product-images", description = "Product image file references"),
        (name = "metadata", description = "Field display labels for UI generation"),
    ),
    info(
        title = "BabyStore API",
        version = "0.1.0",
        description = "Catalog API for BabyStore",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
