use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::ValidatedJson;
use crate::features::product_images::dtos::{
    CreateProductImageDto, ProductImageResponseDto, UpdateProductImageDto,
};
use crate::features::product_images::services::ProductImageService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List product images
#[utoipa::path(
    get,
    path = "/api/product-images",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of product images", body = ApiResponse<Vec<ProductImageResponseDto>>),
    ),
    tag = "product-images"
)]
pub async fn list_product_images(
    State(service): State<Arc<ProductImageService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ProductImageResponseDto>>>> {
    let (images, total) = service.list(&pagination).await?;
    let data: Vec<ProductImageResponseDto> = images.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::paginated(data, total)))
}

/// Register a product image by file name
#[utoipa::path(
    post,
    path = "/api/product-images",
    request_body = CreateProductImageDto,
    responses(
        (status = 201, description = "Product image created", body = ApiResponse<ProductImageResponseDto>),
        (status = 400, description = "Validation error"),
    ),
    tag = "product-images"
)]
pub async fn create_product_image(
    State(service): State<Arc<ProductImageService>>,
    ValidatedJson(dto): ValidatedJson<CreateProductImageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductImageResponseDto>>)> {
    let image = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(image.into()), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/product-images/{id}",
    params(
        ("id" = i32, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Product image found", body = ApiResponse<ProductImageResponseDto>),
        (status = 404, description = "Product image not found")
    ),
    tag = "product-images"
)]
pub async fn get_product_image(
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductImageResponseDto>>> {
    let image = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(image.into()), None, None)))
}

#[utoipa::path(
    put,
    path = "/api/product-images/{id}",
    params(
        ("id" = i32, Path, description = "Product image ID")
    ),
    request_body = UpdateProductImageDto,
    responses(
        (status = 200, description = "Product image updated", body = ApiResponse<ProductImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product image not found")
    ),
    tag = "product-images"
)]
pub async fn update_product_image(
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateProductImageDto>,
) -> Result<Json<ApiResponse<ProductImageResponseDto>>> {
    let image = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(image.into()), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/product-images/{id}",
    params(
        ("id" = i32, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Product image deleted"),
        (status = 404, description = "Product image not found")
    ),
    tag = "product-images"
)]
pub async fn delete_product_image(
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product image deleted successfully".to_string()),
        None,
    )))
}
