use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::metadata::dtos::{EntityDisplayDto, FieldDisplayDto};
use crate::features::metadata::registry;
use crate::shared::types::ApiResponse;

/// List display metadata for every entity
#[utoipa::path(
    get,
    path = "/api/metadata",
    responses(
        (status = 200, description = "Display metadata for all entities", body = ApiResponse<Vec<EntityDisplayDto>>),
    ),
    tag = "metadata"
)]
pub async fn list_metadata() -> Json<ApiResponse<Vec<EntityDisplayDto>>> {
    let entities: Vec<EntityDisplayDto> = registry::all_entities()
        .iter()
        .copied()
        .map(Into::into)
        .collect();
    let total = entities.len() as i64;
    Json(ApiResponse::paginated(entities, total))
}

/// Get display metadata for one entity
#[utoipa::path(
    get,
    path = "/api/metadata/{entity}",
    params(
        ("entity" = String, Path, description = "Entity name, e.g. `category` or `product_image`")
    ),
    responses(
        (status = 200, description = "Display metadata found", body = ApiResponse<EntityDisplayDto>),
        (status = 404, description = "Unknown entity")
    ),
    tag = "metadata"
)]
pub async fn get_entity_metadata(
    Path(entity): Path<String>,
) -> Result<Json<ApiResponse<EntityDisplayDto>>> {
    let metadata = registry::find_entity(&entity)
        .ok_or_else(|| AppError::NotFound(format!("Entity '{}' not found", entity)))?;
    Ok(Json(ApiResponse::success(
        Some(metadata.into()),
        None,
        None,
    )))
}

/// Label to render for one field of an entity
///
/// Fields without a configured label render as their own name.
#[utoipa::path(
    get,
    path = "/api/metadata/{entity}/fields/{field}",
    params(
        ("entity" = String, Path, description = "Entity name"),
        ("field" = String, Path, description = "Serialized field name, e.g. `name`")
    ),
    responses(
        (status = 200, description = "Field label", body = ApiResponse<FieldDisplayDto>),
        (status = 404, description = "Unknown entity")
    ),
    tag = "metadata"
)]
pub async fn get_field_label(
    Path((entity, field)): Path<(String, String)>,
) -> Result<Json<ApiResponse<FieldDisplayDto>>> {
    let metadata = registry::find_entity(&entity)
        .ok_or_else(|| AppError::NotFound(format!("Entity '{}' not found", entity)))?;
    let dto = FieldDisplayDto {
        display_label: metadata.display_name(&field).to_string(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
