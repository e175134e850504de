use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::{Category, ProductSummary};
use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category Name
    #[validate(
        length(max = 255, message = "Name must not exceed 255 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Toys")]
    pub name: String,
}

/// Request DTO for updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    /// Category Name
    #[validate(
        length(max = 255, message = "Name must not exceed 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

/// Related collections that can be resolved alongside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryInclude {
    Products,
}

/// Query params for fetching a single category
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetCategoryQuery {
    /// Set to `products` to resolve the category's products
    pub include: Option<CategoryInclude>,
}

impl GetCategoryQuery {
    pub fn include_products(&self) -> bool {
        self.include == Some(CategoryInclude::Products)
    }
}

/// Product reference as exposed under a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
}

impl From<ProductSummary> for ProductSummaryDto {
    fn from(p: ProductSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category_id: p.category_id,
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    /// Present only when the products were resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductSummaryDto>>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            products: c
                .products
                .map(|products| products.into_iter().map(Into::into).collect()),
        }
    }
}
