use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::product_images::models::ProductImage;
use crate::shared::validation::{validate_not_blank, FILE_NAME_REGEX};

/// Request DTO for registering a product image
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductImageDto {
    /// File
    #[validate(
        length(max = 255, message = "File name must not exceed 255 characters"),
        custom(function = "validate_not_blank"),
        regex(path = *FILE_NAME_REGEX, message = "File name must not contain path separators")
    )]
    #[schema(example = "cot.jpg")]
    pub file_name: String,
}

/// Request DTO for changing a product image's file name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductImageDto {
    /// File
    #[validate(
        length(max = 255, message = "File name must not exceed 255 characters"),
        custom(function = "validate_not_blank"),
        regex(path = *FILE_NAME_REGEX, message = "File name must not contain path separators")
    )]
    pub file_name: String,
}

/// Response DTO for product image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponseDto {
    pub id: i32,
    pub file_name: String,
}

impl From<ProductImage> for ProductImageResponseDto {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id,
            file_name: image.file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{faker::filesystem::en::FileName, Fake};

    #[test]
    fn test_create_dto_accepts_plain_file_names() {
        let file_name: String = FileName().fake();
        assert!(CreateProductImageDto { file_name }.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_paths() {
        for file_name in ["images/cot.jpg", "..\\cot.jpg", "/cot.jpg"] {
            let dto = CreateProductImageDto {
                file_name: file_name.to_string(),
            };
            assert!(dto.validate().is_err(), "{} should be rejected", file_name);
        }
    }

    #[test]
    fn test_update_dto_rejects_blank() {
        let dto = UpdateProductImageDto {
            file_name: " ".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
