use std::hash::{Hash, Hasher};

use sqlx::FromRow;

use crate::shared::display::{DisplayMetadata, FieldDisplay};

/// Display labels for product image fields
pub const PRODUCT_IMAGE_DISPLAY: DisplayMetadata = DisplayMetadata::new(
    "product_image",
    &[("file_name", FieldDisplay::label("File"))],
);

/// Database model for an image asset reference
#[derive(Debug, Clone, FromRow)]
pub struct ProductImage {
    pub id: i32,
    /// Name of the externally stored asset; existence is not checked
    pub file_name: String,
}

impl ProductImage {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            file_name: file_name.into(),
        }
    }
}

// Same identity rule as Category: primary key, or file name while unsaved
impl PartialEq for ProductImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && (self.id != 0 || self.file_name == other.file_name)
    }
}

impl Eq for ProductImage {}

impl Hash for ProductImage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        if self.id == 0 {
            self.file_name.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_readable_and_writable() {
        let mut image = ProductImage::new("cot.jpg");
        assert_eq!(image.id, 0);
        assert_eq!(image.file_name, "cot.jpg");

        image.id = 9;
        image.file_name = "pram.png".to_string();
        assert_eq!(image.id, 9);
        assert_eq!(image.file_name, "pram.png");
    }

    #[test]
    fn test_record_accepts_any_file_name() {
        // request validation lives in the DTOs, not on the record
        let image = ProductImage::new("nested/dir/../x");
        assert_eq!(image.file_name, "nested/dir/../x");
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = ProductImage {
            id: 1,
            ..ProductImage::new("cot.jpg")
        };
        let b = ProductImage {
            id: 2,
            ..ProductImage::new("cot.jpg")
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_unpersisted_images_compare_by_file_name() {
        use std::collections::HashSet;

        assert_ne!(ProductImage::new("cot.jpg"), ProductImage::new("pram.png"));
        assert_eq!(ProductImage::new("cot.jpg"), ProductImage::new("cot.jpg"));

        let set: HashSet<ProductImage> = [ProductImage::new("cot.jpg"), ProductImage::new("pram.png")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_file_name_display_label() {
        assert_eq!(PRODUCT_IMAGE_DISPLAY.entity(), "product_image");
        assert_eq!(PRODUCT_IMAGE_DISPLAY.label_for("file_name"), Some("File"));
        assert_eq!(PRODUCT_IMAGE_DISPLAY.display_name("id"), "id");
    }
}
