use crate::features::categories::models::CATEGORY_DISPLAY;
use crate::features::product_images::models::PRODUCT_IMAGE_DISPLAY;
use crate::shared::display::DisplayMetadata;

/// Display metadata of every entity exposed to the UI layer
const ENTITY_DISPLAY_REGISTRY: &[DisplayMetadata] = &[CATEGORY_DISPLAY, PRODUCT_IMAGE_DISPLAY];

/// Look up an entity's display metadata by exact entity name
pub fn find_entity(entity: &str) -> Option<DisplayMetadata> {
    ENTITY_DISPLAY_REGISTRY
        .iter()
        .find(|metadata| metadata.entity() == entity)
        .copied()
}

pub fn all_entities() -> &'static [DisplayMetadata] {
    ENTITY_DISPLAY_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_both_entities() {
        let names: Vec<_> = all_entities().iter().map(|m| m.entity()).collect();
        assert_eq!(names, vec!["category", "product_image"]);
    }

    #[test]
    fn test_find_entity() {
        let category = find_entity("category").unwrap();
        assert_eq!(category.label_for("name"), Some("Category Name"));

        let image = find_entity("product_image").unwrap();
        assert_eq!(image.label_for("file_name"), Some("File"));

        assert!(find_entity("product").is_none());
        assert!(find_entity("Category").is_none());
    }
}
