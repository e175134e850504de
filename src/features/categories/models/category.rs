use std::hash::{Hash, Hasher};

use sqlx::FromRow;

use crate::features::categories::models::ProductSummary;
use crate::shared::display::{DisplayMetadata, FieldDisplay};

/// Display labels for category fields
pub const CATEGORY_DISPLAY: DisplayMetadata = DisplayMetadata::new(
    "category",
    &[("name", FieldDisplay::label("Category Name"))],
);

/// Database model for category
///
/// `products` is not a column: it stays `None` until the owning products are
/// resolved through `CategoryService::load_products`.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[sqlx(skip)]
    pub products: Option<Vec<ProductSummary>>,
}

impl Category {
    /// Unpersisted category; the database assigns `id` on insert
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            products: None,
        }
    }
}

// Persisted categories are identified by primary key; unpersisted ones
// (`id == 0`) by name
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && (self.id != 0 || self.name == other.name)
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        if self.id == 0 {
            self.name.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn persisted(id: i32, name: &str) -> Category {
        Category {
            id,
            ..Category::new(name)
        }
    }

    #[test]
    fn test_new_category_has_unset_products() {
        let category = Category::new("Toys");
        assert_eq!(category.id, 0);
        assert_eq!(category.name, "Toys");
        assert!(category.products.is_none());
    }

    #[test]
    fn test_fields_are_writable() {
        let mut category = Category::new("Toys");
        category.id = 5;
        category.name = "Clothes".to_string();
        category.products = Some(vec![ProductSummary {
            id: 1,
            name: "Romper".to_string(),
            category_id: Some(5),
        }]);

        assert_eq!(category.id, 5);
        assert_eq!(category.name, "Clothes");
        assert_eq!(category.products.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_identity_is_by_id() {
        assert_ne!(persisted(1, "Toys"), persisted(2, "Toys"));
        assert_eq!(persisted(3, "Toys"), persisted(3, "Feeding"));

        let set: HashSet<Category> = [persisted(1, "Toys"), persisted(2, "Toys")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unpersisted_identity_falls_back_to_name() {
        assert_ne!(Category::new("Toys"), Category::new("Clothes"));
        assert_eq!(Category::new("Toys"), Category::new("Toys"));
        assert_ne!(Category::new("Toys"), persisted(1, "Toys"));

        let set: HashSet<Category> = [
            Category::new("Toys"),
            Category::new("Clothes"),
            Category::new("Toys"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_name_display_label() {
        assert_eq!(CATEGORY_DISPLAY.entity(), "category");
        assert_eq!(CATEGORY_DISPLAY.label_for("name"), Some("Category Name"));
        assert_eq!(CATEGORY_DISPLAY.display_name("id"), "id");
    }

    #[test]
    fn test_toys_category_serialized_label() {
        let category = Category::new("Toys");
        assert!(category.products.is_none());

        let labels = serde_json::to_value(CATEGORY_DISPLAY.to_map()).unwrap();
        assert_eq!(labels["name"]["display_label"], "Category Name");
    }
}
