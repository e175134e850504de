pub mod categories;
pub mod metadata;
pub mod product_images;
