pub mod category;
pub mod product;

pub use category::{Category, CATEGORY_DISPLAY};
pub use product::ProductSummary;
