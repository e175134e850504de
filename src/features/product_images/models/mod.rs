pub mod product_image;

pub use product_image::{ProductImage, PRODUCT_IMAGE_DISPLAY};
