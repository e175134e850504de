pub mod product_image_handler;

pub use product_image_handler::*;
