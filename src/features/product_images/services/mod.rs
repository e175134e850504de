pub mod product_image_service;

pub use product_image_service::ProductImageService;
