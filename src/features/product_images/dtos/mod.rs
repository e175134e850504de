pub mod product_image_dto;

pub use product_image_dto::{
    CreateProductImageDto, ProductImageResponseDto, UpdateProductImageDto,
};
