pub mod category_dto;

pub use category_dto::{
    CategoryInclude, CategoryResponseDto, CreateCategoryDto, GetCategoryQuery, ProductSummaryDto,
    UpdateCategoryDto,
};
