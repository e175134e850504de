pub mod metadata_dto;

pub use metadata_dto::{EntityDisplayDto, FieldDisplayDto};
