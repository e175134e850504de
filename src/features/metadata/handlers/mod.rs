pub mod metadata_handler;

pub use metadata_handler::*;
