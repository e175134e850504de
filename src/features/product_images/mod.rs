//! Product image records: references to externally stored image files.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/product-images` | Paginated list |
//! | POST | `/api/product-images` | Register an image file |
//! | GET | `/api/product-images/{id}` | Get one |
//! | PUT | `/api/product-images/{id}` | Change the file name |
//! | DELETE | `/api/product-images/{id}` | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductImageService;
