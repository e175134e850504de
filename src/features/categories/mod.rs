//! Store categories and the products they own.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Paginated list |
//! | POST | `/api/categories` | Create a category |
//! | GET | `/api/categories/{id}` | Get one (`?include=products` resolves products) |
//! | PUT | `/api/categories/{id}` | Rename |
//! | DELETE | `/api/categories/{id}` | Delete |
//! | GET | `/api/categories/{id}/products` | Products owned by the category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
