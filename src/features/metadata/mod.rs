//! Read-only display metadata for UI generation.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/metadata` | Labels for every entity |
//! | GET | `/api/metadata/{entity}` | Labels for one entity |
//! | GET | `/api/metadata/{entity}/fields/{field}` | Label for one field, falling back to its name |

pub mod dtos;
pub mod handlers;
pub mod registry;
pub mod routes;
