//! `GET /api/users`.

pub mod routes;
pub mod source;

pub use routes::users_routes;
pub use source::{SeededUserSource, UserSource, UserSourceError};
