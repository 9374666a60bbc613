//! HTTP front end for the shiori metadata service.
//!
//! Exposes `GET /api/{kind}/{method}` on top of [`shiori_api::MetadataService`].

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, AppResult};
pub use routes::{router, AppState};
