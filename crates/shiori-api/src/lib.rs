//! Metadata lookups for anime and manga backed by the AniList GraphQL API.
//!
//! [`MetadataService`] is the entry point: it is bound to one media kind and
//! dispatches the `options`, `info` and `recommendations` operations through
//! the query builder, the upstream client and the result mapper.

pub mod anilist;
pub mod error;
pub mod media;
pub mod models;
pub mod sanitize;
pub mod service;
pub mod traits;

pub use error::MetadataError;
pub use media::{MediaKind, MetadataQuery, Operation};
pub use models::{DetailRecord, KindDetails, Link, SearchOption};
pub use service::{MetadataResponse, MetadataService};
pub use traits::GraphQlTransport;
