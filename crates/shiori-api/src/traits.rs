//! Transport seam between the dispatcher and the metadata provider.
//!
//! [`AniListClient`](crate::anilist::AniListClient) is the production
//! implementation; tests substitute canned payloads.

use std::future::Future;
use std::sync::Arc;

use crate::anilist::{AniListError, QueryDocument};

/// Executes a GraphQL document against the provider.
pub trait GraphQlTransport: Send + Sync {
    /// Send `document` once and return the response's `data` field
    /// (`Value::Null` when the body has none).
    fn execute(
        &self,
        document: &QueryDocument,
    ) -> impl Future<Output = Result<serde_json::Value, AniListError>> + Send;
}

impl<T: GraphQlTransport> GraphQlTransport for Arc<T> {
    async fn execute(&self, document: &QueryDocument) -> Result<serde_json::Value, AniListError> {
        (**self).execute(document).await
    }
}

impl<T: GraphQlTransport> GraphQlTransport for &T {
    async fn execute(&self, document: &QueryDocument) -> Result<serde_json::Value, AniListError> {
        (**self).execute(document).await
    }
}
