//! Operation dispatch for one media kind.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::anilist::query::{QueryDocument, QueryParam};
use crate::anilist::types::{MediaResponse, PageResponse};
use crate::error::MetadataError;
use crate::media::{MediaKind, MetadataQuery, Operation};
use crate::models::{DetailRecord, SearchOption};
use crate::traits::GraphQlTransport;

/// Output of [`MetadataService::handle`]. Serializes as the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataResponse {
    Options(Vec<SearchOption>),
    Info(DetailRecord),
    Recommendations(Vec<SearchOption>),
}

/// Metadata lookups bound to a single [`MediaKind`].
///
/// Holds no state besides the kind and the transport, so it can be built per
/// request or kept around.
#[derive(Debug, Clone)]
pub struct MetadataService<T> {
    kind: MediaKind,
    transport: T,
}

impl<T: GraphQlTransport> MetadataService<T> {
    /// Bind a service to the kind named by `kind` (`anime` or `manga`).
    pub fn new(kind: &str, transport: T) -> Result<Self, MetadataError> {
        let kind = MediaKind::from_token(kind).ok_or_else(MetadataError::invalid_endpoint)?;
        Ok(Self::for_kind(kind, transport))
    }

    pub fn for_kind(kind: MediaKind, transport: T) -> Self {
        Self { kind, transport }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Run the operation named `method` with the caller's parameters.
    pub async fn handle(
        &self,
        method: &str,
        query: &MetadataQuery,
    ) -> Result<MetadataResponse, MetadataError> {
        let operation = Operation::from_name(method).ok_or_else(MetadataError::invalid_endpoint)?;
        let param = operation.param(query).ok_or_else(|| {
            MetadataError::BadRequest(format!("Missing parameter for the {operation} endpoint"))
        })?;

        match operation {
            Operation::Options => Ok(MetadataResponse::Options(self.options(param).await)),
            Operation::Info => self.info(param).await.map(MetadataResponse::Info),
            Operation::Recommendations => Ok(MetadataResponse::Recommendations(
                self.recommendations(param).await,
            )),
        }
    }

    /// Title search. A blank name yields no candidates.
    pub async fn options(&self, name: &str) -> Vec<SearchOption> {
        if name.trim().is_empty() {
            return Vec::new();
        }

        self.request::<PageResponse>(Operation::Options, QueryParam::Search(name))
            .await
            .map(PageResponse::into_search_options)
            .unwrap_or_default()
    }

    /// Full record for `id`, or the kind's not-found error.
    pub async fn info(&self, id: &str) -> Result<DetailRecord, MetadataError> {
        let not_found = || MetadataError::NotFound(format!("{} not found", self.kind));

        let id = parse_id(id).ok_or_else(not_found)?;
        let media = self
            .request::<MediaResponse>(Operation::Info, QueryParam::Id(id))
            .await
            .and_then(|r| r.media)
            .filter(|m| m.id.is_some())
            .ok_or_else(not_found)?;

        Ok(media.into_detail_record(self.kind))
    }

    pub async fn recommendations(&self, id: &str) -> Vec<SearchOption> {
        let Some(id) = parse_id(id) else {
            return Vec::new();
        };

        self.request::<MediaResponse>(Operation::Recommendations, QueryParam::Id(id))
            .await
            .map(MediaResponse::into_recommendation_options)
            .unwrap_or_default()
    }

    /// One round trip. Transport failures and undecodable payloads both come
    /// back as `None`.
    async fn request<R: DeserializeOwned>(
        &self,
        operation: Operation,
        param: QueryParam<'_>,
    ) -> Option<R> {
        let document = QueryDocument::build(operation, self.kind, param)?;
        tracing::debug!(kind = self.kind.token(), %operation, "metadata request");

        let data = match self.transport.execute(&document).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(kind = self.kind.token(), %operation, error = %e, "upstream request failed");
                return None;
            }
        };
        if data.is_null() {
            return None;
        }

        serde_json::from_value(data)
            .map_err(|e| {
                tracing::warn!(kind = self.kind.token(), %operation, error = %e, "unexpected upstream payload");
            })
            .ok()
    }
}

/// Ids are GraphQL `Int`s; anything else can't match an entry.
fn parse_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}
