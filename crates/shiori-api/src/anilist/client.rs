use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::error::AniListError;
use super::query::QueryDocument;
use crate::traits::GraphQlTransport;

pub const API_URL: &str = "https://graphql.anilist.co";

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: serde_json::Value,
}

/// AniList GraphQL API client. Anonymous; only public data is queried.
#[derive(Debug, Clone)]
pub struct AniListClient {
    endpoint: Url,
    http: Client,
}

impl AniListClient {
    pub fn new() -> Self {
        Self {
            endpoint: Url::parse(API_URL).expect("API_URL is a valid URL"),
            http: Client::new(),
        }
    }

    /// Client for a custom endpoint, with an optional per-request timeout.
    pub fn with_endpoint(endpoint: Url, timeout: Option<Duration>) -> Result<Self, AniListError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            http: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn graphql_request(
        &self,
        document: &QueryDocument,
    ) -> Result<serde_json::Value, AniListError> {
        tracing::debug!(endpoint = %self.endpoint, "AniList GraphQL request");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(document)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(status = %status, "AniList response received");
        resp.json::<GraphQLResponse>()
            .await
            .map(|r| r.data)
            .map_err(|e| AniListError::Parse(e.to_string()))
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphQlTransport for AniListClient {
    async fn execute(&self, document: &QueryDocument) -> Result<serde_json::Value, AniListError> {
        self.graphql_request(document).await
    }
}
