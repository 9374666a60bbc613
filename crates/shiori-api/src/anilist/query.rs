//! GraphQL documents for the three lookups.
//!
//! Parameters always travel as variables; nothing the caller supplies is
//! spliced into the query text.

use serde::Serialize;
use serde_json::json;

use crate::media::{MediaKind, Operation};

const OPTIONS_QUERY: &str = r#"
query ($search: String, $type: MediaType) {
    Page {
        media(search: $search, type: $type) {
            id
            title { romaji english }
            startDate { year }
        }
    }
}
"#;

const RECOMMENDATIONS_QUERY: &str = r#"
query ($id: Int) {
    Media(id: $id) {
        recommendations {
            edges {
                node {
                    mediaRecommendation {
                        id
                        title { romaji english }
                        type
                    }
                }
            }
        }
    }
}
"#;

const INFO_FIELDS: &str = "
            id
            title { romaji english }
            description
            startDate { year month day }
            genres
            coverImage { large }
            meanScore
            averageScore
            status
            externalLinks { site url }";

const ANIME_INFO_FIELDS: &str = "
            episodes
            duration";

const MANGA_INFO_FIELDS: &str = "
            chapters
            volumes";

/// A GraphQL request body: query text plus its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDocument {
    pub query: String,
    pub variables: serde_json::Value,
}

/// Parameter for a single lookup, already typed for its operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParam<'a> {
    Search(&'a str),
    Id(i64),
}

impl QueryDocument {
    /// Build the document for `operation` against `kind`.
    ///
    /// Returns `None` when `param` is the wrong shape for the operation
    /// (a search string for an id lookup or vice versa).
    pub fn build(operation: Operation, kind: MediaKind, param: QueryParam<'_>) -> Option<Self> {
        match (operation, param) {
            (Operation::Options, QueryParam::Search(name)) => Some(Self::options(kind, name)),
            (Operation::Info, QueryParam::Id(id)) => Some(Self::info(kind, id)),
            (Operation::Recommendations, QueryParam::Id(id)) => Some(Self::recommendations(id)),
            _ => None,
        }
    }

    /// Search by title; first page only.
    pub fn options(kind: MediaKind, name: &str) -> Self {
        Self {
            query: OPTIONS_QUERY.to_string(),
            variables: json!({
                "search": name,
                "type": kind.to_anilist_str(),
            }),
        }
    }

    pub fn recommendations(id: i64) -> Self {
        Self {
            query: RECOMMENDATIONS_QUERY.to_string(),
            variables: json!({ "id": id }),
        }
    }

    /// Full detail lookup by id alone. `kind` only picks the counters
    /// appended to the common field set.
    pub fn info(kind: MediaKind, id: i64) -> Self {
        let extra = match kind {
            MediaKind::Anime => ANIME_INFO_FIELDS,
            MediaKind::Manga => MANGA_INFO_FIELDS,
        };
        let query = format!(
            "\nquery ($id: Int) {{\n    Media(id: $id) {{{INFO_FIELDS}{extra}\n    }}\n}}\n"
        );

        Self {
            query,
            variables: json!({ "id": id }),
        }
    }
}
