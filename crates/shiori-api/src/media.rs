use serde::{Deserialize, Serialize};

/// Catalog category a service instance is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    pub const ALL: &[MediaKind] = &[Self::Anime, Self::Manga];

    /// Parse the path token used by callers (`anime` / `manga`). Case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "anime" => Some(Self::Anime),
            "manga" => Some(Self::Manga),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Convert to the AniList GraphQL `MediaType` enum value.
    pub fn to_anilist_str(self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anime => write!(f, "Anime"),
            Self::Manga => write!(f, "Manga"),
        }
    }
}

/// The three lookups a service instance can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Options,
    Info,
    Recommendations,
}

impl Operation {
    pub const ALL: &[Operation] = &[Self::Options, Self::Info, Self::Recommendations];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "options" => Some(Self::Options),
            "info" => Some(Self::Info),
            "recommendations" => Some(Self::Recommendations),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::Info => "info",
            Self::Recommendations => "recommendations",
        }
    }

    /// Pick this operation's required parameter out of the caller's query.
    pub fn param(self, query: &MetadataQuery) -> Option<&str> {
        match self {
            Self::Options => query.name.as_deref(),
            Self::Info | Self::Recommendations => query.id.as_deref(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters supplied by the caller alongside an operation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataQuery {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl MetadataQuery {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: Some(id.into()),
        }
    }
}
