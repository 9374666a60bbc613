use serde::Serialize;

/// One candidate returned by `options` and `recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOption {
    pub id: i64,
    pub name: String,
}

/// External site link attached to a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

/// Result of the `info` operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRecord {
    pub name: String,
    pub description: String,
    /// Always `YYYY-MM-DD`.
    pub release_date: String,
    pub genres: Vec<String>,
    pub cover: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critics_score: Option<u32>,
    pub status: String,
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub details: KindDetails,
}

/// Counters that only exist for one media kind. `-1` means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KindDetails {
    Anime {
        nr_episodes: i32,
        episode_duration: i32,
    },
    Manga {
        nr_chapters: i32,
        nr_volumes: i32,
    },
}
