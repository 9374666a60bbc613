use chrono::Datelike;
use serde::Deserialize;

use crate::media::MediaKind;
use crate::models::{DetailRecord, KindDetails, Link, SearchOption};
use crate::sanitize::sanitize;

// ── Search / media queries ───────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: Option<PageData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageData {
    pub media: Option<Vec<AniListMedia>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaResponse {
    #[serde(rename = "Media")]
    pub media: Option<AniListMedia>,
}

/// A `Media` object. Every field is optional since each query selects a
/// different subset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AniListMedia {
    pub id: Option<i64>,
    pub title: Option<MediaTitle>,
    pub description: Option<String>,
    pub start_date: Option<FuzzyDate>,
    pub genres: Option<Vec<String>>,
    pub cover_image: Option<CoverImage>,
    pub mean_score: Option<u32>,
    pub average_score: Option<u32>,
    pub status: Option<String>,
    pub external_links: Option<Vec<ExternalLink>>,
    pub episodes: Option<i32>,
    pub duration: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub recommendations: Option<RecommendationConnection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalLink {
    pub site: Option<String>,
    pub url: Option<String>,
}

// ── Recommendations ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationConnection {
    pub edges: Option<Vec<RecommendationEdge>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationEdge {
    pub node: Option<RecommendationNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationNode {
    pub media_recommendation: Option<AniListMedia>,
}

// ── Conversions ──────────────────────────────────────────────────

/// Month and day used when AniList only knows part of a date.
const FALLBACK_MONTH: u32 = 12;
const FALLBACK_DAY: u32 = 31;

/// Count reported when AniList has no value.
const UNKNOWN_COUNT: i32 = -1;

impl FuzzyDate {
    /// Render as `YYYY-MM-DD`, filling gaps with the current year, December
    /// and the 31st.
    pub fn to_release_date(&self) -> String {
        let y = self.year.unwrap_or_else(|| chrono::Utc::now().year());
        let m = self.month.unwrap_or(FALLBACK_MONTH);
        let d = self.day.unwrap_or(FALLBACK_DAY);
        format!("{y:04}-{m:02}-{d:02}")
    }
}

impl PageResponse {
    pub fn into_search_options(self) -> Vec<SearchOption> {
        self.page
            .and_then(|p| p.media)
            .unwrap_or_default()
            .into_iter()
            .filter_map(AniListMedia::into_search_option)
            .collect()
    }
}

impl MediaResponse {
    pub fn into_recommendation_options(self) -> Vec<SearchOption> {
        self.media
            .and_then(|m| m.recommendations)
            .and_then(|r| r.edges)
            .unwrap_or_default()
            .into_iter()
            .filter_map(RecommendationEdge::into_search_option)
            .collect()
    }
}

impl AniListMedia {
    /// Sanitized English title, falling back to romaji, then to "".
    fn display_title(&self) -> String {
        let title = self
            .title
            .as_ref()
            .and_then(|t| t.english.as_deref().or(t.romaji.as_deref()))
            .unwrap_or_default();
        sanitize(title)
    }

    /// `None` when the entry has no id.
    pub fn into_search_option(self) -> Option<SearchOption> {
        let id = self.id?;
        let title = self.display_title();
        let name = match self.start_date.as_ref().and_then(|d| d.year) {
            Some(year) => format!("{title} ({year})"),
            None => title,
        };

        Some(SearchOption {
            id,
            name: name.trim().to_string(),
        })
    }

    pub fn into_detail_record(self, kind: MediaKind) -> DetailRecord {
        let name = self.display_title().trim().to_string();
        let details = match kind {
            MediaKind::Anime => KindDetails::Anime {
                nr_episodes: self.episodes.unwrap_or(UNKNOWN_COUNT),
                episode_duration: self.duration.unwrap_or(UNKNOWN_COUNT),
            },
            MediaKind::Manga => KindDetails::Manga {
                nr_chapters: self.chapters.unwrap_or(UNKNOWN_COUNT),
                nr_volumes: self.volumes.unwrap_or(UNKNOWN_COUNT),
            },
        };

        DetailRecord {
            name,
            description: sanitize(self.description.as_deref().unwrap_or_default()),
            release_date: self.start_date.unwrap_or_default().to_release_date(),
            genres: self.genres.unwrap_or_default(),
            cover: self.cover_image.and_then(|c| c.large).unwrap_or_default(),
            community_score: self.mean_score,
            critics_score: self.average_score,
            status: self.status.unwrap_or_default(),
            links: self
                .external_links
                .unwrap_or_default()
                .into_iter()
                .map(ExternalLink::into_link)
                .collect(),
            details,
        }
    }
}

impl RecommendationEdge {
    /// Unwrap `node.mediaRecommendation`. No year suffix: the
    /// recommendations query doesn't select one.
    pub fn into_search_option(self) -> Option<SearchOption> {
        let media = self.node?.media_recommendation?;
        let id = media.id?;
        Some(SearchOption {
            id,
            name: media.display_title().trim().to_string(),
        })
    }
}

impl ExternalLink {
    fn into_link(self) -> Link {
        Link {
            name: self.site.unwrap_or_default(),
            href: self.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(json: &str) -> AniListMedia {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "Page": {
                "media": [
                    {
                        "id": 5231,
                        "title": { "romaji": "Inazuma Eleven", "english": "Inazuma Eleven" },
                        "startDate": { "year": 2008 }
                    },
                    {
                        "id": 10217,
                        "title": { "romaji": "Inazuma Eleven Go", "english": null },
                        "startDate": { "year": null }
                    }
                ]
            }
        }"#;

        let resp: PageResponse = serde_json::from_str(json).unwrap();
        let options = resp.into_search_options();
        assert_eq!(
            options,
            vec![
                SearchOption { id: 5231, name: "Inazuma Eleven (2008)".into() },
                SearchOption { id: 10217, name: "Inazuma Eleven Go".into() },
            ]
        );
    }

    #[test]
    fn test_missing_page_is_empty() {
        let resp: PageResponse = serde_json::from_str(r#"{ "Page": null }"#).unwrap();
        assert!(resp.into_search_options().is_empty());
        let resp: PageResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_search_options().is_empty());
    }

    #[test]
    fn test_title_fallback() {
        let english = media(r#"{ "id": 1, "title": { "romaji": "Ao no Hako", "english": "Blue Box" } }"#);
        assert_eq!(english.into_search_option().unwrap().name, "Blue Box");

        let romaji = media(r#"{ "id": 1, "title": { "romaji": "Ao no Hako" } }"#);
        assert_eq!(romaji.into_search_option().unwrap().name, "Ao no Hako");

        let none = media(r#"{ "id": 1, "title": {} }"#);
        assert_eq!(none.into_search_option().unwrap().name, "");

        let no_title = media(r#"{ "id": 1, "startDate": { "year": 2021 } }"#);
        assert_eq!(no_title.into_search_option().unwrap().name, "(2021)");
    }

    #[test]
    fn test_year_suffix() {
        let with_year = media(r#"{ "id": 1, "title": { "english": "Foo" }, "startDate": { "year": 2010 } }"#);
        assert_eq!(with_year.into_search_option().unwrap().name, "Foo (2010)");

        let without = media(r#"{ "id": 1, "title": { "english": "Foo" } }"#);
        assert_eq!(without.into_search_option().unwrap().name, "Foo");
    }

    #[test]
    fn test_search_option_sanitized_and_trimmed() {
        let m = media(r#"{ "id": 2, "title": { "english": " <i>Foo</i>\n" } }"#);
        assert_eq!(m.into_search_option().unwrap().name, "Foo");
    }

    #[test]
    fn test_entry_without_id_is_skipped() {
        let m = media(r#"{ "title": { "english": "Foo" } }"#);
        assert!(m.into_search_option().is_none());
    }

    #[test]
    fn test_recommendations_preserve_order() {
        let json = r#"{
            "Media": {
                "recommendations": {
                    "edges": [
                        { "node": { "mediaRecommendation": {
                            "id": 21, "title": { "romaji": "One Piece", "english": "ONE PIECE" }, "type": "ANIME"
                        } } },
                        { "node": { "mediaRecommendation": null } },
                        { "node": { "mediaRecommendation": {
                            "id": 20, "title": { "romaji": "Naruto", "english": null }, "type": "ANIME"
                        } } }
                    ]
                }
            }
        }"#;

        let resp: MediaResponse = serde_json::from_str(json).unwrap();
        let options = resp.into_recommendation_options();
        assert_eq!(
            options,
            vec![
                SearchOption { id: 21, name: "ONE PIECE".into() },
                SearchOption { id: 20, name: "Naruto".into() },
            ]
        );
    }

    #[test]
    fn test_recommendations_missing_media() {
        let resp: MediaResponse = serde_json::from_str(r#"{ "Media": null }"#).unwrap();
        assert!(resp.into_recommendation_options().is_empty());
        let resp: MediaResponse =
            serde_json::from_str(r#"{ "Media": { "recommendations": { "edges": null } } }"#).unwrap();
        assert!(resp.into_recommendation_options().is_empty());
    }

    #[test]
    fn test_detail_record_anime() {
        let json = r#"{
            "id": 5231,
            "title": { "romaji": "Inazuma Eleven", "english": "Inazuma Eleven" },
            "description": "Endou Mamoru is a goalkeeper.<br><br>He wants to <i>win</i>.\n",
            "startDate": { "year": 2008, "month": 10, "day": 5 },
            "genres": ["Comedy", "Sports"],
            "coverImage": { "large": "https://img.anili.st/5231.jpg" },
            "meanScore": 74,
            "averageScore": 72,
            "status": "FINISHED",
            "externalLinks": [
                { "site": "Official Site", "url": "https://www.inazuma.jp/" }
            ],
            "episodes": 127,
            "duration": 24
        }"#;

        let record = media(json).into_detail_record(MediaKind::Anime);
        assert_eq!(record.name, "Inazuma Eleven");
        assert_eq!(record.description, "Endou Mamoru is a goalkeeper. He wants to win.");
        assert_eq!(record.release_date, "2008-10-05");
        assert_eq!(record.genres, vec!["Comedy", "Sports"]);
        assert_eq!(record.cover, "https://img.anili.st/5231.jpg");
        assert_eq!(record.community_score, Some(74));
        assert_eq!(record.critics_score, Some(72));
        assert_eq!(record.status, "FINISHED");
        assert_eq!(
            record.links,
            vec![Link {
                name: "Official Site".into(),
                href: "https://www.inazuma.jp/".into()
            }]
        );
        assert_eq!(
            record.details,
            KindDetails::Anime { nr_episodes: 127, episode_duration: 24 }
        );
    }

    #[test]
    fn test_detail_record_defaults() {
        let record = media(r#"{ "id": 1, "startDate": { "year": 2020 } }"#)
            .into_detail_record(MediaKind::Anime);
        assert_eq!(record.release_date, "2020-12-31");
        assert_eq!(record.details, KindDetails::Anime { nr_episodes: -1, episode_duration: -1 });
        assert_eq!(record.name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.cover, "");
        assert!(record.genres.is_empty());
        assert!(record.links.is_empty());
        assert!(record.community_score.is_none());
    }

    #[test]
    fn test_detail_record_manga_counts() {
        let record = media(r#"{ "id": 132182, "chapters": 180, "episodes": 12 }"#)
            .into_detail_record(MediaKind::Manga);
        assert_eq!(record.details, KindDetails::Manga { nr_chapters: 180, nr_volumes: -1 });
    }

    #[test]
    fn test_release_date_without_year_uses_current_year() {
        let date = FuzzyDate { year: None, month: Some(3), day: None };
        let year = chrono::Utc::now().year();
        assert_eq!(date.to_release_date(), format!("{year:04}-03-31"));
    }

    #[test]
    fn test_detail_record_json_shape() {
        let record = media(r#"{ "id": 1, "chapters": 10, "volumes": 2, "meanScore": 80 }"#)
            .into_detail_record(MediaKind::Manga);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["nr_chapters"], 10);
        assert_eq!(value["nr_volumes"], 2);
        assert_eq!(value["community_score"], 80);
        assert!(value.get("critics_score").is_none());
        assert!(value.get("details").is_none());
        assert!(value.get("nr_episodes").is_none());
    }
}
