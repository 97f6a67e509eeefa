//! Contract between the providers and the catalog client, plus the
//! response shapes the client hands back.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tokio_util::sync::CancellationToken;

use crate::MetadataError;
use crate::language::ImageLanguages;

/// Async access to the remote catalog.
///
/// Lookups by id return `Ok(None)` when the catalog has no such entry.
/// Implementations own caching, throttling and timeouts, and must
/// return [`MetadataError::Cancelled`] once `cancel` fires.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search_collection(
        &self,
        name: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CollectionSearchHit>, MetadataError>;

    async fn get_collection(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<Collection>, MetadataError>;

    async fn get_series(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<SeriesDetail>, MetadataError>;

    async fn get_episode(
        &self,
        series_id: u32,
        season: i32,
        episode: i32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<EpisodeDetail>, MetadataError>;

    /// Raw bytes of an image URL previously produced by this client.
    async fn fetch_image(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError>;

    /// `None` for an empty path.
    fn poster_url(&self, path: &str) -> Option<String>;

    fn backdrop_url(&self, path: &str) -> Option<String>;

    fn still_url(&self, path: &str) -> Option<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionSearchHit {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub images: Option<ImageSet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesDetail {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub posters: Vec<ImageData>,
    #[serde(default)]
    pub backdrops: Vec<ImageData>,
    #[serde(default)]
    pub stills: Vec<ImageData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageData {
    pub file_path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EpisodeDetail {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub air_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default)]
    pub videos: Option<VideoList>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub images: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub tvdb_id: Option<i64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
    #[serde(default)]
    pub guest_stars: Vec<CastCredit>,
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CastCredit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrewCredit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// TMDB sends `""` or `null` for unknown air dates.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}
