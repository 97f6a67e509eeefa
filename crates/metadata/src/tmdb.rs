//! TMDB (The Movie Database) catalog client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::MetadataError;
use crate::cancel::with_cancellation;
use crate::catalog::{
    CatalogClient, Collection, CollectionSearchHit, EpisodeDetail, Paginated, SeriesDetail,
};
use crate::config::env_value;
use crate::language::ImageLanguages;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub poster_size: String,
    pub backdrop_size: String,
    pub still_size: String,
    pub timeout_secs: u64,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            image_base_url: IMAGE_BASE.to_string(),
            poster_size: "original".to_string(),
            backdrop_size: "original".to_string(),
            still_size: "original".to_string(),
            timeout_secs: 30,
        }
    }

    /// Reads `TMDBFIN_TMDB_KEY` (required) and `TMDBFIN_TMDB_BASE_URL`.
    pub fn from_env() -> Result<Self, MetadataError> {
        let api_key = env_value("TMDBFIN_TMDB_KEY")
            .ok_or_else(|| MetadataError::Config("TMDBFIN_TMDB_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = env_value("TMDBFIN_TMDB_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.trim().is_empty() {
            return Err(MetadataError::Config("TMDB api key is empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::Config(format!("build http client: {e}")))?;
        Ok(Self { config, client })
    }

    /// GET a TMDB resource; a 404 yields `Ok(None)`.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<Option<T>, MetadataError> {
        let mut all_params = vec![("api_key", self.config.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.config.base_url);
        debug!(url = %url, "TMDB request");

        with_cancellation(cancel, async {
            let resp = self
                .client
                .get(&url)
                .query(&all_params)
                .send()
                .await
                .map_err(|e| MetadataError::Network(e.to_string()))?;

            if resp.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(MetadataError::NotFound);
            }

            if !resp.status().is_success() {
                return Err(MetadataError::Provider(format!(
                    "TMDB returned {}",
                    resp.status()
                )));
            }

            resp.json::<T>()
                .await
                .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
        })
        .await
        .map(Some)
        .or_else(|e| match e {
            MetadataError::NotFound => Ok(None),
            other => Err(other),
        })
    }

    fn image_url(&self, size: &str, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let separator = if path.starts_with('/') { "" } else { "/" };
        Some(format!(
            "{}/{size}{separator}{path}",
            self.config.image_base_url
        ))
    }
}

#[async_trait::async_trait]
impl CatalogClient for TmdbClient {
    async fn search_collection(
        &self,
        name: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CollectionSearchHit>, MetadataError> {
        let page: Option<Paginated<CollectionSearchHit>> = self
            .get_json(
                "/search/collection",
                &[("query", name), ("language", language)],
                cancel,
            )
            .await?;

        Ok(page.map(|p| p.results).unwrap_or_default())
    }

    async fn get_collection(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<Collection>, MetadataError> {
        let image_languages = image_languages.to_query_value();
        self.get_json(
            &format!("/collection/{id}"),
            &[
                ("language", language),
                ("include_image_language", image_languages.as_str()),
                ("append_to_response", "images"),
            ],
            cancel,
        )
        .await
    }

    async fn get_series(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<SeriesDetail>, MetadataError> {
        let image_languages = image_languages.to_query_value();
        self.get_json(
            &format!("/tv/{id}"),
            &[
                ("language", language),
                ("include_image_language", image_languages.as_str()),
                ("append_to_response", "images"),
            ],
            cancel,
        )
        .await
    }

    async fn get_episode(
        &self,
        series_id: u32,
        season: i32,
        episode: i32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<EpisodeDetail>, MetadataError> {
        let image_languages = image_languages.to_query_value();
        self.get_json(
            &format!("/tv/{series_id}/season/{season}/episode/{episode}"),
            &[
                ("language", language),
                ("include_image_language", image_languages.as_str()),
                ("append_to_response", "credits,external_ids,images,videos"),
            ],
            cancel,
        )
        .await
    }

    async fn fetch_image(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        with_cancellation(cancel, async {
            let resp = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| MetadataError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(MetadataError::Provider(format!(
                    "image download returned {}",
                    resp.status()
                )));
            }

            let bytes = resp
                .bytes()
                .await
                .map_err(|e| MetadataError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        })
        .await
    }

    fn poster_url(&self, path: &str) -> Option<String> {
        self.image_url(&self.config.poster_size, path)
    }

    fn backdrop_url(&self, path: &str) -> Option<String> {
        self.image_url(&self.config.backdrop_size, path)
    }

    fn still_url(&self, path: &str) -> Option<String> {
        self.image_url(&self.config.still_size, path)
    }
}
