//! Recording in-memory catalog used by the provider tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tmdbfin_metadata::MetadataError;
use tmdbfin_metadata::cancel::with_cancellation;
use tmdbfin_metadata::catalog::{
    CatalogClient, Collection, CollectionSearchHit, EpisodeDetail, ImageData, SeriesDetail,
};
use tmdbfin_metadata::language::ImageLanguages;
use tokio_util::sync::CancellationToken;

/// One recorded catalog call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub language: String,
    pub image_languages: Vec<String>,
}

#[derive(Default)]
pub struct MockCatalog {
    collections: HashMap<u32, Collection>,
    search_hits: Vec<CollectionSearchHit>,
    series: HashMap<u32, SeriesDetail>,
    episodes: HashMap<(u32, i32, i32), EpisodeDetail>,
    fail: bool,
    hang: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collections.insert(collection.id, collection);
        self
    }

    pub fn with_search_hit(mut self, id: u32, name: &str) -> Self {
        self.search_hits.push(CollectionSearchHit {
            id,
            name: name.to_string(),
            poster_path: None,
        });
        self
    }

    pub fn with_series(mut self, series: SeriesDetail) -> Self {
        self.series.insert(series.id, series);
        self
    }

    pub fn with_episode(
        mut self,
        series_id: u32,
        season: i32,
        episode: i32,
        detail: EpisodeDetail,
    ) -> Self {
        self.episodes.insert((series_id, season, episode), detail);
        self
    }

    /// Every call fails with a network error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every call waits until cancelled.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: &'static str,
        language: &str,
        image_languages: Option<&ImageLanguages>,
    ) {
        self.calls.lock().unwrap().push(Call {
            method,
            language: language.to_string(),
            image_languages: image_languages
                .map(|l| l.as_slice().to_vec())
                .unwrap_or_default(),
        });
    }

    async fn respond<T: Send>(
        &self,
        cancel: &CancellationToken,
        value: T,
    ) -> Result<T, MetadataError> {
        let fail = self.fail;
        let hang = self.hang;
        with_cancellation(cancel, async move {
            if hang {
                std::future::pending::<()>().await;
            }
            if fail {
                return Err(MetadataError::Network("connection reset".to_string()));
            }
            Ok(value)
        })
        .await
    }
}

#[async_trait::async_trait]
impl CatalogClient for MockCatalog {
    async fn search_collection(
        &self,
        _name: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CollectionSearchHit>, MetadataError> {
        self.record("search_collection", language, None);
        self.respond(cancel, self.search_hits.clone()).await
    }

    async fn get_collection(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<Collection>, MetadataError> {
        self.record("get_collection", language, Some(image_languages));
        self.respond(cancel, self.collections.get(&id).cloned()).await
    }

    async fn get_series(
        &self,
        id: u32,
        language: &str,
        image_languages: &ImageLanguages,
        cancel: &CancellationToken,
    ) -> Result<Option<SeriesDetail>, MetadataError> {
        self.record("get_series", language, Some(image_languages));
        self.respond(cancel, self.series.get(&id).cloned()).await
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
        self.record("get_episode", language, Some(image_languages));
        let detail = self.episodes.get(&(series_id, season, episode)).cloned();
        self.respond(cancel, detail).await
    }

    async fn fetch_image(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        self.record("fetch_image", "", None);
        self.respond(cancel, url.as_bytes().to_vec()).await
    }

    fn poster_url(&self, path: &str) -> Option<String> {
        (!path.is_empty()).then(|| format!("https://img.test/poster{path}"))
    }

    fn backdrop_url(&self, path: &str) -> Option<String> {
        (!path.is_empty()).then(|| format!("https://img.test/backdrop{path}"))
    }

    fn still_url(&self, path: &str) -> Option<String> {
        (!path.is_empty()).then(|| format!("https://img.test/still{path}"))
    }
}

pub fn image(path: &str, language: Option<&str>) -> ImageData {
    ImageData {
        file_path: path.to_string(),
        width: 1000,
        height: 1500,
        iso_639_1: language.map(str::to_string),
        vote_average: 5.0,
        vote_count: 3,
    }
}
