use std::sync::Arc;

use tmdbfin_core::{BoxSet, MetadataResult, ProviderIds, ProviderKind, SearchQuery, SearchResult};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::catalog::{CatalogClient, Collection};
use crate::language::build_image_language_param;
use crate::provider::RemoteMetadataProvider;
use crate::{MetadataError, PROVIDER_NAME, ProviderOptions};

/// Box sets map onto TMDB collections.
pub struct BoxSetProvider {
    client: Arc<dyn CatalogClient>,
    options: ProviderOptions,
}

impl BoxSetProvider {
    pub fn new(client: Arc<dyn CatalogClient>, options: ProviderOptions) -> Self {
        Self { client, options }
    }

    async fn get_collection(
        &self,
        id: u32,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Collection>, MetadataError> {
        let image_languages =
            build_image_language_param(language, &self.options.fallback_image_language);
        let collection = self
            .client
            .get_collection(id, language, &image_languages, cancel)
            .await?;
        if collection.is_none() {
            debug!(collection_id = id, language, "collection not found");
        }
        Ok(collection)
    }
}

fn tmdb_ids(id: u32) -> ProviderIds {
    ProviderIds::new().with(ProviderKind::Tmdb, id.to_string())
}

#[async_trait::async_trait]
impl RemoteMetadataProvider for BoxSetProvider {
    type Item = BoxSet;

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        let language = self.options.language_for(query.metadata_language.as_deref());

        if let Some(id) = query.known_id() {
            let Some(collection) = self.get_collection(id, &language, cancel).await? else {
                return Ok(Vec::new());
            };

            return Ok(vec![SearchResult {
                name: collection.name,
                search_provider_name: PROVIDER_NAME.to_string(),
                image_url: collection
                    .poster_path
                    .as_deref()
                    .and_then(|path| self.client.poster_url(path)),
                provider_ids: tmdb_ids(collection.id),
                ..Default::default()
            }]);
        }

        if query.name.trim().is_empty() {
            debug!("box set search without id or name");
            return Ok(Vec::new());
        }

        let hits = self
            .client
            .search_collection(&query.name, &language, cancel)
            .await?;

        Ok(hits
            .into_iter()
            .map(|hit| SearchResult {
                name: hit.name,
                search_provider_name: PROVIDER_NAME.to_string(),
                provider_ids: tmdb_ids(hit.id),
                ..Default::default()
            })
            .collect())
    }

    async fn fetch(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<BoxSet>, MetadataError> {
        let language = self.options.language_for(query.metadata_language.as_deref());

        let mut id = query.known_id();
        // Search hits lack the overview, so a hit is only used for its id.
        if id.is_none() && !query.name.trim().is_empty() {
            let hits = self
                .client
                .search_collection(&query.name, &language, cancel)
                .await?;
            id = hits.first().map(|hit| hit.id).filter(|id| *id > 0);
        }

        let Some(id) = id else {
            debug!(name = %query.name, "no collection id resolved");
            return Ok(MetadataResult::empty());
        };

        let Some(collection) = self.get_collection(id, &language, cancel).await? else {
            return Ok(MetadataResult::empty());
        };

        Ok(MetadataResult::found(BoxSet {
            name: collection.name,
            overview: collection.overview,
            provider_ids: tmdb_ids(collection.id),
        }))
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        self.client.fetch_image(url, cancel).await
    }
}
