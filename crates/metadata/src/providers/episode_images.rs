use std::sync::Arc;

use tmdbfin_core::{ImageType, ItemKind, LibraryItem, RemoteImageInfo};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::series_images::remote_image;
use crate::catalog::CatalogClient;
use crate::language::{
    adjust_image_language, build_image_language_param, sort_by_language_descending,
};
use crate::provider::RemoteImageProvider;
use crate::{MetadataError, PROVIDER_NAME, ProviderOptions};

/// Episode stills; there is no backdrop at episode level.
pub struct EpisodeImageProvider {
    client: Arc<dyn CatalogClient>,
    options: ProviderOptions,
}

impl EpisodeImageProvider {
    pub fn new(client: Arc<dyn CatalogClient>, options: ProviderOptions) -> Self {
        Self { client, options }
    }
}

#[async_trait::async_trait]
impl RemoteImageProvider for EpisodeImageProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, item: &LibraryItem) -> bool {
        item.kind == ItemKind::Episode
    }

    fn supported_images(&self, _item: &LibraryItem) -> &'static [ImageType] {
        &[ImageType::Primary]
    }

    async fn images(
        &self,
        item: &LibraryItem,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>, MetadataError> {
        let Some(series_id) = item.series_provider_ids.tmdb_id() else {
            debug!(name = %item.name, "episode stills without series TMDB id");
            return Ok(Vec::new());
        };
        let (Some(season), Some(episode)) = (item.parent_index_number, item.index_number) else {
            debug!(series_id, "episode stills without season/episode number");
            return Ok(Vec::new());
        };

        let language = self
            .options
            .language_for(item.preferred_metadata_language.as_deref());
        let image_languages =
            build_image_language_param(&language, &self.options.fallback_image_language);

        let detail = self
            .client
            .get_episode(series_id, season, episode, &language, &image_languages, cancel)
            .await?;
        let Some(images) = detail.and_then(|d| d.images) else {
            debug!(series_id, season, episode, "no episode stills");
            return Ok(Vec::new());
        };

        let stills = images
            .stills
            .iter()
            .filter_map(|still| {
                remote_image(
                    still,
                    self.client.still_url(&still.file_path),
                    ImageType::Primary,
                    adjust_image_language(still.iso_639_1.as_deref(), &language),
                )
            })
            .collect();

        Ok(sort_by_language_descending(stills, &language))
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        self.client.fetch_image(url, cancel).await
    }
}
