use std::sync::Arc;

use tmdbfin_core::{ImageType, ItemKind, LibraryItem, RatingType, RemoteImageInfo};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::catalog::{CatalogClient, ImageData};
use crate::language::{
    adjust_image_language, build_image_language_param, sort_by_language_descending,
};
use crate::provider::RemoteImageProvider;
use crate::{MetadataError, PROVIDER_NAME, ProviderOptions};

pub struct SeriesImageProvider {
    client: Arc<dyn CatalogClient>,
    options: ProviderOptions,
}

impl SeriesImageProvider {
    pub fn new(client: Arc<dyn CatalogClient>, options: ProviderOptions) -> Self {
        Self { client, options }
    }
}

/// Build a remote image; entries without a usable URL are dropped.
pub(crate) fn remote_image(
    image: &ImageData,
    url: Option<String>,
    kind: ImageType,
    language: Option<String>,
) -> Option<RemoteImageInfo> {
    Some(RemoteImageInfo {
        url: url?,
        provider_name: PROVIDER_NAME.to_string(),
        kind,
        language,
        width: Some(image.width),
        height: Some(image.height),
        community_rating: Some(image.vote_average),
        vote_count: Some(image.vote_count),
        rating_type: RatingType::Score,
    })
}

#[async_trait::async_trait]
impl RemoteImageProvider for SeriesImageProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supports(&self, item: &LibraryItem) -> bool {
        item.kind == ItemKind::Series
    }

    fn supported_images(&self, _item: &LibraryItem) -> &'static [ImageType] {
        &[ImageType::Primary, ImageType::Backdrop]
    }

    async fn images(
        &self,
        item: &LibraryItem,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>, MetadataError> {
        let Some(series_id) = item.provider_ids.tmdb_id() else {
            debug!(name = %item.name, "series images without TMDB id");
            return Ok(Vec::new());
        };

        let language = self
            .options
            .language_for(item.preferred_metadata_language.as_deref());
        let image_languages =
            build_image_language_param(&language, &self.options.fallback_image_language);

        let series = self
            .client
            .get_series(series_id, &language, &image_languages, cancel)
            .await?;
        let Some(images) = series.and_then(|s| s.images) else {
            debug!(series_id, "no series images");
            return Ok(Vec::new());
        };

        let posters = images.posters.iter().filter_map(|poster| {
            remote_image(
                poster,
                self.client.poster_url(&poster.file_path),
                ImageType::Primary,
                adjust_image_language(poster.iso_639_1.as_deref(), &language),
            )
        });
        let backdrops = images.backdrops.iter().filter_map(|backdrop| {
            remote_image(
                backdrop,
                self.client.backdrop_url(&backdrop.file_path),
                ImageType::Backdrop,
                None,
            )
        });

        Ok(sort_by_language_descending(
            posters.chain(backdrops).collect(),
            &language,
        ))
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        self.client.fetch_image(url, cancel).await
    }
}
