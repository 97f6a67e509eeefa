use tmdbfin_core::{
    ImageType, LibraryItem, MetadataResult, RemoteImageInfo, SearchQuery, SearchResult,
};
use tokio_util::sync::CancellationToken;

use crate::MetadataError;

/// A provider that can search for and fetch metadata for one host
/// entity kind.
///
/// "Nothing found" is an empty result, never an error.
#[async_trait::async_trait]
pub trait RemoteMetadataProvider: Send + Sync {
    type Item: Send;

    fn name(&self) -> &str;

    async fn search(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, MetadataError>;

    async fn fetch(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<Self::Item>, MetadataError>;

    /// Download an image referenced by one of this provider's results.
    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError>;
}

/// A provider of remote artwork for library items.
#[async_trait::async_trait]
pub trait RemoteImageProvider: Send + Sync {
    fn name(&self) -> &str;

    fn supports(&self, item: &LibraryItem) -> bool;

    fn supported_images(&self, item: &LibraryItem) -> &'static [ImageType];

    /// Images sorted by language preference.
    async fn images(
        &self,
        item: &LibraryItem,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>, MetadataError>;

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError>;
}
