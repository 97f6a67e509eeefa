pub mod model;
pub mod types;

pub use model::{
    BoxSet, Episode, LibraryItem, MetadataResult, PersonInfo, RemoteImageInfo, SearchQuery,
    SearchResult,
};
pub use types::{
    ImageType, ItemKind, PersonKind, ProviderIds, ProviderKind, RatingType, parse_catalog_id,
};
