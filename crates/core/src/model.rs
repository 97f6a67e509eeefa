//! Request-scoped records exchanged between the host and the providers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ImageType, ItemKind, PersonKind, ProviderIds, RatingType};

/// Lookup info the host hands to a provider's search/fetch operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub name: String,
    pub provider_ids: ProviderIds,
    /// Provider ids of the parent series (episode lookups only).
    pub series_provider_ids: ProviderIds,
    pub metadata_language: Option<String>,
    /// Season number for episode lookups.
    pub parent_index_number: Option<i32>,
    pub index_number: Option<i32>,
    pub index_number_end: Option<i32>,
    /// Placeholder for an episode the host knows is not on disk.
    pub is_missing_episode: bool,
}

impl SearchQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn known_id(&self) -> Option<u32> {
        self.provider_ids.tmdb_id()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub search_provider_name: String,
    pub image_url: Option<String>,
    pub index_number: Option<i32>,
    pub index_number_end: Option<i32>,
    pub parent_index_number: Option<i32>,
    pub premiere_date: Option<NaiveDate>,
    pub production_year: Option<i32>,
    pub provider_ids: ProviderIds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub role: Option<String>,
    pub kind: PersonKind,
    /// Billing order for cast; crew carries none.
    pub sort_order: Option<i32>,
}

/// Outcome of a metadata fetch.
///
/// An absent item means nothing was found; this is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResult<T> {
    item: Option<T>,
    pub queried_by_id: bool,
    pub result_language: Option<String>,
    pub people: Vec<PersonInfo>,
}

impl<T> Default for MetadataResult<T> {
    fn default() -> Self {
        Self {
            item: None,
            queried_by_id: false,
            result_language: None,
            people: Vec::new(),
        }
    }
}

impl<T> MetadataResult<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn found(item: T) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    pub fn has_metadata(&self) -> bool {
        self.item.is_some()
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn into_item(self) -> Option<T> {
        self.item
    }

    pub fn add_person(&mut self, person: PersonInfo) {
        self.people.push(person);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSet {
    pub name: String,
    pub overview: Option<String>,
    pub provider_ids: ProviderIds,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub name: String,
    pub overview: Option<String>,
    pub index_number: Option<i32>,
    pub index_number_end: Option<i32>,
    pub parent_index_number: Option<i32>,
    pub premiere_date: Option<NaiveDate>,
    pub production_year: Option<i32>,
    pub community_rating: Option<f32>,
    pub trailer_urls: Vec<String>,
    pub provider_ids: ProviderIds,
}

/// A library item as seen by the image providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub kind: ItemKind,
    pub name: String,
    pub provider_ids: ProviderIds,
    /// Provider ids of the owning series, for episodes and seasons.
    pub series_provider_ids: ProviderIds,
    pub preferred_metadata_language: Option<String>,
    pub parent_index_number: Option<i32>,
    pub index_number: Option<i32>,
}

impl LibraryItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            provider_ids: ProviderIds::new(),
            series_provider_ids: ProviderIds::new(),
            preferred_metadata_language: None,
            parent_index_number: None,
            index_number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteImageInfo {
    pub url: String,
    pub provider_name: String,
    pub kind: ImageType,
    pub language: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub community_rating: Option<f64>,
    pub vote_count: Option<u32>,
    pub rating_type: RatingType,
}
