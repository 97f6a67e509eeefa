//! TMDB-backed metadata and image providers for box sets, series and
//! episodes.
//!
//! Every provider funnels its catalog access through a shared
//! [`catalog::CatalogClient`] and only performs selection and
//! normalisation on what the client returns.
pub mod cancel;
pub mod catalog;
pub mod config;
pub mod crew;
pub mod language;
pub mod provider;
pub mod providers;
pub mod tmdb;

use thiserror::Error;

pub use config::ProviderOptions;
pub use provider::{RemoteImageProvider, RemoteMetadataProvider};
pub use providers::{BoxSetProvider, EpisodeImageProvider, EpisodeProvider, SeriesImageProvider};

/// Display name reported on search results and remote images.
pub const PROVIDER_NAME: &str = "TheMovieDb";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("operation cancelled")]
    Cancelled,
    #[error("configuration error: {0}")]
    Config(String),
}

impl MetadataError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
