use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Host library item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Movie,
    BoxSet,
    Series,
    Season,
    Episode,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::BoxSet => "box_set",
            Self::Series => "series",
            Self::Season => "season",
            Self::Episode => "episode",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External metadata sources an item can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    Tmdb,
    Tvdb,
    Imdb,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tmdb => "Tmdb",
            Self::Tvdb => "Tvdb",
            Self::Imdb => "Imdb",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a catalog id stored as a provider-id string.
///
/// Returns `None` for blank, non-numeric or non-positive values, which
/// callers treat as "no known id".
pub fn parse_catalog_id(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .and_then(|id| u32::try_from(id).ok())
}

/// Provider-id associations of a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderIds(BTreeMap<ProviderKind, String>);

impl ProviderIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    /// Blank values are not stored.
    pub fn set(&mut self, kind: ProviderKind, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.0.insert(kind, value);
    }

    pub fn with(mut self, kind: ProviderKind, value: impl Into<String>) -> Self {
        self.set(kind, value);
        self
    }

    /// The positive TMDB id, if one is attached and parses.
    pub fn tmdb_id(&self) -> Option<u32> {
        self.get(ProviderKind::Tmdb).and_then(parse_catalog_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProviderKind, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Person role classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Actor,
    GuestStar,
    Director,
    Writer,
    Producer,
    Composer,
    Editor,
    Crew,
}

impl PersonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "Actor",
            Self::GuestStar => "GuestStar",
            Self::Director => "Director",
            Self::Writer => "Writer",
            Self::Producer => "Producer",
            Self::Composer => "Composer",
            Self::Editor => "Editor",
            Self::Crew => "Crew",
        }
    }
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Primary,
    Backdrop,
}

/// How `community_rating` on a remote image should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingType {
    Score,
    Likes,
}
