use clap::{Args, Subcommand};
use tmdbfin_core::{ItemKind, LibraryItem, ProviderIds, ProviderKind, SearchQuery};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a box set (TMDB collection).
    BoxSet {
        #[command(subcommand)]
        action: BoxSetAction,
    },
    /// Look up a single episode of a series.
    Episode {
        #[command(subcommand)]
        action: EpisodeAction,
    },
    /// List posters and backdrops of a series.
    SeriesImages(SeriesImagesArgs),
    /// List stills of an episode.
    EpisodeImages(EpisodeArgs),
}

#[derive(Debug, Subcommand)]
pub enum BoxSetAction {
    Search(BoxSetArgs),
    Fetch(BoxSetArgs),
}

#[derive(Debug, Subcommand)]
pub enum EpisodeAction {
    Search(EpisodeArgs),
    Fetch(EpisodeArgs),
}

#[derive(Debug, Args)]
pub struct BoxSetArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// TMDB collection id.
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Debug, Args)]
pub struct EpisodeArgs {
    /// TMDB id of the series.
    #[arg(long)]
    pub series_id: String,
    #[arg(long)]
    pub season: Option<i32>,
    #[arg(long)]
    pub episode: Option<i32>,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Debug, Args)]
pub struct SeriesImagesArgs {
    #[arg(long)]
    pub series_id: String,
    #[arg(long)]
    pub language: Option<String>,
}

impl BoxSetArgs {
    pub fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::named(self.name.clone());
        if let Some(id) = &self.id {
            query.provider_ids.set(ProviderKind::Tmdb, id.clone());
        }
        query.metadata_language = self.language.clone();
        query
    }
}

impl EpisodeArgs {
    fn series_ids(&self) -> ProviderIds {
        ProviderIds::new().with(ProviderKind::Tmdb, self.series_id.clone())
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            name: self.name.clone(),
            series_provider_ids: self.series_ids(),
            metadata_language: self.language.clone(),
            parent_index_number: self.season,
            index_number: self.episode,
            ..Default::default()
        }
    }

    pub fn to_item(&self) -> LibraryItem {
        let mut item = LibraryItem::new(ItemKind::Episode, self.name.clone());
        item.series_provider_ids = self.series_ids();
        item.preferred_metadata_language = self.language.clone();
        item.parent_index_number = self.season;
        item.index_number = self.episode;
        item
    }
}

impl SeriesImagesArgs {
    pub fn to_item(&self) -> LibraryItem {
        let mut item = LibraryItem::new(ItemKind::Series, "");
        item.provider_ids.set(ProviderKind::Tmdb, self.series_id.clone());
        item.preferred_metadata_language = self.language.clone();
        item
    }
}
