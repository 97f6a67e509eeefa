use std::sync::Arc;

use chrono::Datelike;
use tmdbfin_core::{
    Episode, MetadataResult, PersonInfo, PersonKind, ProviderKind, SearchQuery, SearchResult,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::catalog::{CastCredit, CatalogClient, Credits, EpisodeDetail, Video};
use crate::crew::{classify_crew, is_wanted_crew};
use crate::language::build_image_language_param;
use crate::provider::RemoteMetadataProvider;
use crate::{MetadataError, PROVIDER_NAME, ProviderOptions};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub struct EpisodeProvider {
    client: Arc<dyn CatalogClient>,
    options: ProviderOptions,
}

impl EpisodeProvider {
    pub fn new(client: Arc<dyn CatalogClient>, options: ProviderOptions) -> Self {
        Self { client, options }
    }
}

fn is_trailer(video: &Video) -> bool {
    video.kind.eq_ignore_ascii_case("trailer") && video.site.eq_ignore_ascii_case("youtube")
}

fn trailer_urls(detail: &EpisodeDetail) -> Vec<String> {
    detail
        .videos
        .iter()
        .flat_map(|videos| videos.results.iter())
        .filter(|video| is_trailer(video) && !video.key.trim().is_empty())
        .map(|video| format!("{YOUTUBE_WATCH_URL}{}", video.key.trim()))
        .collect()
}

/// Top-billed credits, ordered by billing order.
fn billed(cast: &[CastCredit], max: usize, kind: PersonKind) -> impl Iterator<Item = PersonInfo> {
    let mut cast: Vec<&CastCredit> = cast.iter().collect();
    cast.sort_by_key(|c| c.order);
    cast.into_iter().take(max).map(move |c| PersonInfo {
        name: c.name.trim().to_string(),
        role: c.character.clone(),
        kind,
        sort_order: Some(c.order),
    })
}

/// Cast, then guest stars, then wanted crew in catalog order.
pub(crate) fn map_people(credits: &Credits, options: &ProviderOptions) -> Vec<PersonInfo> {
    let mut people: Vec<PersonInfo> =
        billed(&credits.cast, options.max_cast_members, PersonKind::Actor).collect();
    people.extend(billed(
        &credits.guest_stars,
        options.max_cast_members,
        PersonKind::GuestStar,
    ));

    for person in &credits.crew {
        let kind = classify_crew(person.job.as_deref(), person.department.as_deref());
        if !is_wanted_crew(kind, person.job.as_deref(), &options.wanted_crew_roles) {
            continue;
        }
        people.push(PersonInfo {
            name: person.name.trim().to_string(),
            role: person.job.clone(),
            kind,
            sort_order: None,
        });
    }

    people
}

#[async_trait::async_trait]
impl RemoteMetadataProvider for EpisodeProvider {
    type Item = Episode;

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        if query.index_number.is_none() || query.parent_index_number.is_none() {
            debug!(name = %query.name, "episode search without season/episode number");
            return Ok(Vec::new());
        }

        let result = self.fetch(query, cancel).await?;
        let Some(item) = result.into_item() else {
            return Ok(Vec::new());
        };

        Ok(vec![SearchResult {
            name: item.name,
            search_provider_name: PROVIDER_NAME.to_string(),
            image_url: None,
            index_number: item.index_number,
            index_number_end: item.index_number_end,
            parent_index_number: item.parent_index_number,
            premiere_date: item.premiere_date,
            production_year: item.production_year,
            provider_ids: item.provider_ids,
        }])
    }

    async fn fetch(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<Episode>, MetadataError> {
        // Placeholder episodes would cost a catalog round trip each.
        if query.is_missing_episode {
            debug!(name = %query.name, "skipping missing episode placeholder");
            return Ok(MetadataResult::empty());
        }

        let Some(series_id) = query.series_provider_ids.tmdb_id() else {
            debug!(name = %query.name, "episode lookup without series TMDB id");
            return Ok(MetadataResult::empty());
        };

        let (Some(season), Some(episode)) = (query.parent_index_number, query.index_number) else {
            debug!(series_id, "episode lookup without season/episode number");
            return Ok(MetadataResult::empty());
        };

        let language = self.options.language_for(query.metadata_language.as_deref());
        let image_languages =
            build_image_language_param(&language, &self.options.fallback_image_language);

        let Some(detail) = self
            .client
            .get_episode(series_id, season, episode, &language, &image_languages, cancel)
            .await?
        else {
            debug!(series_id, season, episode, language = %language, "episode not found");
            return Ok(MetadataResult::empty());
        };

        let mut item = Episode {
            name: query.name.clone(),
            index_number: query.index_number,
            index_number_end: query.index_number_end,
            parent_index_number: query.parent_index_number,
            ..Default::default()
        };

        if let Some(ids) = &detail.external_ids {
            if let Some(tvdb_id) = ids.tvdb_id.filter(|id| *id > 0) {
                item.provider_ids.set(ProviderKind::Tvdb, tvdb_id.to_string());
            }
            if let Some(imdb_id) = ids.imdb_id.as_deref() {
                item.provider_ids.set(ProviderKind::Imdb, imdb_id);
            }
        }

        item.premiere_date = detail.air_date;
        item.production_year = detail.air_date.map(|date| date.year());
        item.name = detail.name.clone();
        item.overview = detail.overview.clone();
        item.community_rating = Some(detail.vote_average as f32);
        item.trailer_urls = trailer_urls(&detail);

        let mut result = MetadataResult::found(item);
        result.queried_by_id = true;

        // A localized overview is the only signal that the language was honoured.
        if detail.overview.as_deref().is_some_and(|o| !o.is_empty()) {
            result.result_language = Some(language);
        }

        if let Some(credits) = &detail.credits {
            for person in map_people(credits, &self.options) {
                result.add_person(person);
            }
        }

        Ok(result)
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, MetadataError> {
        self.client.fetch_image(url, cancel).await
    }
}
