//! Image language preference helpers.

use tmdbfin_core::RemoteImageInfo;

/// Marker TMDB understands as "images without a language tag".
pub const NO_LANGUAGE: &str = "null";

/// Ordered, de-duplicated list of languages to request images in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageLanguages(Vec<String>);

impl ImageLanguages {
    fn push(&mut self, language: &str) {
        let language = language.trim();
        if language.is_empty() || self.0.iter().any(|l| l.eq_ignore_ascii_case(language)) {
            return;
        }
        self.0.push(language.to_string());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma separated form used in `include_image_language`.
    pub fn to_query_value(&self) -> String {
        self.0.join(",")
    }
}

impl std::fmt::Display for ImageLanguages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

/// Requested language first, then language-less images, then the host
/// fallback language.
pub fn build_image_language_param(language: &str, fallback: &str) -> ImageLanguages {
    let mut languages = ImageLanguages::default();
    languages.push(language);
    languages.push(NO_LANGUAGE);
    languages.push(fallback);
    languages
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Report an image tagged with the requested language's primary subtag
/// under the full requested tag ("en" for "en-US" becomes "en-US").
pub fn adjust_image_language(image_language: Option<&str>, requested: &str) -> Option<String> {
    let image_language = image_language.map(str::trim).filter(|l| !l.is_empty())?;
    let requested = requested.trim();

    if !requested.is_empty()
        && primary_subtag(image_language).eq_ignore_ascii_case(primary_subtag(requested))
    {
        return Some(requested.to_string());
    }
    Some(image_language.to_string())
}

fn language_rank(image: &RemoteImageInfo, requested: &str) -> u8 {
    match image.language.as_deref().map(str::trim) {
        Some(lang) if lang.eq_ignore_ascii_case(requested) => 0,
        None | Some("") => 1,
        Some(_) => 2,
    }
}

/// Stable sort: requested language, then untagged, then everything else.
pub fn sort_by_language_descending(
    mut images: Vec<RemoteImageInfo>,
    requested: &str,
) -> Vec<RemoteImageInfo> {
    images.sort_by_key(|image| language_rank(image, requested));
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmdbfin_core::{ImageType, RatingType};

    fn image(url: &str, language: Option<&str>) -> RemoteImageInfo {
        RemoteImageInfo {
            url: url.to_string(),
            provider_name: "TheMovieDb".into(),
            kind: ImageType::Primary,
            language: language.map(str::to_string),
            width: None,
            height: None,
            community_rating: None,
            vote_count: None,
            rating_type: RatingType::Score,
        }
    }

    fn languages(images: &[RemoteImageInfo]) -> Vec<Option<&str>> {
        images.iter().map(|i| i.language.as_deref()).collect()
    }

    #[test]
    fn image_language_param_order() {
        let param = build_image_language_param("de-DE", "en");
        assert_eq!(param.as_slice(), ["de-DE", "null", "en"]);
        assert_eq!(param.to_query_value(), "de-DE,null,en");
    }

    #[test]
    fn image_language_param_dedups_fallback() {
        let param = build_image_language_param("en", "en");
        assert_eq!(param.as_slice(), ["en", "null"]);
    }

    #[test]
    fn image_language_param_without_request() {
        let param = build_image_language_param("", "en");
        assert_eq!(param.as_slice(), ["null", "en"]);
    }

    #[test]
    fn adjust_matches_primary_subtag() {
        assert_eq!(
            adjust_image_language(Some("en"), "en-US").as_deref(),
            Some("en-US")
        );
        assert_eq!(adjust_image_language(Some("fr"), "en-US").as_deref(), Some("fr"));
        assert_eq!(adjust_image_language(None, "en-US"), None);
        assert_eq!(adjust_image_language(Some(""), "en-US"), None);
        assert_eq!(adjust_image_language(Some("pt"), "").as_deref(), Some("pt"));
    }

    #[test]
    fn sort_puts_requested_then_untagged_then_rest() {
        let sorted = sort_by_language_descending(
            vec![
                image("a", Some("fr")),
                image("b", Some("en")),
                image("c", None),
            ],
            "en",
        );
        assert_eq!(languages(&sorted), [Some("en"), None, Some("fr")]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let input = vec![
            image("1", Some("de")),
            image("2", None),
            image("3", Some("en-US")),
            image("4", Some("fr")),
            image("5", Some("en-US")),
            image("6", None),
        ];
        let once = sort_by_language_descending(input, "en-US");
        let urls: Vec<_> = once.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["3", "5", "2", "6", "1", "4"]);

        let twice = sort_by_language_descending(once.clone(), "en-US");
        assert_eq!(once, twice);
    }
}
