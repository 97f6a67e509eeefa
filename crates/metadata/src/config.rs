/// Host-level knobs shared by every provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOptions {
    /// Used when a request carries no metadata language.
    pub default_language: String,
    /// Appended to every image language list.
    pub fallback_image_language: String,
    /// Cap applied separately to cast and guest stars.
    pub max_cast_members: usize,
    /// Crew kinds or job titles kept in metadata results.
    pub wanted_crew_roles: Vec<String>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            default_language: "en-US".to_string(),
            fallback_image_language: "en".to_string(),
            max_cast_members: 15,
            wanted_crew_roles: vec![
                "Director".to_string(),
                "Writer".to_string(),
                "Producer".to_string(),
            ],
        }
    }
}

impl ProviderOptions {
    /// Defaults overridden by `TMDBFIN_LANGUAGE`,
    /// `TMDBFIN_IMAGE_FALLBACK_LANGUAGE`, `TMDBFIN_MAX_CAST` and
    /// `TMDBFIN_CREW_ROLES`.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Some(language) = env_value("TMDBFIN_LANGUAGE") {
            options.default_language = language;
        }
        if let Some(language) = env_value("TMDBFIN_IMAGE_FALLBACK_LANGUAGE") {
            options.fallback_image_language = language;
        }
        if let Some(max) = env_value("TMDBFIN_MAX_CAST").and_then(|v| v.parse().ok()) {
            options.max_cast_members = max;
        }
        if let Some(roles) = env_value("TMDBFIN_CREW_ROLES") {
            let roles = split_list(&roles);
            if !roles.is_empty() {
                options.wanted_crew_roles = roles;
            }
        }

        options
    }

    /// The requested language, or the host default when it is blank.
    pub fn language_for(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_language.as_str())
            .to_string()
    }
}

/// Trimmed, non-empty environment variable.
pub(crate) fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
