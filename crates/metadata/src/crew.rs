//! Crew classification.

use tmdbfin_core::PersonKind;

/// Job titles with a dedicated person kind.
const JOB_KINDS: &[(&str, PersonKind)] = &[
    ("Director", PersonKind::Director),
    ("Writer", PersonKind::Writer),
    ("Screenplay", PersonKind::Writer),
    ("Teleplay", PersonKind::Writer),
    ("Story", PersonKind::Writer),
    ("Novel", PersonKind::Writer),
    ("Producer", PersonKind::Producer),
    ("Executive Producer", PersonKind::Producer),
    ("Co-Producer", PersonKind::Producer),
    ("Composer", PersonKind::Composer),
    ("Original Music Composer", PersonKind::Composer),
    ("Music", PersonKind::Composer),
    ("Editor", PersonKind::Editor),
];

/// Departments consulted when the job itself is not listed.
const DEPARTMENT_KINDS: &[(&str, PersonKind)] = &[
    ("Writing", PersonKind::Writer),
    ("Editing", PersonKind::Editor),
];

fn lookup(table: &[(&str, PersonKind)], key: Option<&str>) -> Option<PersonKind> {
    let key = key?.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, kind)| *kind)
}

/// Map a crew credit to a person kind; unknown roles become `Crew`.
pub fn classify_crew(job: Option<&str>, department: Option<&str>) -> PersonKind {
    lookup(JOB_KINDS, job)
        .or_else(|| lookup(DEPARTMENT_KINDS, department))
        .unwrap_or(PersonKind::Crew)
}

/// A crew credit is kept when either its kind or its raw job appears in
/// `wanted` (case-insensitive).
pub fn is_wanted_crew(kind: PersonKind, job: Option<&str>, wanted: &[String]) -> bool {
    let job = job.map(str::trim).unwrap_or_default();
    wanted.iter().any(|role| {
        role.eq_ignore_ascii_case(kind.as_str())
            || (!job.is_empty() && role.eq_ignore_ascii_case(job))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_wanted() -> Vec<String> {
        vec!["Director".into(), "Writer".into(), "Producer".into()]
    }

    #[test]
    fn director_job_maps_to_director() {
        let kind = classify_crew(Some("Director"), Some("Directing"));
        assert_eq!(kind, PersonKind::Director);
        assert!(is_wanted_crew(kind, Some("Director"), &default_wanted()));
    }

    #[test]
    fn job_lookup_is_case_insensitive() {
        assert_eq!(
            classify_crew(Some("executive producer"), Some("Production")),
            PersonKind::Producer
        );
    }

    #[test]
    fn department_is_used_when_job_unknown() {
        assert_eq!(
            classify_crew(Some("Story Editor"), Some("Writing")),
            PersonKind::Writer
        );
    }

    #[test]
    fn unknown_roles_fall_back_to_crew() {
        let kind = classify_crew(Some("Gaffer"), Some("Lighting"));
        assert_eq!(kind, PersonKind::Crew);
        assert!(!is_wanted_crew(kind, Some("Gaffer"), &default_wanted()));
        assert_eq!(classify_crew(None, None), PersonKind::Crew);
    }

    #[test]
    fn raw_job_can_be_wanted() {
        let wanted = vec!["Gaffer".to_string()];
        assert!(is_wanted_crew(PersonKind::Crew, Some("gaffer"), &wanted));
        assert!(!is_wanted_crew(PersonKind::Crew, None, &wanted));
    }
}
