//! Roster reconciliation and filtering
//!
//! The record store may serve several rows for the same real-world
//! artist (re-imports, partial edits). The roster collapses them to one
//! record per name before anything else looks at the list, and the
//! filter predicate drives both the Explore directory and its search box.
//!
//! Both functions are pure; all state lives with the caller.

use sm_common::model::ArtistRecord;

/// Sentinel value meaning "facet disabled" for genre and tier filters
pub const FILTER_ALL: &str = "all";

/// Directory filter state
///
/// `tags` is conjunctive: a record must carry every listed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub genre: String,
    pub tier: String,
    pub tags: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            genre: FILTER_ALL.to_string(),
            tier: FILTER_ALL.to_string(),
            tags: Vec::new(),
        }
    }
}

/// Collapse a raw record list to one record per distinct name
///
/// First-seen order is preserved. When two records share a name, the one
/// with the strictly greater populated-field count wins; a richer
/// latecomer replaces the earlier record in place (position unchanged),
/// anything else is discarded. Ties keep the existing record.
pub fn dedupe_by_name(records: Vec<ArtistRecord>) -> Vec<ArtistRecord> {
    let mut unique: Vec<ArtistRecord> = Vec::with_capacity(records.len());
    for incoming in records {
        match unique.iter_mut().find(|r| r.name == incoming.name) {
            None => unique.push(incoming),
            Some(existing) => {
                if incoming.populated_field_count() > existing.populated_field_count() {
                    *existing = incoming;
                }
            }
        }
    }
    unique
}

/// Decide whether a record passes the current filters and search term
///
/// The result is the AND of four sub-predicates:
/// - text: term empty, or case-insensitive substring of name or location
/// - genre: sentinel, or equals `primary_genre`, or listed in `genres`
/// - tier: sentinel, or equals the record tier exactly
/// - tags: filter set empty, or a subset of the record's tags (exact,
///   case-sensitive)
///
/// Absent optional fields simply fail their sub-predicate.
pub fn matches_filters(record: &ArtistRecord, filters: &FilterState, search_term: &str) -> bool {
    let term = search_term.to_lowercase();
    let matches_search = term.is_empty()
        || record.name.to_lowercase().contains(&term)
        || record
            .location
            .as_deref()
            .is_some_and(|loc| loc.to_lowercase().contains(&term));

    let matches_genre = filters.genre == FILTER_ALL
        || record.primary_genre.as_deref() == Some(filters.genre.as_str())
        || record.genres.iter().any(|g| *g == filters.genre);

    let matches_tier = filters.tier == FILTER_ALL
        || record
            .tier
            .is_some_and(|tier| tier.as_str() == filters.tier);

    let matches_tags = filters.tags.is_empty()
        || filters
            .tags
            .iter()
            .all(|tag| record.tags.iter().any(|t| t == tag));

    matches_search && matches_genre && matches_tier && matches_tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_common::model::Tier;

    fn record(id: &str, name: &str) -> ArtistRecord {
        ArtistRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: None,
            tier: None,
            primary_genre: None,
            genres: vec![],
            tags: vec![],
            contact: None,
            portfolio_links: vec![],
            nvak_artist: false,
        }
    }

    /// Record with a controllable populated-field count: id + name are
    /// always populated, `extra` adds up to three more.
    fn record_with_fields(id: &str, name: &str, extra: usize) -> ArtistRecord {
        let mut r = record(id, name);
        if extra >= 1 {
            r.location = Some("Los Angeles".to_string());
        }
        if extra >= 2 {
            r.tier = Some(Tier::B);
        }
        if extra >= 3 {
            r.primary_genre = Some("POP/CONTEMPORARY POP".to_string());
        }
        r
    }

    #[test]
    fn test_dedupe_distinct_names_pass_through() {
        let result = dedupe_by_name(vec![record("1", "Ava"), record("2", "Ben")]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Ava");
        assert_eq!(result[1].name, "Ben");
    }

    #[test]
    fn test_dedupe_richer_latecomer_replaces_in_place() {
        // [A(X, 2 extra), B(Y, 1 extra), C(X, 3 extra)] -> [C, B]
        let a = record_with_fields("a", "X", 2);
        let b = record_with_fields("b", "Y", 1);
        let c = record_with_fields("c", "X", 3);

        let result = dedupe_by_name(vec![a, b, c]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "c"); // replaced A at position 0
        assert_eq!(result[1].id, "b");
    }

    #[test]
    fn test_dedupe_poorer_latecomer_discarded() {
        let rich = record_with_fields("a", "X", 3);
        let poor = record_with_fields("b", "X", 1);

        let result = dedupe_by_name(vec![rich, poor]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_dedupe_tie_keeps_earlier_record() {
        let first = record_with_fields("a", "X", 2);
        let second = record_with_fields("d", "X", 2);

        let result = dedupe_by_name(vec![first, second]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let input = vec![
            record_with_fields("a", "X", 2),
            record_with_fields("b", "Y", 1),
            record_with_fields("c", "X", 3),
        ];
        let once = dedupe_by_name(input);
        let twice = dedupe_by_name(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_open_filters_match_everything() {
        let filters = FilterState::default();
        assert!(matches_filters(&record("1", "Ava"), &filters, ""));
        assert!(matches_filters(
            &record_with_fields("2", "Ben", 3),
            &filters,
            ""
        ));
    }

    #[test]
    fn test_search_matches_name_and_location() {
        let filters = FilterState::default();
        let mut r = record("1", "Ava Stone");
        r.location = Some("Nashville".to_string());

        assert!(matches_filters(&r, &filters, "stone"));
        assert!(matches_filters(&r, &filters, "NASH"));
        assert!(!matches_filters(&r, &filters, "berlin"));
    }

    #[test]
    fn test_search_with_no_location_does_not_panic() {
        let filters = FilterState::default();
        let r = record("1", "Ava");
        assert!(!matches_filters(&r, &filters, "nashville"));
    }

    #[test]
    fn test_genre_matches_primary_or_list() {
        let mut filters = FilterState::default();
        filters.genre = "R&B/SOUL".to_string();

        let mut primary = record("1", "Ava");
        primary.primary_genre = Some("R&B/SOUL".to_string());
        assert!(matches_filters(&primary, &filters, ""));

        let mut listed = record("2", "Ben");
        listed.genres = vec!["ROCK".to_string(), "R&B/SOUL".to_string()];
        assert!(matches_filters(&listed, &filters, ""));

        assert!(!matches_filters(&record("3", "Cy"), &filters, ""));
    }

    #[test]
    fn test_tier_filter_exact_match() {
        let mut filters = FilterState::default();
        filters.tier = "A".to_string();

        let mut a = record("1", "Ava");
        a.tier = Some(Tier::A);
        assert!(matches_filters(&a, &filters, ""));

        let mut b = record("2", "Ben");
        b.tier = Some(Tier::B);
        assert!(!matches_filters(&b, &filters, ""));

        // No tier at all fails the sub-predicate
        assert!(!matches_filters(&record("3", "Cy"), &filters, ""));
    }

    #[test]
    fn test_tags_filter_is_conjunctive() {
        let mut filters = FilterState::default();
        filters.tags = vec!["Producer".to_string(), "Mixing Engineer".to_string()];

        let mut both = record("1", "Ava");
        both.tags = vec![
            "Producer".to_string(),
            "Mixing Engineer".to_string(),
            "Songwriter".to_string(),
        ];
        assert!(matches_filters(&both, &filters, ""));

        let mut only_one = record("2", "Ben");
        only_one.tags = vec!["Producer".to_string()];
        assert!(!matches_filters(&only_one, &filters, ""));
    }

    #[test]
    fn test_all_predicates_combine_with_and() {
        let mut filters = FilterState::default();
        filters.tier = "B".to_string();

        let mut r = record("1", "Ava");
        r.tier = Some(Tier::B);
        r.location = Some("Berlin".to_string());

        assert!(matches_filters(&r, &filters, "berlin"));
        assert!(!matches_filters(&r, &filters, "london"));
    }
}
