use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use super::models::SuggestionCandidate;

/// Keep one candidate per start instant and return the earliest `max`
///
/// Within a start instant the lowest priority wins, in-person before
/// virtual; ties keep generation order. The result is ordered by start.
pub fn rank_candidates(candidates: Vec<SuggestionCandidate>, max: usize) -> Vec<SuggestionCandidate> {
    let mut by_start: BTreeMap<NaiveDateTime, Vec<SuggestionCandidate>> = BTreeMap::new();
    for candidate in candidates {
        by_start.entry(candidate.start()).or_default().push(candidate);
    }

    let mut ranked: Vec<SuggestionCandidate> = by_start
        .into_values()
        .filter_map(|mut group| {
            group.sort_by_key(|c| (c.priority, c.meeting_kind.rank()));
            group.into_iter().next()
        })
        .collect();

    ranked.sort_by_key(|c| (c.start(), c.meeting_kind.rank()));
    ranked.truncate(max);
    ranked
}
