use std::sync::Arc;
use tracing::Level;
use crate::models::{Destination, Preferences};
use crate::services::Catalog;
use crate::core::{
    filters::{evaluate, matches_preferences},
    ranking::{rank, SortKey},
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<&'a Destination>,
    /// Matches before the page limit was applied
    pub total_matches: usize,
    pub total_candidates: usize,
    pub sort_key: SortKey,
}

/// Filter `destinations` down to those satisfying every preference predicate,
/// ordered by the sort key the travel style selects
///
/// Pure: neither input is mutated and identical inputs give identical output.
/// An empty result is a valid answer, not a failure.
pub fn match_destinations<'a>(
    destinations: &'a [Destination],
    preferences: &Preferences,
) -> Vec<&'a Destination> {
    let mut matches: Vec<&Destination> = destinations
        .iter()
        .filter(|destination| {
            let included = matches_preferences(destination, preferences);
            if !included && tracing::enabled!(Level::TRACE) {
                let report = evaluate(destination, preferences);
                tracing::trace!(
                    destination = %destination.name,
                    predicate = report.first_failure().unwrap_or("none"),
                    "destination excluded"
                );
            }
            included
        })
        .collect();

    rank(&mut matches, SortKey::for_style(preferences.travel_style));
    matches
}

/// Recommendation orchestrator over the immutable catalog
///
/// # Pipeline Stages
/// 1. Predicate filtering (activities, nature, duration, group, months, interests)
/// 2. Travel-style ranking
/// 3. Optional truncation to a page limit
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend destinations for a submitted set of preferences
    ///
    /// # Arguments
    /// * `preferences` - The submitted wizard preferences
    /// * `limit` - Maximum number of recommendations to return, if any
    pub fn recommend(&self, preferences: &Preferences, limit: Option<usize>) -> MatchResult<'_> {
        let destinations = self.catalog.destinations();
        let mut matches = match_destinations(destinations, preferences);
        let total_matches = matches.len();

        tracing::debug!(
            "Matched {} of {} destinations",
            total_matches,
            destinations.len()
        );

        if let Some(limit) = limit {
            matches.truncate(limit);
        }

        MatchResult {
            matches,
            total_matches,
            total_candidates: destinations.len(),
            sort_key: SortKey::for_style(preferences.travel_style),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}
