//! Trek Match - destination matching and trip planning for Nepal trekking
//!
//! This library provides the preference-to-recommendation matcher, the trip
//! planner calculations and the planner UI state transitions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_destinations, Matcher, MatchResult, PlannerState, SortKey};
pub use crate::models::{Destination, Preferences, RecommendationRequest, RecommendationResponse, Trek};
pub use crate::services::{Catalog, CatalogError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert!(!matcher.catalog().destinations().is_empty());
    }
}
