// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod planner;
pub mod ranking;
pub mod state;

pub use filters::{evaluate, matches_preferences, interest_satisfied, FilterReport};
pub use matcher::{match_destinations, Matcher, MatchResult};
pub use planner::{budget_estimate, compare_routes, packing_list, season_guides, BudgetEstimate, RouteComparison};
pub use ranking::{rank, SortKey};
pub use state::{Action, PlannerState, Section, WizardStep};
