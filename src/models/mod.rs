// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BestMonth, CrowdLevel, Destination, Difficulty, DurationRange, GroupType, Month, Preferences, TravelStyle, Trek};
pub use requests::{RecommendationRequest, StateTransitionRequest};
pub use responses::{ErrorResponse, HealthResponse, PackingListResponse, RecommendationResponse};
