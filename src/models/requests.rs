use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::state::{Action, PlannerState};
use crate::models::domain::{GroupType, Month, Preferences, TravelStyle};

/// Request to compute destination recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub nature_preferences: Vec<String>,
    #[validate(range(min = 1, max = 365))]
    pub duration: u32,
    pub group_type: GroupType,
    #[serde(default)]
    pub preferred_months: Vec<Month>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub travel_style: TravelStyle,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    /// Split the request into the submitted preferences and the page limit
    pub fn into_parts(self) -> (Preferences, Option<usize>) {
        let preferences = Preferences {
            activities: self.activities,
            nature_preferences: self.nature_preferences,
            duration: self.duration,
            group_type: self.group_type,
            preferred_months: self.preferred_months,
            interests: self.interests,
            travel_style: self.travel_style,
        };
        (preferences, self.limit)
    }
}

/// Request to advance caller-owned planner UI state by one action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransitionRequest {
    #[serde(default)]
    pub state: PlannerState,
    pub action: Action,
}
