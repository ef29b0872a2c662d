use serde::{Deserialize, Serialize};
use crate::core::ranking::SortKey;
use crate::models::domain::{Destination, Difficulty};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<Destination>,
    pub total_matches: usize,
    pub total_candidates: usize,
    pub sort_key: SortKey,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub destinations: usize,
    pub treks: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}

/// Packing list for one difficulty tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingListResponse {
    pub difficulty: Difficulty,
    pub items: Vec<String>,
}
