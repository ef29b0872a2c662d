use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, RecommendationRequest, RecommendationResponse};
use super::AppState;

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(list_destinations))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.matcher.catalog();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        destinations: catalog.destinations().len(),
        treks: catalog.treks().len(),
    })
}

/// All destinations in dataset order
///
/// GET /api/v1/destinations
async fn list_destinations(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.catalog().destinations())
}

/// Recommendation endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "activities": ["trekking"],
///   "naturePreferences": ["mountains"],
///   "duration": 7,
///   "groupType": "solo|couple|family|group",
///   "preferredMonths": ["October"],
///   "interests": ["Photography"],
///   "travelStyle": "eco-friendly|budget|luxury",
///   "limit": 20
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let (preferences, limit) = req.into_inner().into_parts();
    let limit = state.recommendations.effective_limit(limit);

    tracing::debug!(
        "Recommending for activities={:?}, duration={}, group={:?}, style={:?}",
        preferences.activities,
        preferences.duration,
        preferences.group_type,
        preferences.travel_style
    );

    let result = state.matcher.recommend(&preferences, Some(limit));

    tracing::info!(
        "Returning {} of {} matches (from {} destinations, sorted by {:?})",
        result.matches.len(),
        result.total_matches,
        result.total_candidates,
        result.sort_key
    );

    HttpResponse::Ok().json(RecommendationResponse {
        recommendations: result.matches.into_iter().cloned().collect(),
        total_matches: result.total_matches,
        total_candidates: result.total_candidates,
        sort_key: result.sort_key,
    })
}
