// Route exports
pub mod planner;
pub mod recommendations;

use actix_web::web;
use crate::config::RecommendationSettings;
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub recommendations: RecommendationSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure)
            .configure(planner::configure),
    );
}
