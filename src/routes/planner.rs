use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use crate::core::planner::{budget_estimate, compare_routes, packing_list, season_guides};
use crate::models::{Difficulty, PackingListResponse, StateTransitionRequest};
use super::AppState;

#[derive(Debug, Deserialize)]
struct DifficultyPath {
    difficulty: Difficulty,
}

/// Configure trip planner routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/treks", web::get().to(list_treks))
        .route("/planner/budget/{difficulty}", web::get().to(budget))
        .route("/planner/packing/{difficulty}", web::get().to(packing))
        .route("/planner/seasons", web::get().to(seasons))
        .route("/planner/compare", web::get().to(compare))
        .route("/planner/state", web::post().to(transition));
}

async fn list_treks(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.catalog().treks())
}

/// GET /api/v1/planner/budget/{difficulty}
async fn budget(path: web::Path<DifficultyPath>) -> impl Responder {
    HttpResponse::Ok().json(budget_estimate(path.difficulty))
}

/// GET /api/v1/planner/packing/{difficulty}
async fn packing(path: web::Path<DifficultyPath>) -> impl Responder {
    let difficulty = path.difficulty;
    HttpResponse::Ok().json(PackingListResponse {
        difficulty,
        items: packing_list(difficulty).iter().map(|item| item.to_string()).collect(),
    })
}

async fn seasons() -> impl Responder {
    HttpResponse::Ok().json(season_guides())
}

/// Popular routes vs hidden gems over the trek catalog
///
/// GET /api/v1/planner/compare
async fn compare(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(compare_routes(state.matcher.catalog().treks()))
}

/// Apply one UI action to caller-owned planner state
///
/// POST /api/v1/planner/state
///
/// Request body:
/// ```json
/// {
///   "state": { "activeSection": "hero", "favorites": [] },
///   "action": { "type": "toggleFavorite", "payload": "mardi-himal" }
/// }
/// ```
async fn transition(
    state: web::Data<AppState>,
    req: web::Json<StateTransitionRequest>,
) -> impl Responder {
    let StateTransitionRequest { state: current, action } = req.into_inner();
    tracing::debug!("Applying planner action: {:?}", action);

    let next = current.apply(action, state.matcher.catalog().destinations());
    HttpResponse::Ok().json(next)
}
