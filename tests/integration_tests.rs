// Integration tests for Trek Match

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use trek_match::config::RecommendationSettings;
use trek_match::core::{PlannerState, Section, SortKey, WizardStep};
use trek_match::routes::{configure_routes, AppState};
use trek_match::{Catalog, Matcher, RecommendationResponse};

fn create_state() -> AppState {
    AppState {
        matcher: Matcher::with_builtin_catalog(),
        recommendations: RecommendationSettings::default(),
    }
}

fn recommendation_body(group_type: &str, travel_style: &str) -> Value {
    json!({
        "activities": ["trekking", "sightseeing"],
        "naturePreferences": ["mountains", "lakes", "forests"],
        "duration": 7,
        "groupType": group_type,
        "preferredMonths": ["October"],
        "interests": [],
        "travelStyle": travel_style
    })
}

#[actix_web::test]
async fn test_health_reports_catalog_size() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["destinations"], Catalog::builtin().destinations().len());
}

#[actix_web::test]
async fn test_recommendations_end_to_end() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(recommendation_body("couple", "eco-friendly"))
        .to_request();
    let response: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.sort_key, SortKey::EcoScore);
    assert!(response.recommendations.len() >= 3, "got {}", response.recommendations.len());
    for pair in response.recommendations.windows(2) {
        assert!(pair[0].eco_score >= pair[1].eco_score);
    }
    // Rara Lake carries the highest eco score among the matches
    assert_eq!(response.recommendations[0].name, "Rara Lake");
}

#[actix_web::test]
async fn test_recommendations_respect_limit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = recommendation_body("couple", "luxury");
    body["limit"] = json!(1);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(body)
        .to_request();
    let response: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.sort_key, SortKey::Rating);
    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].name, "Annapurna Base Camp");
    assert!(response.total_matches >= 3, "got {}", response.total_matches);
}

#[actix_web::test]
async fn test_family_excludes_adult_only_destinations() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(recommendation_body("family", "budget"))
        .to_request();
    let response: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert!(response
        .recommendations
        .iter()
        .all(|d| d.children_friendly && d.group_friendly));
}

#[actix_web::test]
async fn test_empty_activities_is_valid_and_empty() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = recommendation_body("solo", "budget");
    body["activities"] = json!([]);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(body)
        .to_request();
    let response: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert!(response.recommendations.is_empty());
    assert_eq!(response.total_matches, 0);
}

#[actix_web::test]
async fn test_invalid_duration_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let mut body = recommendation_body("solo", "budget");
    body["duration"] = json!(0);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_planner_endpoints() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/planner/budget/Challenging").to_request();
    let budget: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(budget["total"], 2000);

    let req = test::TestRequest::get().uri("/api/v1/planner/packing/easy").to_request();
    let packing: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(packing["difficulty"], "Easy");
    assert!(!packing["items"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/v1/planner/seasons").to_request();
    let seasons: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(seasons.as_array().unwrap().len(), 4);

    let req = test::TestRequest::get().uri("/api/v1/planner/compare").to_request();
    let comparison: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(comparison["hidden"]["crowds"], "Low");
    assert_eq!(comparison["popular"]["crowds"], "High");

    let req = test::TestRequest::get().uri("/api/v1/planner/budget/Extreme").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_state_transitions_round_trip_through_api() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/planner/state")
        .set_json(json!({
            "state": { "mobileMenuOpen": true },
            "action": { "type": "navigate", "payload": "community" }
        }))
        .to_request();
    let state: PlannerState = test::call_and_read_body_json(&app, req).await;
    assert_eq!(state.active_section, Section::Community);
    assert!(!state.mobile_menu_open);

    let req = test::TestRequest::post()
        .uri("/api/v1/planner/state")
        .set_json(json!({
            "state": state,
            "action": {
                "type": "submitPreferences",
                "payload": recommendation_body("couple", "luxury")
            }
        }))
        .to_request();
    let state: PlannerState = test::call_and_read_body_json(&app, req).await;
    match &state.wizard {
        WizardStep::Results { recommendations, .. } => {
            assert_eq!(recommendations.first().map(String::as_str), Some("Annapurna Base Camp"));
        }
        WizardStep::Selecting => panic!("expected results step"),
    }
}

#[tokio::test]
async fn test_load_sample_catalog_file() {
    let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.toml"))
        .await
        .expect("sample catalog loads");

    assert_eq!(catalog.destinations().len(), 3);
    assert_eq!(catalog.treks(), Catalog::builtin().treks());

    let matcher = Matcher::new(Arc::new(catalog));
    assert!(matcher.catalog().destinations().iter().any(|d| d.name == "Bandipur"));
}
