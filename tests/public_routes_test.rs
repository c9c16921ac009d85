mod common;

use actix_web::{test, web, App};
use serde_json::json;

use common::offline_gemini;
use wayfare_api::routes;

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new().route("/health", web::get().to(|| async { "OK" })),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
async fn test_generate_rejects_empty_destination() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(offline_gemini()))
            .route("/itineraries/generate", web::post().to(routes::itinerary::generate)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/itineraries/generate")
        .set_json(&json!({
            "destination": "   ",
            "days": 3,
            "preferences": "food"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_generate_rejects_out_of_range_days() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(offline_gemini()))
            .route("/itineraries/generate", web::post().to(routes::itinerary::generate)),
    )
    .await;

    for days in [0, 15] {
        let req = test::TestRequest::post()
            .uri("/itineraries/generate")
            .set_json(&json!({
                "destination": "Austin",
                "days": days,
                "preferences": ""
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}

#[actix_rt::test]
async fn test_generate_without_key_serves_fallback() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(offline_gemini()))
            .route("/itineraries/generate", web::post().to(routes::itinerary::generate)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/itineraries/generate")
        .set_json(&json!({
            "destination": "Austin",
            "days": 2,
            "preferences": "outdoor, family"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let itinerary = body["itinerary"].as_str().expect("itinerary text missing");
    assert!(itinerary.contains("## Day 1"));
    assert!(itinerary.contains("## Day 2"));
    assert!(itinerary.contains("hiking at Nature Trail Park"));
    assert_eq!(body["source"]["fallback"], "missing_api_key");
}

#[actix_rt::test]
async fn test_recommendations_degrade_to_empty_list() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(offline_gemini()))
            .route("/recommendations", web::post().to(routes::recommendation::recommend)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/recommendations")
        .set_json(&json!({
            "latitude": 30.27,
            "longitude": -97.74,
            "preferences": "food"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.is_array());
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_recommendations_allow_missing_preferences() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(offline_gemini()))
            .route("/recommendations", web::post().to(routes::recommendation::recommend)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/recommendations")
        .set_json(&json!({
            "latitude": 30.27,
            "longitude": -97.74
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
