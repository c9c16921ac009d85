use serial_test::serial;

use wayfare_api::models::itinerary::{FallbackReason, ItinerarySource};
use wayfare_api::services::gemini_service::GeminiService;

#[actix_rt::test]
async fn missing_key_generates_fallback_itinerary() {
    let service = GeminiService::new(None);

    let generated = service
        .generate_itinerary("Austin", 2, "outdoor, family")
        .await;

    assert_eq!(
        generated.source,
        ItinerarySource::Fallback(FallbackReason::MissingApiKey)
    );
    assert!(generated.itinerary.contains("## Day 1"));
    assert!(generated.itinerary.contains("## Day 2"));
    assert!(generated.itinerary.contains("hiking at Nature Trail Park"));
    assert!(generated.itinerary.contains("with family at Starlight Plaza"));
}

#[actix_rt::test]
async fn missing_key_returns_no_recommendations() {
    let service = GeminiService::new(None);

    let places = service.recommend_places((30.27, -97.74), "food").await;

    assert!(places.is_empty());
}

#[actix_rt::test]
#[serial]
async fn placeholder_key_counts_as_missing() {
    std::env::set_var("GEMINI_API_KEY", "YOUR_GEMINI_API_KEY");

    let service = GeminiService::from_env();
    assert!(!service.has_api_key());

    let generated = service.generate_itinerary("Austin", 1, "food").await;
    assert_eq!(
        generated.source,
        ItinerarySource::Fallback(FallbackReason::MissingApiKey)
    );

    std::env::remove_var("GEMINI_API_KEY");
}

#[actix_rt::test]
#[serial]
async fn empty_key_counts_as_missing() {
    std::env::set_var("GEMINI_API_KEY", "");

    let service = GeminiService::from_env();
    assert!(!service.has_api_key());

    std::env::remove_var("GEMINI_API_KEY");
}
