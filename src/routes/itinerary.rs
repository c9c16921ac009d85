use actix_web::{web, HttpResponse, Responder};

use crate::models::itinerary::ItineraryRequest;
use crate::services::gemini_service::GeminiService;

const MAX_TRIP_DAYS: u32 = 14;

/*
    /api/itineraries/generate
*/
pub async fn generate(
    gemini: web::Data<GeminiService>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();

    // Mirror of the form-side bounds; the service assumes validated input.
    if request.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("Destination is required");
    }

    if request.days < 1 || request.days > MAX_TRIP_DAYS {
        return HttpResponse::BadRequest().body("Days must be between 1 and 14");
    }

    let generated = gemini
        .generate_itinerary(&request.destination, request.days, &request.preferences)
        .await;

    HttpResponse::Ok().json(generated)
}
