use actix_web::{web, HttpResponse, Responder};

use crate::models::recommendation::PlaceQuery;
use crate::services::gemini_service::GeminiService;

/*
    /api/recommendations
*/
pub async fn recommend(
    gemini: web::Data<GeminiService>,
    input: web::Json<PlaceQuery>,
) -> impl Responder {
    let query = input.into_inner();

    if !query.latitude.is_finite() || !query.longitude.is_finite() {
        return HttpResponse::BadRequest().body("Invalid coordinates");
    }

    let places = gemini
        .recommend_places((query.latitude, query.longitude), &query.preferences)
        .await;

    HttpResponse::Ok().json(places)
}
