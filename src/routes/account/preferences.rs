use actix_web::{web, HttpResponse, Responder};
use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use mongodb::Client;
use std::sync::Arc;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::account::TravelerPreferences;

/*
    /api/account/{id}/preferences
*/
pub async fn get_preferences(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    if path.into_inner() != user.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let user_id = match ObjectId::parse_str(&user.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let client = data.into_inner();
    let collection: mongodb::Collection<TravelerPreferences> =
        client.database("Travelers").collection("Preferences");

    match collection.find_one(doc! { "user_id": user_id }).await {
        Ok(Some(prefs)) => HttpResponse::Ok().json(prefs),
        Ok(None) => HttpResponse::NotFound().body("No preferences saved"),
        Err(err) => {
            eprintln!("Failed to fetch preferences: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch preferences")
        }
    }
}

pub async fn update_preferences(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Document>,
) -> impl Responder {
    if path.into_inner() != user.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let user_id = match ObjectId::parse_str(&user.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let client = data.into_inner();
    let collection: mongodb::Collection<TravelerPreferences> =
        client.database("Travelers").collection("Preferences");

    let filter = doc! { "user_id": user_id };
    let update = doc! {
        "$set": {
            "preferences": input.into_inner(),
            "updated_at": Utc::now().to_rfc3339(),
        },
        "$setOnInsert": {
            "created_at": Utc::now().to_rfc3339(),
        }
    };

    match collection.update_one(filter, update).upsert(true).await {
        Ok(_) => HttpResponse::Ok().body("Preferences updated"),
        Err(err) => {
            eprintln!("Failed to upsert preferences: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update preferences")
        }
    }
}
