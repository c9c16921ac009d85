use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::services::gemini_service::GeminiService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    client: web::Data<Arc<Client>>,
    gemini: web::Data<GeminiService>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    let gemini_result = check_gemini(&gemini);
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    // A missing Gemini key is reported but not degraded: the fallback
    // generator keeps the itinerary route serving.
    if mongo_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client
        .database("Travelers")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            eprintln!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_gemini(gemini: &web::Data<GeminiService>) -> ServiceStatus {
    if gemini.has_api_key() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some("Gemini API key configured".to_string()),
        }
    } else {
        ServiceStatus {
            status: "fallback".to_string(),
            details: Some(
                "GEMINI_API_KEY not configured, serving locally generated itineraries".to_string(),
            ),
        }
    }
}
