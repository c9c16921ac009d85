use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wayfare_api::db;
use wayfare_api::middleware::auth::AuthMiddleware;
use wayfare_api::routes;
use wayfare_api::services::gemini_service::GeminiService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    // The Gemini key is read once here; a missing key is the documented
    // degrade path, not a startup failure.
    let gemini = GeminiService::from_env();

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(|| async { "OK" }))
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(gemini.clone()))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(routes::health::health_check))
                    // Public routes
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(routes::account::auth::signup))
                            .route("/signin", web::post().to(routes::account::auth::signin))
                            .service(
                                web::scope("").wrap(AuthMiddleware).route(
                                    "/session",
                                    web::get().to(routes::account::auth::user_session),
                                ),
                            ),
                    )
                    // Protected routes
                    .service(
                        web::scope("/account/{id}")
                            .wrap(AuthMiddleware)
                            .route(
                                "/preferences",
                                web::get().to(routes::account::preferences::get_preferences),
                            )
                            .route(
                                "/preferences",
                                web::put().to(routes::account::preferences::update_preferences),
                            ),
                    )
                    .service(
                        web::scope("/itineraries")
                            .wrap(AuthMiddleware)
                            .route("/generate", web::post().to(routes::itinerary::generate)),
                    )
                    .service(
                        web::scope("/recommendations")
                            .wrap(AuthMiddleware)
                            .route("", web::post().to(routes::recommendation::recommend)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
