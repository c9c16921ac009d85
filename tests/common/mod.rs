use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use wayfare_api::middleware::auth::Claims;
use wayfare_api::services::gemini_service::GeminiService;

/// Service with no credential configured: every call takes the documented
/// degrade path without touching the network.
pub fn offline_gemini() -> GeminiService {
    GeminiService::new(None)
}

pub fn get_test_user_id() -> String {
    "64f000000000000000000001".to_string()
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}

/// Bearer header signed with the same secret resolution the middleware uses.
pub fn test_auth_header() -> String {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: get_test_email(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(1)).timestamp() as usize,
        user_id: get_test_user_id(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("failed to sign test token");

    format!("Bearer {}", token)
}
