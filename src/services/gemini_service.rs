//! Gemini text-generation client for itineraries and place recommendations.
//!
//! Both entry points degrade instead of failing: a missing API key skips the
//! network call entirely, and a transport failure or unusable response falls
//! back to locally generated content (itineraries) or an empty list
//! (recommendations). Neither call ever surfaces an error to its caller.
//!
//! ## Setup
//! 1. Create an API key in Google AI Studio
//! 2. Set the environment variable: `GEMINI_API_KEY=your_api_key_here`

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::models::itinerary::{FallbackReason, GeneratedItinerary, ItinerarySource};
use crate::models::recommendation::PlaceCandidate;
use crate::services::itinerary_fallback::fallback_itinerary;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

// Keys left at the sample value from a .env template count as absent.
const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY";

const ITINERARY_TIMEOUT: Duration = Duration::from_secs(15);
const RECOMMENDATION_TIMEOUT: Duration = Duration::from_secs(10);
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Debug)]
pub enum GeminiError {
    Http(reqwest::Error),
    Response(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::Http(err) => write!(f, "HTTP error: {}", err),
            GeminiError::Response(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Http(err)
    }
}

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiService {
    /// Read the credential once at the process boundary. A missing or
    /// placeholder key constructs a service that only serves fallbacks.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        if api_key.is_none() {
            println!("GEMINI_API_KEY not configured, AI requests will degrade to local fallbacks");
        }

        let mut service = Self::new(api_key);
        if let Ok(url) = env::var("GEMINI_API_URL") {
            service.endpoint = url;
        }
        service
    }

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: GEMINI_ENDPOINT.to_string(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a Markdown itinerary for `destination`.
    ///
    /// Never fails: every degraded path yields the deterministic fallback
    /// itinerary tagged with the reason it was taken. `days` is expected to
    /// be pre-validated by the caller; any positive value is handled.
    pub async fn generate_itinerary(
        &self,
        destination: &str,
        days: u32,
        preferences: &str,
    ) -> GeneratedItinerary {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                return GeneratedItinerary {
                    itinerary: fallback_itinerary(destination, days, preferences),
                    source: ItinerarySource::Fallback(FallbackReason::MissingApiKey),
                }
            }
        };

        let prompt = build_itinerary_prompt(destination, days, preferences);

        match self.call_generate(api_key, &prompt, ITINERARY_TIMEOUT).await {
            Ok(Some(text)) => GeneratedItinerary {
                itinerary: text,
                source: ItinerarySource::Model,
            },
            Ok(None) => {
                println!("No usable candidates in Gemini response, using fallback itinerary");
                GeneratedItinerary {
                    itinerary: fallback_itinerary(destination, days, preferences),
                    source: ItinerarySource::Fallback(FallbackReason::EmptyResponse),
                }
            }
            Err(err) => {
                eprintln!("Gemini itinerary request failed: {}", err);
                GeneratedItinerary {
                    itinerary: fallback_itinerary(destination, days, preferences),
                    source: ItinerarySource::Fallback(FallbackReason::Transport(err.to_string())),
                }
            }
        }
    }

    /// Suggest places near `coordinates` matching the preference text.
    ///
    /// Never fails: absence of recommendations is not an error, so every
    /// degraded path converges to an empty list.
    pub async fn recommend_places(
        &self,
        coordinates: (f64, f64),
        preferences: &str,
    ) -> Vec<PlaceCandidate> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => return Vec::new(),
        };

        let prompt = build_recommendation_prompt(coordinates, preferences);

        match self
            .call_generate(api_key, &prompt, RECOMMENDATION_TIMEOUT)
            .await
        {
            Ok(Some(text)) => parse_place_candidates(&text),
            Ok(None) => Vec::new(),
            Err(err) => {
                eprintln!("Gemini recommendation request failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Single-turn generateContent call. `Ok(None)` means the endpoint
    /// answered but returned no usable candidate text.
    async fn call_generate(
        &self,
        api_key: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<Option<String>, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&request)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::Response(format!(
                "Gemini request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Response(format!("Failed to parse Gemini response: {}", e)))?;

        Ok(first_candidate_text(body))
    }
}

fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
}

fn build_itinerary_prompt(destination: &str, days: u32, preferences: &str) -> String {
    format!(
        "You are an expert travel planner. Create a highly detailed and personalized travel itinerary for {destination} for {days} days.\n\
         - Preferences: {preferences}\n\
         - Include: Famous attractions, hidden gems, cultural experiences, and food recommendations.\n\
         - Adjust recommendations based on seasonality and peak travel hours.\n\
         - Highlight the best times to visit each location to avoid crowds.\n\
         - Specify travel time between locations.\n\
         - Avoid repeating common recommendations unless they are must-see spots.\n\
         - Format the response in Markdown with:\n\
           - # for title\n\
           - ## for day headers\n\
           - **Bold for time and important details**\n\
           - Locations with addresses in (parentheses)\n\
           - Notes at the end with travel tips, expected costs, and best transportation options."
    )
}

fn build_recommendation_prompt(coordinates: (f64, f64), preferences: &str) -> String {
    let (lat, lon) = coordinates;
    format!(
        "Based on the location coordinates ({lat}, {lon}), suggest 5 interesting places to visit nearby.\n\
         Consider preferences: {preferences}.\n\
         Return the response as a JSON array with each place having: name, description, category, and estimated distance."
    )
}

/// Scan free-form model output for the first bracketed array of objects and
/// parse it. Any shape or parse problem yields an empty list, never an error.
pub fn parse_place_candidates(text: &str) -> Vec<PlaceCandidate> {
    let pattern = Regex::new(r"(?s)\[\s*\{.*\}\s*\]").unwrap();

    match pattern.find(text) {
        Some(fragment) => match serde_json::from_str::<Vec<PlaceCandidate>>(fragment.as_str()) {
            Ok(places) => places,
            Err(err) => {
                eprintln!("Failed to parse recommendation JSON from model text: {}", err);
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}
