use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    #[serde(default)]
    pub preferences: String,
}

/// Result of an itinerary generation call. The text is always present; the
/// source tells callers whether it came from the model or from the local
/// fallback, and why the fallback was taken.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedItinerary {
    pub itinerary: String,
    pub source: ItinerarySource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItinerarySource {
    Model,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    MissingApiKey,
    EmptyResponse,
    Transport(String),
}
