use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub preferences: String,
}

/// Best-effort parse of model output; only `name` is required, everything
/// else passes through when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "estimatedDistance",
        alias = "estimated distance",
        alias = "distance"
    )]
    pub estimated_distance: Option<f64>,
}
