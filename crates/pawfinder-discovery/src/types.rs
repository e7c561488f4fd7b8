//! Domain types for provider discovery.

use serde::{Deserialize, Serialize};

use pawfinder_core::AppConfig;

/// Search radius used when the caller does not override it, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5_000;
/// Result cap applied after ranking when the caller does not override it.
pub const DEFAULT_RESULT_LIMIT: usize = 5;
/// Per-request timeout for adapter network calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// A WGS84 point in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the point lies in the valid lat/lng range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Which adapter produced a record. One source per result set; never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Commercial,
    Community,
    Fallback,
}

impl SourceTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::Commercial => "commercial",
            SourceTag::Community => "community",
            SourceTag::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical provider record every source is normalized into.
///
/// Optional fields stay absent when the source has no authoritative value;
/// adapters must not substitute plausible-looking placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Source-qualified ID, unique within one result set.
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub coordinates: Coordinate,
    /// Great-circle distance from the query origin, one decimal.
    pub distance_km: f64,
    /// Display form of `distance_km` ("800 m" / "1.2 km").
    pub distance_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    pub is_emergency: bool,
    /// Never empty; defaults to `["General Care"]`.
    pub specialties: Vec<String>,
    pub hours_text: String,
    pub source: SourceTag,
}

/// Settings for one [`crate::DiscoveryService`].
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub places_base_url: String,
    pub places_api_key: Option<String>,
    pub overpass_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub search_radius_m: u32,
    pub result_limit: usize,
}

impl DiscoveryConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            places_base_url: config.places_base_url.clone(),
            places_api_key: config.places_api_key.clone(),
            overpass_url: config.overpass_url.clone(),
            request_timeout_secs: config.discovery_timeout_secs,
            user_agent: config.discovery_user_agent.clone(),
            search_radius_m: config.search_radius_m,
            result_limit: config.result_limit,
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            places_base_url: pawfinder_core::DEFAULT_PLACES_BASE_URL.to_string(),
            places_api_key: None,
            overpass_url: pawfinder_core::DEFAULT_OVERPASS_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: "pawfinder/0.1 (pet-care)".to_string(),
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}
