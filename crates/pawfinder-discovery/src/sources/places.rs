//! Commercial places-search adapter.
//!
//! Queries the hosted nearby-search API filtered to the veterinary category.
//! Requires a provisioned API credential; without one the adapter reports
//! itself unavailable and never touches the network.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{
    annotate_and_sort, is_emergency_name, SourceAdapter, ADDRESS_NOT_AVAILABLE, GENERAL_CARE,
    HOURS_NOT_AVAILABLE,
};
use crate::error::SourceError;
use crate::types::{Coordinate, Provider, SourceTag};

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const CLOSED_PERMANENTLY: &str = "CLOSED_PERMANENTLY";

pub struct PlacesAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    formatted_address: Option<String>,
    geometry: Geometry,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    formatted_phone_number: Option<String>,
    opening_hours: Option<OpeningHours>,
    #[serde(default)]
    types: Vec<String>,
    business_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
    #[serde(default)]
    weekday_text: Vec<String>,
}

impl PlacesAdapter {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        user_agent: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            user_agent,
        }
    }
}

impl SourceAdapter for PlacesAdapter {
    fn tag(&self) -> SourceTag {
        SourceTag::Commercial
    }

    async fn search(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Provider>, SourceError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SourceError::Unavailable {
                reason: "no places API credential provisioned",
            });
        };

        // The key is opaque; encode it so reserved characters cannot split
        // the query string.
        let url = format!(
            "{}?location={},{}&radius={}&type=veterinary_care&key={}",
            self.base_url,
            origin.latitude,
            origin.longitude,
            radius_m,
            utf8_percent_encode(key, NON_ALPHANUMERIC)
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                status: response.status().as_u16(),
                // base_url, not the request URL: the credential must not leak
                // into logs through error text.
                url: self.base_url.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: PlacesResponse = serde_json::from_str(&body)?;

        match parsed.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(vec![]),
            other => {
                return Err(SourceError::Upstream {
                    status: other.to_string(),
                })
            }
        }

        let providers: Vec<Provider> = parsed
            .results
            .into_iter()
            .filter(|place| place.business_status.as_deref() != Some(CLOSED_PERMANENTLY))
            .map(map_place)
            .collect();

        Ok(annotate_and_sort(providers, origin))
    }
}

fn map_place(place: PlaceResult) -> Provider {
    let is_emergency = is_emergency_name(&place.name);

    let mut specialties = Vec::new();
    if place.types.iter().any(|t| t == "veterinary_care") {
        specialties.push(GENERAL_CARE.to_string());
    }
    if place.types.iter().any(|t| t == "hospital") {
        specialties.push("Surgery".to_string());
    }
    if is_emergency {
        specialties.push("Emergency".to_string());
        specialties.push("24/7".to_string());
    }
    if specialties.is_empty() {
        specialties.push(GENERAL_CARE.to_string());
    }

    let hours_text = place
        .opening_hours
        .as_ref()
        .and_then(|h| h.weekday_text.first())
        .map_or_else(|| HOURS_NOT_AVAILABLE.to_string(), Clone::clone);

    Provider {
        id: format!("places:{}", place.place_id),
        name: place.name,
        address: place
            .formatted_address
            .unwrap_or_else(|| ADDRESS_NOT_AVAILABLE.to_string()),
        phone: place.formatted_phone_number,
        coordinates: Coordinate::new(place.geometry.location.lat, place.geometry.location.lng),
        distance_km: 0.0,
        distance_label: String::new(),
        rating: place.rating,
        review_count: place.user_ratings_total,
        open_now: place.opening_hours.as_ref().and_then(|h| h.open_now),
        is_emergency,
        specialties,
        hours_text,
        source: SourceTag::Commercial,
    }
}
