//! Community map adapter.
//!
//! Spatial query against a community-maintained geographic database for
//! `amenity=veterinary` nodes/ways/relations within a bounding radius. The
//! source has no authoritative rating, review, or open-state data; those
//! fields are left unknown rather than fabricated.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{
    annotate_and_sort, is_emergency_name, SourceAdapter, ADDRESS_NOT_AVAILABLE, GENERAL_CARE,
    HOURS_NOT_AVAILABLE,
};
use crate::error::SourceError;
use crate::types::{Coordinate, Provider, SourceTag};

pub struct OverpassAdapter {
    client: reqwest::Client,
    url: String,
    user_agent: String,
    query_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: Option<u64>,
    lat: Option<f64>,
    lon: Option<f64>,
    /// Centroid, present for ways/relations queried with `out center`.
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

impl OverpassAdapter {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        url: String,
        user_agent: String,
        query_timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            url,
            user_agent,
            query_timeout_secs,
        }
    }

    fn build_query(&self, origin: Coordinate, radius_m: u32) -> String {
        let around = format!("around:{},{},{}", radius_m, origin.latitude, origin.longitude);
        format!(
            "[out:json][timeout:{}];(node[\"amenity\"=\"veterinary\"]({around});way[\"amenity\"=\"veterinary\"]({around});relation[\"amenity\"=\"veterinary\"]({around}););out center meta;",
            self.query_timeout_secs
        )
    }
}

impl SourceAdapter for OverpassAdapter {
    fn tag(&self) -> SourceTag {
        SourceTag::Community
    }

    async fn search(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Provider>, SourceError> {
        let query = self.build_query(origin, radius_m);
        let body = format!("data={}", utf8_percent_encode(&query, NON_ALPHANUMERIC));

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response.text().await?;
        let parsed: OverpassResponse = serde_json::from_str(&text)?;

        let providers: Vec<Provider> = parsed
            .elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| map_element(index, element))
            .collect();

        Ok(annotate_and_sort(providers, origin))
    }
}

/// Normalize one element, or discard it when unusable.
///
/// A provider without a name is not usable; elements whose coordinate is only
/// available as the centroid of a larger shape are accepted via `center`.
fn map_element(index: usize, element: OverpassElement) -> Option<Provider> {
    let name = element.tags.get("name")?.trim();
    if name.is_empty() {
        return None;
    }

    let (lat, lon) = match (element.lat, element.lon, element.center) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (_, _, Some(center)) => (center.lat, center.lon),
        _ => return None,
    };

    let address_parts: Vec<&str> = ["addr:street", "addr:city", "addr:postcode"]
        .iter()
        .filter_map(|key| element.tags.get(*key))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    let address = if address_parts.is_empty() {
        ADDRESS_NOT_AVAILABLE.to_string()
    } else {
        address_parts.join(" ")
    };

    let phone = element
        .tags
        .get("phone")
        .or_else(|| element.tags.get("contact:phone"))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let id = element
        .id
        .map_or_else(|| format!("osm:{index}"), |id| format!("osm:{id}"));

    Some(Provider {
        id,
        name: name.to_string(),
        address,
        phone,
        coordinates: Coordinate::new(lat, lon),
        distance_km: 0.0,
        distance_label: String::new(),
        rating: None,
        review_count: None,
        open_now: None,
        is_emergency: is_emergency_name(name),
        specialties: vec![GENERAL_CARE.to_string()],
        hours_text: HOURS_NOT_AVAILABLE.to_string(),
        source: SourceTag::Community,
    })
}
