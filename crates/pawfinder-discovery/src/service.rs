//! The discovery entry point composed from orchestrator and selector.

use std::time::Duration;

use crate::error::DiscoveryError;
use crate::orchestrator::FallbackOrchestrator;
use crate::ranking::select_nearest;
use crate::sources::{CatalogAdapter, OverpassAdapter, PlacesAdapter};
use crate::types::{Coordinate, DiscoveryConfig, Provider};

/// On-demand nearby-provider discovery.
///
/// Stateless between calls: every request re-runs the full fallback chain, so
/// a manual refresh always reflects live source data. Adapter calls are
/// awaited sequentially; dropping the returned future cancels any in-flight
/// call and no later source is attempted.
pub struct DiscoveryService {
    orchestrator: FallbackOrchestrator<PlacesAdapter, OverpassAdapter, CatalogAdapter>,
    search_radius_m: u32,
    result_limit: usize,
}

impl DiscoveryService {
    /// Build a service with one shared, timeout-bounded HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Client`] if the client cannot be constructed.
    pub fn new(config: DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let places = PlacesAdapter::new(
            client.clone(),
            config.places_base_url,
            config.places_api_key,
            config.user_agent.clone(),
        );
        let overpass = OverpassAdapter::new(
            client,
            config.overpass_url,
            config.user_agent,
            config.request_timeout_secs,
        );

        Ok(Self {
            orchestrator: FallbackOrchestrator::new(places, overpass, CatalogAdapter),
            search_radius_m: config.search_radius_m,
            result_limit: config.result_limit,
        })
    }

    /// Find the nearest providers to `origin` using configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidOrigin`] for out-of-range coordinates;
    /// source-level failures are absorbed by the fallback chain.
    pub async fn find_nearby(&self, origin: Coordinate) -> Result<Vec<Provider>, DiscoveryError> {
        self.find_nearby_within(origin, self.search_radius_m, self.result_limit)
            .await
    }

    /// [`Self::find_nearby`] with caller-supplied radius and result cap.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidOrigin`] for out-of-range coordinates.
    pub async fn find_nearby_within(
        &self,
        origin: Coordinate,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<Provider>, DiscoveryError> {
        if !origin.is_valid() {
            return Err(DiscoveryError::InvalidOrigin {
                latitude: origin.latitude,
                longitude: origin.longitude,
            });
        }

        let records = self.orchestrator.resolve(origin, radius_m).await;
        Ok(select_nearest(records, origin, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceTag;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DELHI: Coordinate = Coordinate {
        latitude: 28.6139,
        longitude: 77.2090,
    };

    fn config(places_url: &str, overpass_url: &str, key: Option<&str>) -> DiscoveryConfig {
        DiscoveryConfig {
            places_base_url: places_url.to_string(),
            places_api_key: key.map(ToOwned::to_owned),
            overpass_url: overpass_url.to_string(),
            request_timeout_secs: 5,
            user_agent: "pawfinder-test/0".to_string(),
            search_radius_m: 5000,
            result_limit: 5,
        }
    }

    #[tokio::test]
    async fn invalid_origin_is_rejected_before_any_source() {
        let service =
            DiscoveryService::new(config("http://127.0.0.1:9", "http://127.0.0.1:9", None))
                .expect("service");
        let result = service.find_nearby(Coordinate::new(91.0, 0.0)).await;
        assert!(
            matches!(result, Err(DiscoveryError::InvalidOrigin { latitude, .. }) if latitude == 91.0),
            "expected InvalidOrigin, got: {result:?}"
        );
    }

    #[tokio::test]
    async fn degrades_to_catalog_when_sources_yield_nothing() {
        // No places credential; community source reachable but empty.
        let overpass = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "elements": [] })))
            .mount(&overpass)
            .await;

        let service = DiscoveryService::new(config("http://127.0.0.1:9", &overpass.uri(), None))
            .expect("service");
        let providers = service.find_nearby(DELHI).await.expect("find_nearby");

        assert_eq!(providers.len(), 5);
        assert!(providers.iter().all(|p| p.source == SourceTag::Fallback));
        assert_eq!(providers[0].name, "Animal Health Center");
        assert_eq!(providers[0].distance_label, "2.0 km");
        assert_eq!(providers[4].distance_km, 9.9);
    }

    #[tokio::test]
    async fn community_results_win_over_catalog_and_are_capped() {
        let overpass = MockServer::start().await;
        let elements: Vec<serde_json::Value> = (0..7)
            .map(|i| {
                json!({
                    "id": 200 + i,
                    "lat": 28.6150 + f64::from(i) * 0.01,
                    "lon": 77.2100,
                    "tags": { "name": format!("Community Vet {i}") }
                })
            })
            .collect();
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "elements": elements })),
            )
            .mount(&overpass)
            .await;

        let service = DiscoveryService::new(config("http://127.0.0.1:9", &overpass.uri(), None))
            .expect("service");
        let providers = service.find_nearby(DELHI).await.expect("find_nearby");

        assert_eq!(providers.len(), 5, "capped at the configured limit");
        assert!(providers.iter().all(|p| p.source == SourceTag::Community));
        assert!(providers
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[tokio::test]
    async fn override_limit_and_radius_are_honored() {
        let overpass = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "elements": [] })))
            .mount(&overpass)
            .await;

        let service = DiscoveryService::new(config("http://127.0.0.1:9", &overpass.uri(), None))
            .expect("service");
        let providers = service
            .find_nearby_within(DELHI, 2000, 2)
            .await
            .expect("find_nearby_within");
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].name, "Animal Health Center");
        assert_eq!(providers[1].name, "Pet Care Clinic");
    }
}
