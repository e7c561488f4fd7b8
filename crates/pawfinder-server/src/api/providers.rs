use axum::{
    extract::{Query, State},
    Extension, Json,
};
use pawfinder_discovery::{Coordinate, DiscoveryError, Provider};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct NearbyParams {
    lat: f64,
    lng: f64,
    radius_m: Option<u32>,
    limit: Option<usize>,
}

pub(super) async fn find_nearby_providers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<ApiResponse<Vec<Provider>>>, ApiError> {
    let origin = Coordinate::new(params.lat, params.lng);
    let radius_m = params.radius_m.unwrap_or(state.search_radius_m);
    let limit = normalize_limit(params.limit, state.result_limit);

    let providers = state
        .discovery
        .find_nearby_within(origin, radius_m, limit)
        .await
        .map_err(|e| map_discovery_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: providers,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_discovery_error(request_id: String, error: &DiscoveryError) -> ApiError {
    match error {
        DiscoveryError::InvalidOrigin { .. } => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        DiscoveryError::Client(_) => {
            tracing::error!(error = %error, "discovery client failure");
            ApiError::new(request_id, "internal_error", "provider discovery failed")
        }
    }
}
