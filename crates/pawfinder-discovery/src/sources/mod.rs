//! Source adapters.
//!
//! Each adapter knows how to query one geodata source and normalize its
//! results into [`Provider`] records. The orchestrator tries them in priority
//! order (commercial places, community map, static catalog).

mod catalog;
mod overpass;
mod places;

pub use catalog::CatalogAdapter;
pub use overpass::OverpassAdapter;
pub use places::PlacesAdapter;

use std::future::Future;

use crate::error::SourceError;
use crate::geo::{distance_km, format_distance};
use crate::types::{Coordinate, Provider, SourceTag};

pub(crate) const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub(crate) const HOURS_NOT_AVAILABLE: &str = "Hours not available";
pub(crate) const GENERAL_CARE: &str = "General Care";

/// Name tokens that mark a provider as an emergency clinic.
const EMERGENCY_TOKENS: [&str; 3] = ["emergency", "24", "urgent"];

/// One queryable geodata source.
///
/// `search` returns `Ok(vec![])` for a well-formed response with zero usable
/// records; that is an orchestration signal, not a failure.
pub trait SourceAdapter {
    /// Provenance tag stamped on every record this adapter emits.
    fn tag(&self) -> SourceTag;

    fn search(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<Provider>, SourceError>> + Send;
}

/// Case-insensitive emergency heuristic over a provider name.
pub(crate) fn is_emergency_name(name: &str) -> bool {
    let lowered = name.to_lowercase();
    EMERGENCY_TOKENS.iter().any(|t| lowered.contains(t))
}

/// Stamp distance annotations relative to `origin` and pre-sort ascending.
///
/// Ties break on name so adapter output is deterministic before the global
/// ranking pass.
pub(crate) fn annotate_and_sort(mut providers: Vec<Provider>, origin: Coordinate) -> Vec<Provider> {
    for provider in &mut providers {
        provider.distance_km = distance_km(origin, provider.coordinates);
        provider.distance_label = format_distance(provider.distance_km);
    }
    providers.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.name.cmp(&b.name))
    });
    providers
}
