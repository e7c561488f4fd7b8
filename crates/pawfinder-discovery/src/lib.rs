//! Nearby veterinary provider discovery.
//!
//! Given a user coordinate, queries heterogeneous geodata sources in priority
//! order (commercial places search, community map, embedded static catalog),
//! normalizes their schemas into one canonical [`Provider`] record, and
//! returns a deterministic distance-ranked, bounded list. Source failures
//! degrade through the fallback chain instead of surfacing to the caller.

mod error;
mod geo;
mod orchestrator;
mod ranking;
mod service;
mod sources;
mod types;

pub use error::{DiscoveryError, SourceError};
pub use geo::{distance_km, format_distance};
pub use orchestrator::FallbackOrchestrator;
pub use ranking::select_nearest;
pub use service::DiscoveryService;
pub use sources::{CatalogAdapter, OverpassAdapter, PlacesAdapter, SourceAdapter};
pub use types::{
    Coordinate, DiscoveryConfig, Provider, SourceTag, DEFAULT_RESULT_LIMIT,
    DEFAULT_SEARCH_RADIUS_M, DEFAULT_TIMEOUT_SECS,
};
