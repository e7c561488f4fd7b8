//! Strict linear fallback over the prioritized source list.
//!
//! Sources are tried one at a time: commercial places first, then the
//! community map, then the static catalog. The first non-empty success wins
//! and later sources are never consulted, so one response never mixes
//! provenance. Failures, unavailability, and empty results all advance the
//! chain.

use crate::sources::SourceAdapter;
use crate::types::{Coordinate, Provider};

pub struct FallbackOrchestrator<P, C, F> {
    commercial: P,
    community: C,
    fallback: F,
}

impl<P, C, F> FallbackOrchestrator<P, C, F>
where
    P: SourceAdapter,
    C: SourceAdapter,
    F: SourceAdapter,
{
    #[must_use]
    pub fn new(commercial: P, community: C, fallback: F) -> Self {
        Self {
            commercial,
            community,
            fallback,
        }
    }

    /// Resolve one discovery request through the fallback chain.
    ///
    /// Always non-empty in production because the static catalog terminates
    /// the chain; an empty return is possible only with misbehaving test
    /// doubles and is logged as an error.
    pub async fn resolve(&self, origin: Coordinate, radius_m: u32) -> Vec<Provider> {
        // Source 1: commercial places search.
        match self.commercial.search(origin, radius_m).await {
            Ok(providers) if !providers.is_empty() => {
                tracing::debug!(
                    source = %self.commercial.tag(),
                    count = providers.len(),
                    "resolved from commercial source"
                );
                return providers;
            }
            Ok(_) => {
                tracing::debug!(source = %self.commercial.tag(), "empty result, advancing");
            }
            Err(e) => {
                tracing::warn!(source = %self.commercial.tag(), error = %e, "source skipped");
            }
        }

        // Source 2: community map.
        match self.community.search(origin, radius_m).await {
            Ok(providers) if !providers.is_empty() => {
                tracing::debug!(
                    source = %self.community.tag(),
                    count = providers.len(),
                    "resolved from community source"
                );
                return providers;
            }
            Ok(_) => {
                tracing::debug!(source = %self.community.tag(), "empty result, advancing");
            }
            Err(e) => {
                tracing::warn!(source = %self.community.tag(), error = %e, "source skipped");
            }
        }

        // Source 3: static catalog, guaranteed to terminate the chain.
        match self.fallback.search(origin, radius_m).await {
            Ok(providers) if !providers.is_empty() => {
                tracing::debug!(
                    source = %self.fallback.tag(),
                    count = providers.len(),
                    "resolved from static fallback"
                );
                providers
            }
            Ok(_) => {
                tracing::error!("fallback source returned no records");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "fallback source failed");
                Vec::new()
            }
        }
    }
}
