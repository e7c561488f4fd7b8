//! Static fallback catalog.
//!
//! A small curated list of providers with real coordinates, used only when
//! both network sources are unavailable or fail. Never fails and never
//! returns empty, which guarantees the fallback chain terminates.

use super::{annotate_and_sort, SourceAdapter};
use crate::error::SourceError;
use crate::types::{Coordinate, Provider, SourceTag};

pub struct CatalogAdapter;

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    phone: &'static str,
    rating: f64,
    review_count: u32,
    open_now: bool,
    is_emergency: bool,
    specialties: &'static [&'static str],
    hours: &'static str,
    latitude: f64,
    longitude: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "fallback-1",
        name: "Delhi Veterinary Hospital",
        address: "Near Red Fort, Old Delhi, Delhi 110006",
        phone: "+91-11-2396-1234",
        rating: 4.2,
        review_count: 89,
        open_now: true,
        is_emergency: false,
        specialties: &["General Care", "Surgery"],
        hours: "Mon-Sat: 9 AM - 6 PM",
        latitude: 28.6562,
        longitude: 77.2410,
    },
    CatalogEntry {
        id: "fallback-2",
        name: "Pet Care Clinic",
        address: "Karol Bagh, New Delhi, Delhi 110005",
        phone: "+91-11-2875-4321",
        rating: 4.5,
        review_count: 156,
        open_now: true,
        is_emergency: true,
        specialties: &["Emergency", "24/7", "Critical Care"],
        hours: "Open 24 hours",
        latitude: 28.6517,
        longitude: 77.1909,
    },
    CatalogEntry {
        id: "fallback-3",
        name: "Animal Health Center",
        address: "Connaught Place, New Delhi, Delhi 110001",
        phone: "+91-11-2331-5678",
        rating: 4.3,
        review_count: 203,
        open_now: false,
        is_emergency: false,
        specialties: &["Dental", "Grooming", "Vaccination"],
        hours: "Mon-Fri: 10 AM - 7 PM",
        latitude: 28.6304,
        longitude: 77.2177,
    },
    CatalogEntry {
        id: "fallback-4",
        name: "Emergency Pet Hospital",
        address: "Lajpat Nagar, New Delhi, Delhi 110024",
        phone: "+91-11-2987-6543",
        rating: 4.7,
        review_count: 312,
        open_now: true,
        is_emergency: true,
        specialties: &["Emergency", "Surgery", "ICU"],
        hours: "Open 24 hours",
        latitude: 28.5679,
        longitude: 77.2431,
    },
    CatalogEntry {
        id: "fallback-5",
        name: "Veterinary Care Services",
        address: "Saket, New Delhi, Delhi 110017",
        phone: "+91-11-2651-9876",
        rating: 4.4,
        review_count: 178,
        open_now: true,
        is_emergency: false,
        specialties: &["General Care", "Pet Boarding", "Training"],
        hours: "Mon-Sat: 8 AM - 8 PM",
        latitude: 28.5245,
        longitude: 77.2065,
    },
];

impl SourceAdapter for CatalogAdapter {
    fn tag(&self) -> SourceTag {
        SourceTag::Fallback
    }

    async fn search(
        &self,
        origin: Coordinate,
        _radius_m: u32,
    ) -> Result<Vec<Provider>, SourceError> {
        let providers = CATALOG.iter().map(CatalogEntry::to_provider).collect();
        Ok(annotate_and_sort(providers, origin))
    }
}

impl CatalogEntry {
    fn to_provider(&self) -> Provider {
        Provider {
            id: self.id.to_string(),
            name: self.name.to_string(),
            address: self.address.to_string(),
            phone: Some(self.phone.to_string()),
            coordinates: Coordinate::new(self.latitude, self.longitude),
            distance_km: 0.0,
            distance_label: String::new(),
            rating: Some(self.rating),
            review_count: Some(self.review_count),
            open_now: Some(self.open_now),
            is_emergency: self.is_emergency,
            specialties: self.specialties.iter().map(ToString::to_string).collect(),
            hours_text: self.hours.to_string(),
            source: SourceTag::Fallback,
        }
    }
}
