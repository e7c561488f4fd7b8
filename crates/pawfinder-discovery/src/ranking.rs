//! Global ranking and selection.

use crate::geo::{distance_km, format_distance};
use crate::types::{Coordinate, Provider};

/// Re-rank a result set against `origin` and keep the nearest `limit`.
///
/// Distance annotations are recomputed rather than trusted, so the ordering
/// holds even for records produced against a different origin. Sort is by
/// distance ascending with a lexicographic name tie-break, which makes the
/// operation deterministic and idempotent.
#[must_use]
pub fn select_nearest(mut records: Vec<Provider>, origin: Coordinate, limit: usize) -> Vec<Provider> {
    for record in &mut records {
        record.distance_km = distance_km(origin, record.coordinates);
        record.distance_label = format_distance(record.distance_km);
    }
    records.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.name.cmp(&b.name))
    });
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceTag;

    const ORIGIN: Coordinate = Coordinate {
        latitude: 28.6139,
        longitude: 77.2090,
    };

    fn provider(name: &str, lat: f64, lng: f64) -> Provider {
        Provider {
            id: format!("test:{name}"),
            name: name.to_string(),
            address: "Address not available".to_string(),
            phone: None,
            coordinates: Coordinate::new(lat, lng),
            distance_km: 999.0, // stale on purpose; select_nearest recomputes
            distance_label: String::new(),
            rating: None,
            review_count: None,
            open_now: None,
            is_emergency: false,
            specialties: vec!["General Care".to_string()],
            hours_text: "Hours not available".to_string(),
            source: SourceTag::Fallback,
        }
    }

    fn unordered_seven() -> Vec<Provider> {
        vec![
            provider("G", 28.5245, 77.2065),
            provider("A", 28.6304, 77.2177),
            provider("E", 28.5679, 77.2431),
            provider("B", 28.6517, 77.1909),
            provider("F", 28.9000, 77.5000),
            provider("C", 28.6562, 77.2410),
            provider("D", 28.6160, 77.2150),
        ]
    }

    #[test]
    fn selects_top_five_sorted_ascending() {
        let selected = select_nearest(unordered_seven(), ORIGIN, 5);
        assert_eq!(selected.len(), 5);
        let distances: Vec<f64> = selected.iter().map(|p| p.distance_km).collect();
        assert_eq!(distances, vec![0.6, 2.0, 4.6, 5.6, 6.1]);
        let names: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["D", "A", "B", "C", "E"]);
    }

    #[test]
    fn recomputes_stale_annotations() {
        let selected = select_nearest(vec![provider("A", 28.6304, 77.2177)], ORIGIN, 5);
        assert_eq!(selected[0].distance_km, 2.0);
        assert_eq!(selected[0].distance_label, "2.0 km");
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        let once = select_nearest(unordered_seven(), ORIGIN, 5);
        let twice = select_nearest(once.clone(), ORIGIN, 5);
        let once_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn equal_distances_break_ties_by_name() {
        let records = vec![
            provider("Zeta", 28.6304, 77.2177),
            provider("Alpha", 28.6304, 77.2177),
            provider("Mid", 28.6304, 77.2177),
        ];
        let selected = select_nearest(records, ORIGIN, 5);
        let names: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn limit_larger_than_input_keeps_everything() {
        let selected = select_nearest(unordered_seven(), ORIGIN, 50);
        assert_eq!(selected.len(), 7);
    }
}
