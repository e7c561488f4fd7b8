//! Great-circle distance math and display formatting.

use crate::types::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, rounded to one decimal place.
///
/// Symmetric in its arguments; zero for identical points.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_KM * c * 10.0).round() / 10.0
}

/// Render a distance for display: whole meters below 1 km, otherwise
/// kilometers with one decimal.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        #[allow(clippy::cast_possible_truncation)]
        let meters = (km * 1000.0).round() as i64;
        format!("{meters} m")
    } else {
        format!("{km:.1} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: Coordinate = Coordinate {
        latitude: 28.6139,
        longitude: 77.2090,
    };
    const KAROL_BAGH: Coordinate = Coordinate {
        latitude: 28.6517,
        longitude: 77.1909,
    };

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_km(DELHI, KAROL_BAGH), distance_km(KAROL_BAGH, DELHI));
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(DELHI, DELHI), 0.0);
    }

    #[test]
    fn distance_matches_known_pairs() {
        // Connaught Place-area origin to Karol Bagh, per the haversine formula
        // on the literal coordinates.
        assert_eq!(distance_km(DELHI, KAROL_BAGH), 4.6);

        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        assert_eq!(distance_km(nyc, la), 3935.7);
    }

    #[test]
    fn distance_is_rounded_to_one_decimal() {
        let near = Coordinate::new(28.6160, 77.2150);
        let d = distance_km(DELHI, near);
        assert_eq!(d, 0.6);
        assert_eq!((d * 10.0).round() / 10.0, d);
    }

    #[test]
    fn format_uses_meters_below_one_km() {
        assert_eq!(format_distance(0.8), "800 m");
        assert_eq!(format_distance(0.6), "600 m");
        assert_eq!(format_distance(0.0), "0 m");
    }

    #[test]
    fn format_uses_kilometers_from_one_km() {
        assert_eq!(format_distance(1.2), "1.2 km");
        assert_eq!(format_distance(5.8), "5.8 km");
    }

    #[test]
    fn format_boundary_one_km_is_kilometers() {
        assert_eq!(format_distance(1.0), "1.0 km");
    }
}
