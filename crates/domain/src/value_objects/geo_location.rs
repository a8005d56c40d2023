//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinates {
    /// Rejected latitude
    pub latitude: f64,
    /// Rejected longitude
    pub longitude: f64,
}

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates ({}, {}): latitude must be -90 to 90, longitude must be -180 to 180",
            self.latitude, self.longitude
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location in meters
    ///
    /// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
    #[must_use]
    pub fn distance_m(&self, other: &Self) -> f64 {
        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos())
            .mul_add(
                (delta_lon / 2.0).sin().powi(2),
                (delta_lat / 2.0).sin().powi(2),
            )
            // rounding can push antipodal points just past 1.0
            .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Great-circle distance to another location in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        self.distance_m(other) / 1000.0
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(55.75, 37.62).expect("valid coordinates");
        assert!((loc.latitude() - 55.75).abs() < f64::EPSILON);
        assert!((loc.longitude() - 37.62).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_invalid_coordinates_message() {
        let err = GeoLocation::new(95.5, 0.0).unwrap_err();
        assert!(err.to_string().contains("95.5"));
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(55.75, 37.62).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("55.75"));
        assert!(display.contains("37.62"));
    }

    #[test]
    fn test_distance_same_location() {
        let loc = GeoLocation::new_unchecked(55.75, 37.62);
        assert!(loc.distance_m(&loc).abs() < 1e-6);
    }

    #[test]
    fn test_distance_moscow_blocks() {
        let a = GeoLocation::new_unchecked(55.75, 37.62);
        let b = GeoLocation::new_unchecked(55.76, 37.61);
        let distance = a.distance_m(&b);
        assert!(distance > 1100.0 && distance < 1300.0, "got {distance}");
    }

    #[test]
    fn test_distance_one_degree_along_equator() {
        let a = GeoLocation::new_unchecked(0.0, 0.0);
        let b = GeoLocation::new_unchecked(0.0, 1.0);
        let expected = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert!((a.distance_m(&b) - expected).abs() < 1e-6);
        assert!((a.distance_km(&b) - expected / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_antipodal() {
        let a = GeoLocation::new_unchecked(0.0, 0.0);
        let b = GeoLocation::new_unchecked(0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((a.distance_m(&b) - half_circumference).abs() < 1.0);
    }

    #[test]
    fn test_distance_poles() {
        let north = GeoLocation::new_unchecked(90.0, 0.0);
        let south = GeoLocation::new_unchecked(-90.0, 45.0);
        assert!(north.distance_m(&south).is_finite());
    }

    #[test]
    fn test_json_text_keeps_exact_coordinates() {
        let loc = GeoLocation::new(-18.832_128_477_051_686, 146.907_003_214_981_3).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        let back: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.latitude().to_bits(), loc.latitude().to_bits());
        assert_eq!(back.longitude().to_bits(), loc.longitude().to_bits());
    }
}
