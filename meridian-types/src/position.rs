use serde::{Deserialize, Serialize};

/// A single location on the surface of the Earth.
///
/// Coordinates are stored in decimal degrees, longitude first, with an
/// optional altitude (in meters) as the third component. No range clamping is
/// performed: callers may pass values outside of `[-180, 180]` /
/// `[-90, 90]`, and algorithms treat them as plain numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Position {
    /// Creates a 2d position.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// Creates a 3d position.
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Altitude in meters, if present.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Whether the position carries an altitude.
    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    /// Returns true if the horizontal coordinates of the two positions are
    /// equal, ignoring altitude.
    pub fn same_location(&self, other: &Self) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }
}
