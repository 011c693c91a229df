//! Units of measurement and conversions between them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Radius of the Earth used with the Haversine formula. Approximated using a
/// spherical (non-ellipsoid) Earth.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Supported units of measurement.
///
/// Each unit carries a linear factor relative to a distance in radians across
/// the spherical Earth and, where defined, an area factor relative to one
/// square meter. [`Units::Acres`] has no linear factor;
/// [`Units::NauticalMiles`], [`Units::Degrees`] and [`Units::Radians`] have
/// no area factor. Requesting a conversion through a missing factor is an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    /// Meters.
    Meters,
    /// Millimeters.
    Millimeters,
    /// Centimeters.
    Centimeters,
    /// Kilometers. The default unit of every distance-taking operation.
    #[default]
    Kilometers,
    /// Acres. Area only.
    Acres,
    /// Statute miles.
    Miles,
    /// Nautical miles. Length only.
    NauticalMiles,
    /// Inches.
    Inches,
    /// Yards.
    Yards,
    /// Feet.
    Feet,
    /// Angular distance in radians across the sphere.
    Radians,
    /// Angular distance in degrees across the sphere.
    Degrees,
}

impl Units {
    /// Measurement factor relative to a distance in radians across the
    /// sphere, or `None` for units with no linear meaning.
    pub(crate) fn factor(self) -> Option<f64> {
        match self {
            Units::Meters => Some(EARTH_RADIUS),
            Units::Millimeters => Some(EARTH_RADIUS * 1000.0),
            Units::Centimeters => Some(EARTH_RADIUS * 100.0),
            Units::Kilometers => Some(EARTH_RADIUS / 1000.0),
            Units::Acres => None,
            Units::Miles => Some(EARTH_RADIUS / 1609.344),
            Units::NauticalMiles => Some(EARTH_RADIUS / 1852.0),
            Units::Inches => Some(EARTH_RADIUS * 39.370),
            Units::Yards => Some(EARTH_RADIUS / 1.0936),
            Units::Feet => Some(EARTH_RADIUS * 3.28084),
            Units::Radians => Some(1.0),
            Units::Degrees => Some(EARTH_RADIUS / 111_325.0),
        }
    }

    /// Area factor relative to one square meter, or `None` for units with no
    /// area meaning.
    pub(crate) fn area_factor(self) -> Option<f64> {
        match self {
            Units::Meters => Some(1.0),
            Units::Millimeters => Some(1_000_000.0),
            Units::Centimeters => Some(10_000.0),
            Units::Kilometers => Some(0.000_001),
            Units::Acres => Some(0.000_247_105),
            Units::Miles => Some(3.86e-7),
            Units::NauticalMiles => None,
            Units::Inches => Some(1550.003_100_006),
            Units::Yards => Some(1.195_990_046),
            Units::Feet => Some(10.763_910_417),
            Units::Radians => None,
            Units::Degrees => None,
        }
    }
}

/// Converts an angle in degrees to radians.
pub(crate) fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
pub(crate) fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts a distance across the sphere from radians to the given unit.
pub fn radians_to_length(radians: f64, units: Units) -> Result<f64, Error> {
    let factor = units.factor().ok_or(Error::InvalidLengthUnit(units))?;
    Ok(radians * factor)
}

/// Converts a distance in the given unit to radians across the sphere.
pub fn length_to_radians(distance: f64, units: Units) -> Result<f64, Error> {
    let factor = units.factor().ok_or(Error::InvalidLengthUnit(units))?;
    Ok(distance / factor)
}

/// Converts a distance in the given unit to degrees across the sphere.
pub fn length_to_degrees(distance: f64, units: Units) -> Result<f64, Error> {
    Ok(degrees(length_to_radians(distance, units)?))
}

/// Converts a length from one unit to another. The length must not be
/// negative.
pub fn convert_length(length: f64, from: Units, to: Units) -> Result<f64, Error> {
    if length < 0.0 {
        return Err(Error::NegativeInput("length"));
    }
    radians_to_length(length_to_radians(length, from)?, to)
}

/// Converts an area from one unit to another. The area must not be negative.
pub fn convert_area(area: f64, from: Units, to: Units) -> Result<f64, Error> {
    if area < 0.0 {
        return Err(Error::NegativeInput("area"));
    }
    let from_factor = from.area_factor().ok_or(Error::InvalidAreaUnit(from))?;
    let to_factor = to.area_factor().ok_or(Error::InvalidAreaUnit(to))?;
    Ok((area / from_factor) * to_factor)
}

/// Normalizes any bearing angle from the north line direction (positive
/// clockwise) into the `[0, 360)` range.
pub fn bearing_to_azimuth(bearing: f64) -> f64 {
    let mut angle = bearing % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}
