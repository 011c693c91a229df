use crate::error::GeometryError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// An axis-aligned area bounded by a southwest and a northeast [`Position`].
///
/// The flat-array form has all axes of the most southwesterly point followed
/// by all axes of the northeasterly point. The 3d form (6 values) is only
/// produced when both corners carry an altitude; otherwise the box degrades
/// to 2d on output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    southwest: Position,
    northeast: Position,
}

impl BoundingBox {
    /// Creates a 2d bounding box from its edge coordinates.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            southwest: Position::new(west, south),
            northeast: Position::new(east, north),
        }
    }

    /// Creates a bounding box from its corner positions.
    pub fn from_corners(southwest: Position, northeast: Position) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Creates a bounding box from a flat array of 4 (2d) or 6 (3d) values.
    pub fn try_from_slice(coordinates: &[f64]) -> Result<Self, GeometryError> {
        match coordinates {
            [west, south, east, north] => Ok(Self::new(*west, *south, *east, *north)),
            [west, south, min_alt, east, north, max_alt] => Ok(Self {
                southwest: Position::with_altitude(*west, *south, *min_alt),
                northeast: Position::with_altitude(*east, *north, *max_alt),
            }),
            _ => Err(GeometryError::InvalidBoundingBoxLength(coordinates.len())),
        }
    }

    /// The southwestern corner.
    pub fn southwest(&self) -> Position {
        self.southwest
    }

    /// The northeastern corner.
    pub fn northeast(&self) -> Position {
        self.northeast
    }

    /// The flat-array form of the box.
    ///
    /// Contains 6 values when both corners carry an altitude, 4 otherwise.
    pub fn to_coordinates(&self) -> Vec<f64> {
        match (self.southwest.altitude(), self.northeast.altitude()) {
            (Some(min_alt), Some(max_alt)) => vec![
                self.southwest.longitude(),
                self.southwest.latitude(),
                min_alt,
                self.northeast.longitude(),
                self.northeast.latitude(),
                max_alt,
            ],
            _ => vec![
                self.southwest.longitude(),
                self.southwest.latitude(),
                self.northeast.longitude(),
                self.northeast.latitude(),
            ],
        }
    }
}
