//! The closed set of geometry shapes and the [`Geometry`] sum type.

use crate::bounding_box::BoundingBox;
use crate::error::GeometryError;
use crate::position::Position;
use serde::{Deserialize, Serialize};

fn validate_line(positions: &[Position]) -> Result<(), GeometryError> {
    if positions.len() < 2 {
        return Err(GeometryError::LineStringTooShort);
    }
    Ok(())
}

fn validate_ring(ring: &[Position]) -> Result<(), GeometryError> {
    if ring.len() < 4 {
        return Err(GeometryError::RingTooShort);
    }
    // closure compares horizontal coordinates only
    let first = &ring[0];
    let last = &ring[ring.len() - 1];
    if !first.same_location(last) {
        return Err(GeometryError::RingNotClosed);
    }
    Ok(())
}

fn validate_rings(rings: &[Vec<Position>]) -> Result<(), GeometryError> {
    for ring in rings {
        validate_ring(ring)?;
    }
    Ok(())
}

/// A single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coordinates: Position,
    bbox: Option<BoundingBox>,
}

impl Point {
    /// Creates a point at the given position.
    pub fn new(coordinates: Position) -> Self {
        Self {
            coordinates,
            bbox: None,
        }
    }

    /// The position of the point.
    pub fn coordinates(&self) -> Position {
        self.coordinates
    }

    /// The bounding box attached to the point, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// An unordered set of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl MultiPoint {
    /// Creates a multi-point from the given positions.
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self {
            coordinates,
            bbox: None,
        }
    }

    /// The positions of the multi-point.
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// The bounding box attached to the multi-point, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// An open sequence of two or more positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl LineString {
    /// Creates a line string. Fails if fewer than two positions are given.
    pub fn new(coordinates: Vec<Position>) -> Result<Self, GeometryError> {
        validate_line(&coordinates)?;
        Ok(Self {
            coordinates,
            bbox: None,
        })
    }

    /// Creates a line string with a bounding box attached.
    pub fn with_bbox(
        coordinates: Vec<Position>,
        bbox: BoundingBox,
    ) -> Result<Self, GeometryError> {
        validate_line(&coordinates)?;
        Ok(Self {
            coordinates,
            bbox: Some(bbox),
        })
    }

    /// Creates the two-position line string connecting `start` and `end`.
    pub fn segment(start: Position, end: Position) -> Self {
        Self {
            coordinates: vec![start, end],
            bbox: None,
        }
    }

    /// The positions of the line, in order.
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// The bounding box attached to the line, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// A set of line strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    coordinates: Vec<Vec<Position>>,
    bbox: Option<BoundingBox>,
}

impl MultiLineString {
    /// Creates a multi-line-string. Fails if any member line has fewer than
    /// two positions.
    pub fn new(coordinates: Vec<Vec<Position>>) -> Result<Self, GeometryError> {
        for line in &coordinates {
            validate_line(line)?;
        }
        Ok(Self {
            coordinates,
            bbox: None,
        })
    }

    /// Creates a multi-line-string with a bounding box attached.
    pub fn with_bbox(
        coordinates: Vec<Vec<Position>>,
        bbox: BoundingBox,
    ) -> Result<Self, GeometryError> {
        let mut value = Self::new(coordinates)?;
        value.bbox = Some(bbox);
        Ok(value)
    }

    /// The coordinate lists of the member lines.
    pub fn coordinates(&self) -> &[Vec<Position>] {
        &self.coordinates
    }

    /// The bounding box attached to the lines, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// An area bounded by an outer linear ring, with optional hole rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    coordinates: Vec<Vec<Position>>,
    bbox: Option<BoundingBox>,
}

impl Polygon {
    /// Creates a polygon from its rings. The first ring is the outer
    /// boundary, the rest are holes. Fails if any ring is not closed or has
    /// fewer than four positions.
    pub fn new(coordinates: Vec<Vec<Position>>) -> Result<Self, GeometryError> {
        validate_rings(&coordinates)?;
        Ok(Self {
            coordinates,
            bbox: None,
        })
    }

    /// Creates a polygon with a bounding box attached.
    pub fn with_bbox(
        coordinates: Vec<Vec<Position>>,
        bbox: BoundingBox,
    ) -> Result<Self, GeometryError> {
        let mut value = Self::new(coordinates)?;
        value.bbox = Some(bbox);
        Ok(value)
    }

    /// The rings of the polygon, outer ring first.
    pub fn coordinates(&self) -> &[Vec<Position>] {
        &self.coordinates
    }

    /// The bounding box attached to the polygon, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// A set of polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    coordinates: Vec<Vec<Vec<Position>>>,
    bbox: Option<BoundingBox>,
}

impl MultiPolygon {
    /// Creates a multi-polygon from the ring lists of its member polygons.
    pub fn new(coordinates: Vec<Vec<Vec<Position>>>) -> Result<Self, GeometryError> {
        for polygon in &coordinates {
            validate_rings(polygon)?;
        }
        Ok(Self {
            coordinates,
            bbox: None,
        })
    }

    /// The ring lists of the member polygons.
    pub fn coordinates(&self) -> &[Vec<Vec<Position>>] {
        &self.coordinates
    }

    /// The bounding box attached to the polygons, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// A heterogeneous list of geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
}

impl GeometryCollection {
    /// Creates a collection from the given geometries.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            bbox: None,
        }
    }

    /// The member geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// The bounding box attached to the collection, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// Any of the seven geometry shapes.
///
/// The set is closed, so consumers dispatch with exhaustive matching rather
/// than downcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// A set of positions.
    MultiPoint(MultiPoint),
    /// An open sequence of positions.
    LineString(LineString),
    /// A set of line strings.
    MultiLineString(MultiLineString),
    /// An area with optional holes.
    Polygon(Polygon),
    /// A set of polygons.
    MultiPolygon(MultiPolygon),
    /// A nested list of geometries.
    GeometryCollection(GeometryCollection),
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}
