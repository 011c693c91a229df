//! Coordinate traversal over any geometry-bearing value.

use meridian_types::{Feature, FeatureCollection, Geometry, Position};

/// Access to every position of a geometry-bearing value.
///
/// Traversal follows the shape's natural nesting: a point visits its single
/// position, lines visit their positions in order, polygons visit ring-major,
/// multi-polygons polygon-major, and collections visit their members in
/// order.
pub trait CoordAll {
    /// Invokes `visitor` once per position of the value.
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position));

    /// Flattens the value into the sequence of all its positions.
    fn coord_all(&self) -> Vec<Position> {
        let mut coordinates = Vec::new();
        self.coord_each(&mut |position| coordinates.push(*position));
        coordinates
    }
}

impl CoordAll for Geometry {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        match self {
            Geometry::Point(point) => visitor(&point.coordinates()),
            Geometry::MultiPoint(multi_point) => {
                for position in multi_point.coordinates() {
                    visitor(position);
                }
            }
            Geometry::LineString(line) => {
                for position in line.coordinates() {
                    visitor(position);
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in lines.coordinates() {
                    for position in line {
                        visitor(position);
                    }
                }
            }
            Geometry::Polygon(polygon) => {
                for ring in polygon.coordinates() {
                    for position in ring {
                        visitor(position);
                    }
                }
            }
            Geometry::MultiPolygon(multi_polygon) => {
                for polygon in multi_polygon.coordinates() {
                    for ring in polygon {
                        for position in ring {
                            visitor(position);
                        }
                    }
                }
            }
            Geometry::GeometryCollection(collection) => {
                for geometry in collection.geometries() {
                    geometry.coord_each(visitor);
                }
            }
        }
    }
}

impl CoordAll for Feature {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        if let Some(geometry) = self.geometry() {
            geometry.coord_each(visitor);
        }
    }
}

impl CoordAll for FeatureCollection {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for feature in self.features() {
            feature.coord_each(visitor);
        }
    }
}

impl CoordAll for meridian_types::Point {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        visitor(&self.coordinates());
    }
}

impl CoordAll for meridian_types::MultiPoint {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for position in self.coordinates() {
            visitor(position);
        }
    }
}

impl CoordAll for meridian_types::LineString {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for position in self.coordinates() {
            visitor(position);
        }
    }
}

impl CoordAll for meridian_types::MultiLineString {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for line in self.coordinates() {
            for position in line {
                visitor(position);
            }
        }
    }
}

impl CoordAll for meridian_types::Polygon {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for ring in self.coordinates() {
            for position in ring {
                visitor(position);
            }
        }
    }
}

impl CoordAll for meridian_types::MultiPolygon {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for polygon in self.coordinates() {
            for ring in polygon {
                for position in ring {
                    visitor(position);
                }
            }
        }
    }
}

impl CoordAll for meridian_types::GeometryCollection {
    fn coord_each(&self, visitor: &mut dyn FnMut(&Position)) {
        for geometry in self.geometries() {
            geometry.coord_each(visitor);
        }
    }
}
