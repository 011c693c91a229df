//! Geospatial measurement and geometry algorithms over a spherical Earth.
//!
//! All computations treat coordinates as longitude/latitude degrees on a
//! sphere; great-circle formulas (haversine distance, bearings, destination
//! points) drive the measurement operations, while planar approximations are
//! used where the reference algorithms call for them (point-in-polygon,
//! segment intersection).
//!
//! The crate is organized by concern:
//!
//! * [`measurement`] — distances, bearings, destination and intermediate
//!   points, areas, lengths, bounding boxes and derived shapes.
//! * [`booleans`] — point-in-polygon predicates.
//! * [`great_circle`] — great-circle routing with antimeridian handling.
//! * [`misc`] — line intersection, nearest point on a line, line slicing.
//! * [`transformation`] — Bezier smoothing and circle polygons.
//! * [`grids`] — square grids over a bounding box.
//! * [`meta`] — coordinate traversal over any geometry-bearing value.
//! * [`units`] — the unit system and conversions between units.
//!
//! Geometry value types come from the companion [`meridian_types`] crate and
//! are re-exported here for convenience.

pub mod booleans;
pub mod error;
pub mod great_circle;
pub mod grids;
pub mod measurement;
pub mod meta;
pub mod misc;
pub mod transformation;
pub mod units;

pub use booleans::*;
pub use error::Error;
pub use great_circle::*;
pub use grids::*;
pub use measurement::*;
pub use meta::*;
pub use misc::*;
pub use transformation::*;
pub use units::*;

pub use meridian_types::{
    BoundingBox, Feature, FeatureCollection, Geometry, GeometryCollection, GeometryError,
    LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position,
};
