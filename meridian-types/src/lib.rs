//! Value types for geometries on the surface of a spherical Earth.
//!
//! The model follows the shape set of RFC 7946: a [`Position`] is a
//! longitude/latitude pair with an optional altitude, and the seven geometry
//! shapes ([`Point`], [`MultiPoint`], [`LineString`], [`MultiLineString`],
//! [`Polygon`], [`MultiPolygon`] and [`GeometryCollection`]) are grouped into
//! the closed [`Geometry`] sum type. [`Feature`] and [`FeatureCollection`]
//! wrap geometries together with an optional [`BoundingBox`].
//!
//! All types are immutable values. Structural requirements (a line string has
//! at least two positions, a linear ring is closed and has at least four) are
//! checked once at construction time, so algorithms consuming these values
//! can rely on them without re-validating.
//!
//! This crate deliberately does not read or write any textual encoding of
//! these values.

mod bounding_box;
pub use bounding_box::*;

mod error;
pub use error::*;

mod feature;
pub use feature::*;

mod geometry;
pub use geometry::*;

mod position;
pub use position::*;
