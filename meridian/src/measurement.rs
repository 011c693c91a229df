//! Measurements over geometries on a spherical Earth.
//!
//! Distances, bearings and destination points use the Haversine formula.
//! Areas use the spherical-excess formula from Chamberlain & Duquette,
//! "Some Algorithms for Polygons on a Sphere" (JPL Publication 07-03).

use crate::error::Error;
use crate::meta::CoordAll;
use crate::units::{degrees, length_to_radians, radians, radians_to_length, Units};
use meridian_types::{
    BoundingBox, Feature, Geometry, LineString, Point, Polygon, Position,
};

/// Earth radius used by the spherical-excess area formula, in meters.
///
/// This intentionally differs from [`EARTH_RADIUS`](crate::units::EARTH_RADIUS)
/// used by the distance formulas: the reference fixtures for each formula
/// were produced with its own radius, so reconciling the two would silently
/// shift every area result.
pub const AREA_EARTH_RADIUS: f64 = 6_378_137.0;

/// Calculates the great-circle distance between two positions in the given
/// unit, using the Haversine formula.
pub fn distance(from: Position, to: Position, units: Units) -> Result<f64, Error> {
    radians_to_length(distance_radians(from, to), units)
}

/// Haversine distance in radians across the sphere.
pub(crate) fn distance_radians(from: Position, to: Position) -> f64 {
    let d_lat = radians(to.latitude() - from.latitude());
    let d_lon = radians(to.longitude() - from.longitude());
    let lat1 = radians(from.latitude());
    let lat2 = radians(to.latitude());

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Finds the initial geographic bearing from `start` towards `end`: the
/// angle measured clockwise from the north line, in decimal degrees between
/// -180 and 180.
pub fn bearing(start: Position, end: Position) -> f64 {
    let lon1 = radians(start.longitude());
    let lon2 = radians(end.longitude());
    let lat1 = radians(start.latitude());
    let lat2 = radians(end.latitude());

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    degrees(a.atan2(b))
}

/// Finds the bearing at which the great-circle route from `start` arrives at
/// `end`, in degrees between 0 and 360.
pub fn final_bearing(start: Position, end: Position) -> f64 {
    (bearing(end, start) + 180.0) % 360.0
}

/// Calculates the location of a destination position given a distance and a
/// bearing from the origin, accounting for global curvature.
///
/// The returned position never carries an altitude.
pub fn destination(
    origin: Position,
    distance: f64,
    bearing: f64,
    units: Units,
) -> Result<Position, Error> {
    Ok(destination_radians(
        origin,
        length_to_radians(distance, units)?,
        bearing,
    ))
}

/// Forward geodesic solution with the angular distance already in radians.
pub(crate) fn destination_radians(origin: Position, distance: f64, bearing: f64) -> Position {
    let longitude1 = radians(origin.longitude());
    let latitude1 = radians(origin.latitude());
    let bearing_rad = radians(bearing);

    let latitude2 = (latitude1.sin() * distance.cos()
        + latitude1.cos() * distance.sin() * bearing_rad.cos())
    .asin();
    let longitude2 = longitude1
        + (bearing_rad.sin() * distance.sin() * latitude1.cos())
            .atan2(distance.cos() - latitude1.sin() * latitude2.sin());

    Position::new(degrees(longitude2), degrees(latitude2))
}

/// Returns the position at the specified distance along the line.
///
/// The distance must not be negative. Returns the line's last vertex when
/// the distance exceeds the line's total length.
pub fn along(line: &LineString, distance: f64, units: Units) -> Result<Position, Error> {
    if distance < 0.0 {
        return Err(Error::NegativeInput("distance"));
    }

    let coords = line.coordinates();
    let mut travelled = 0.0;

    for (i, coordinate) in coords.iter().enumerate() {
        if distance >= travelled && i == coords.len() - 1 {
            break;
        } else if travelled >= distance {
            let overshot = distance - travelled;
            if overshot == 0.0 {
                return Ok(*coordinate);
            }
            let direction = bearing(*coordinate, coords[i - 1]) - 180.0;
            return destination(*coordinate, overshot, direction, units);
        } else {
            travelled += self::distance(*coordinate, coords[i + 1], units)?;
        }
    }

    Ok(coords[coords.len() - 1])
}

/// Returns the position midway between two positions, calculated
/// geodesically.
pub fn midpoint(point1: Position, point2: Position) -> Position {
    let dist = distance_radians(point1, point2);
    destination_radians(point1, dist / 2.0, bearing(point1, point2))
}

/// Takes any geometry and returns its area in square meters.
///
/// Points and lines have zero area. Polygon holes are subtracted from the
/// outer ring's area; the result is non-negative regardless of ring winding.
pub fn area(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::GeometryCollection(collection) => {
            collection.geometries().iter().map(area).sum()
        }
        Geometry::Polygon(polygon) => polygon_area(polygon.coordinates()),
        Geometry::MultiPolygon(multi_polygon) => multi_polygon
            .coordinates()
            .iter()
            .map(|rings| polygon_area(rings))
            .sum(),
        _ => 0.0,
    }
}

fn polygon_area(rings: &[Vec<Position>]) -> f64 {
    let mut total = 0.0;
    if let Some((outer, holes)) = rings.split_first() {
        total += ring_area(outer).abs();
        for hole in holes {
            total -= ring_area(hole).abs();
        }
    }
    total
}

/// Approximate signed area of the ring were it projected onto the Earth:
/// positive if the ring is oriented clockwise, negative otherwise.
fn ring_area(ring: &[Position]) -> f64 {
    let mut total = 0.0;

    if ring.len() > 2 {
        for i in 0..ring.len() {
            let (lower, middle, upper) = if i == ring.len() - 2 {
                (ring.len() - 2, ring.len() - 1, 0)
            } else if i == ring.len() - 1 {
                (ring.len() - 1, 0, 1)
            } else {
                (i, i + 1, i + 2)
            };
            let p1 = ring[lower];
            let p2 = ring[middle];
            let p3 = ring[upper];
            total +=
                (radians(p3.longitude()) - radians(p1.longitude())) * radians(p2.latitude()).sin();
        }
        total = total * AREA_EARTH_RADIUS * AREA_EARTH_RADIUS / 2.0;
    }

    total
}

/// Calculates the bounding box covering all positions of the input.
pub fn bbox<T: CoordAll + ?Sized>(geojson: &T) -> BoundingBox {
    compute_bbox(&geojson.coord_all())
}

/// Reduces a position sequence to its axis-aligned bounding box in a single
/// linear pass.
///
/// An empty input yields the inverted box `(+inf, +inf, -inf, -inf)`.
pub fn compute_bbox(coordinates: &[Position]) -> BoundingBox {
    let mut west = f64::INFINITY;
    let mut south = f64::INFINITY;
    let mut east = f64::NEG_INFINITY;
    let mut north = f64::NEG_INFINITY;

    for position in coordinates {
        if west > position.longitude() {
            west = position.longitude();
        }
        if south > position.latitude() {
            south = position.latitude();
        }
        if east < position.longitude() {
            east = position.longitude();
        }
        if north < position.latitude() {
            north = position.latitude();
        }
    }

    BoundingBox::new(west, south, east, north)
}

/// Takes a bounding box and returns the equivalent rectangular polygon.
///
/// Fails if either corner of the box carries an altitude.
pub fn bbox_polygon(bbox: &BoundingBox) -> Result<Polygon, Error> {
    if bbox.southwest().has_altitude() || bbox.northeast().has_altitude() {
        return Err(Error::InvalidArgument(
            "bounding box cannot have altitudes".into(),
        ));
    }

    let southwest = bbox.southwest();
    let northeast = bbox.northeast();
    let ring = vec![
        southwest,
        Position::new(northeast.longitude(), southwest.latitude()),
        northeast,
        Position::new(southwest.longitude(), northeast.latitude()),
        southwest,
    ];

    Ok(Polygon::new(vec![ring])?)
}

/// Returns a feature containing the rectangular polygon that encompasses all
/// vertices of the input, with the bounding box attached.
///
/// A pre-computed bounding box on the feature is reused instead of scanning
/// the coordinates again.
pub fn envelope(feature: &Feature) -> Result<Feature, Error> {
    let bbox = match feature.bbox() {
        Some(bbox) => *bbox,
        None => compute_bbox(&feature.coord_all()),
    };

    Ok(Feature::with_bbox(
        Some(bbox_polygon(&bbox)?.into()),
        bbox,
    ))
}

/// Calculates the length of the geometry in the given unit.
///
/// Points have zero length; polygons contribute the length of their
/// perimeter, holes included.
pub fn length(geometry: &Geometry, units: Units) -> Result<f64, Error> {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => Ok(0.0),
        Geometry::LineString(line) => path_length(line.coordinates(), units),
        Geometry::MultiLineString(lines) => {
            let mut total = 0.0;
            for line in lines.coordinates() {
                total += path_length(line, units)?;
            }
            Ok(total)
        }
        Geometry::Polygon(polygon) => {
            let mut total = 0.0;
            for ring in polygon.coordinates() {
                total += path_length(ring, units)?;
            }
            Ok(total)
        }
        Geometry::MultiPolygon(multi_polygon) => {
            let mut total = 0.0;
            for polygon in multi_polygon.coordinates() {
                for ring in polygon {
                    total += path_length(ring, units)?;
                }
            }
            Ok(total)
        }
        Geometry::GeometryCollection(collection) => {
            let mut total = 0.0;
            for geometry in collection.geometries() {
                total += length(geometry, units)?;
            }
            Ok(total)
        }
    }
}

fn path_length(coords: &[Position], units: Units) -> Result<f64, Error> {
    let mut travelled = 0.0;
    for pair in coords.windows(2) {
        travelled += distance(pair[0], pair[1], units)?;
    }
    Ok(travelled)
}

/// Returns the center point of the bounding box around the input.
pub fn center<T: CoordAll + ?Sized>(geojson: &T) -> Point {
    let ext = bbox(geojson);
    let x = (ext.southwest().longitude() + ext.northeast().longitude()) / 2.0;
    let y = (ext.southwest().latitude() + ext.northeast().latitude()) / 2.0;
    Point::new(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn closed_square(west: f64, south: f64, size: f64) -> Vec<Position> {
        vec![
            Position::new(west, south),
            Position::new(west + size, south),
            Position::new(west + size, south + size),
            Position::new(west, south + size),
            Position::new(west, south),
        ]
    }

    #[test]
    fn distance_between_montreal_and_toronto() {
        let a = Position::new(-73.67, 45.48);
        let b = Position::new(-79.48, 43.68);

        let d = distance(a, b, Units::Kilometers).unwrap();
        assert_abs_diff_eq!(d, 501.64563403765925, epsilon = 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(-73.67, 45.48);
        let b = Position::new(20.0, 60.0);

        for units in [Units::Kilometers, Units::Miles, Units::Radians] {
            assert_abs_diff_eq!(
                distance(a, b, units).unwrap(),
                distance(b, a, units).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn initial_and_final_bearing() {
        let start = Position::new(-75.0, 45.0);
        let end = Position::new(20.0, 60.0);

        assert_abs_diff_eq!(bearing(start, end), 37.75, epsilon = 0.01);
        assert_abs_diff_eq!(final_bearing(start, end), 120.01, epsilon = 0.01);
    }

    #[test]
    fn destination_100km_north() {
        let origin = Position::new(-75.0, 38.10096062273525);
        let result = destination(origin, 100.0, 0.0, Units::Kilometers).unwrap();

        assert_abs_diff_eq!(result.longitude(), -75.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.latitude(), 39.000281, epsilon = 1e-6);
        assert!(!result.has_altitude());
    }

    #[test]
    fn bearing_destination_round_trip() {
        let p = Position::new(-73.67, 45.48);
        let q = Position::new(18.42, -33.92);

        let d = distance(p, q, Units::Kilometers).unwrap();
        let reached = destination(p, d, bearing(p, q), Units::Kilometers).unwrap();

        assert_abs_diff_eq!(reached.longitude(), q.longitude(), epsilon = 1e-6);
        assert_abs_diff_eq!(reached.latitude(), q.latitude(), epsilon = 1e-6);
    }

    #[test]
    fn midpoint_of_toronto_and_new_york() {
        let point1 = Position::new(-79.3801, 43.6463);
        let point2 = Position::new(-74.0071, 40.7113);

        let mid = midpoint(point1, point2);
        assert_abs_diff_eq!(mid.longitude(), -76.6311, epsilon = 0.0001);
        assert_abs_diff_eq!(mid.latitude(), 42.2101, epsilon = 0.0001);
    }

    #[test]
    fn along_walks_the_line() {
        let line = LineString::new(vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(2.0, 0.0),
        ])
        .unwrap();

        // zero overshoot returns the exact vertex
        assert_eq!(
            along(&line, 0.0, Units::Kilometers).unwrap(),
            Position::new(0.0, 0.0)
        );

        let first_segment = distance(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Units::Kilometers,
        )
        .unwrap();
        assert_eq!(
            along(&line, first_segment, Units::Kilometers).unwrap(),
            Position::new(1.0, 0.0)
        );

        // halfway into the first segment
        let halfway = along(&line, first_segment / 2.0, Units::Kilometers).unwrap();
        assert_abs_diff_eq!(halfway.longitude(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(halfway.latitude(), 0.0, epsilon = 1e-6);

        // overshooting the whole line returns the last vertex
        assert_eq!(
            along(&line, 1e6, Units::Kilometers).unwrap(),
            Position::new(2.0, 0.0)
        );

        assert!(matches!(
            along(&line, -1.0, Units::Kilometers),
            Err(Error::NegativeInput("distance"))
        ));
    }

    #[test]
    fn area_of_equatorial_square_degree() {
        let polygon = Geometry::from(Polygon::new(vec![closed_square(0.0, 0.0, 1.0)]).unwrap());

        // one square degree at the equator is roughly 12 391 km^2
        let a = area(&polygon);
        assert!(a > 1.2e10 && a < 1.3e10, "got {a}");
    }

    #[test]
    fn area_is_non_negative_regardless_of_winding() {
        let mut reversed = closed_square(0.0, 0.0, 1.0);
        reversed.reverse();

        let clockwise = Geometry::from(Polygon::new(vec![closed_square(0.0, 0.0, 1.0)]).unwrap());
        let counter = Geometry::from(Polygon::new(vec![reversed]).unwrap());

        assert!(area(&clockwise) > 0.0);
        assert_abs_diff_eq!(area(&clockwise), area(&counter), epsilon = 1e-3);
    }

    #[test]
    fn holes_are_subtracted_from_the_outer_ring() {
        let outer = closed_square(0.0, 0.0, 4.0);
        let hole = closed_square(1.0, 1.0, 1.0);

        let with_hole =
            Geometry::from(Polygon::new(vec![outer.clone(), hole.clone()]).unwrap());
        let outer_only = Geometry::from(Polygon::new(vec![outer]).unwrap());
        let hole_only = Geometry::from(Polygon::new(vec![hole]).unwrap());

        assert_abs_diff_eq!(
            area(&with_hole),
            area(&outer_only) - area(&hole_only),
            epsilon = 1e-3
        );
    }

    #[test]
    fn area_of_non_surface_shapes_is_zero() {
        let point = Geometry::from(Point::new(Position::new(1.0, 1.0)));
        let line = Geometry::from(LineString::segment(
            Position::new(0.0, 0.0),
            Position::new(1.0, 1.0),
        ));

        assert_eq!(area(&point), 0.0);
        assert_eq!(area(&line), 0.0);
    }

    #[test]
    fn collection_area_sums_members() {
        let a = Polygon::new(vec![closed_square(0.0, 0.0, 1.0)]).unwrap();
        let b = Polygon::new(vec![closed_square(10.0, 10.0, 2.0)]).unwrap();
        let collection = Geometry::from(meridian_types::GeometryCollection::new(vec![
            a.clone().into(),
            b.clone().into(),
        ]));

        assert_abs_diff_eq!(
            area(&collection),
            area(&a.into()) + area(&b.into()),
            epsilon = 1e-3
        );
    }

    #[test]
    fn empty_input_yields_inverted_bbox() {
        let bbox = compute_bbox(&[]);
        assert_eq!(
            bbox.to_coordinates(),
            vec![
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY
            ]
        );
    }

    #[test]
    fn bbox_contains_every_coordinate() {
        let geometry = Geometry::from(
            Polygon::new(vec![vec![
                Position::new(-64.44580078125, 45.9511496866914),
                Position::new(-61.973876953125, 45.9511496866914),
                Position::new(-61.973876953125, 47.07012182383309),
                Position::new(-64.44580078125, 47.07012182383309),
                Position::new(-64.44580078125, 45.9511496866914),
            ]])
            .unwrap(),
        );

        let bounds = bbox(&geometry);
        for position in geometry.coord_all() {
            assert!(bounds.southwest().longitude() <= position.longitude());
            assert!(position.longitude() <= bounds.northeast().longitude());
            assert!(bounds.southwest().latitude() <= position.latitude());
            assert!(position.latitude() <= bounds.northeast().latitude());
        }
    }

    #[test]
    fn bbox_polygon_builds_the_closed_ring() {
        let bbox = BoundingBox::new(12.1, 34.3, 56.5, 78.7);
        let polygon = bbox_polygon(&bbox).unwrap();

        assert_eq!(
            polygon.coordinates(),
            &[vec![
                Position::new(12.1, 34.3),
                Position::new(56.5, 34.3),
                Position::new(56.5, 78.7),
                Position::new(12.1, 78.7),
                Position::new(12.1, 34.3),
            ]]
        );
    }

    #[test]
    fn bbox_polygon_rejects_altitudes() {
        let bbox = BoundingBox::from_corners(
            Position::with_altitude(0.0, 0.0, 1.0),
            Position::new(1.0, 1.0),
        );
        assert!(matches!(
            bbox_polygon(&bbox),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn envelope_wraps_the_bbox_polygon() {
        let line = LineString::new(vec![
            Position::new(-79.376220703125, 45.4986468234261),
            Position::new(-73.58642578125, 43.65197548731187),
        ])
        .unwrap();
        let feature = Feature::from(Geometry::from(line));

        let result = envelope(&feature).unwrap();
        let expected_bbox = BoundingBox::new(
            -79.376220703125,
            43.65197548731187,
            -73.58642578125,
            45.4986468234261,
        );

        assert_eq!(result.bbox(), Some(&expected_bbox));
        assert_eq!(
            result.geometry(),
            Some(&Geometry::from(bbox_polygon(&expected_bbox).unwrap()))
        );
    }

    #[test]
    fn length_of_polygon_is_its_perimeter() {
        let ring = closed_square(0.0, 0.0, 1.0);
        let as_line = Geometry::from(LineString::new(ring.clone()).unwrap());
        let as_polygon = Geometry::from(Polygon::new(vec![ring]).unwrap());

        assert_abs_diff_eq!(
            length(&as_polygon, Units::Kilometers).unwrap(),
            length(&as_line, Units::Kilometers).unwrap(),
            epsilon = 1e-12
        );
        assert_eq!(
            length(
                &Geometry::from(Point::new(Position::new(0.0, 0.0))),
                Units::Kilometers
            )
            .unwrap(),
            0.0
        );
    }

    #[test]
    fn center_is_the_bbox_midpoint() {
        let geometry = Geometry::from(Polygon::new(vec![closed_square(10.0, 20.0, 2.0)]).unwrap());
        let center_point = center(&geometry);

        assert_abs_diff_eq!(center_point.coordinates().longitude(), 11.0);
        assert_abs_diff_eq!(center_point.coordinates().latitude(), 21.0);
    }
}
