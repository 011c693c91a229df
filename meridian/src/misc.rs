//! Line algorithms: segment intersection, nearest point on a line, and line
//! slicing.

use crate::error::Error;
use crate::measurement::{bearing, destination, distance};
use crate::units::Units;
use meridian_types::{LineString, MultiLineString, Position};
use serde::{Deserialize, Serialize};

/// Returns intersecting points between two line strings.
///
/// Currently only supports primitive line strings containing exactly two
/// positions each; anything longer fails with [`Error::Unsupported`].
pub fn line_intersect(line1: &LineString, line2: &LineString) -> Result<Vec<Position>, Error> {
    match (line1.coordinates(), line2.coordinates()) {
        ([a1, a2], [b1, b2]) => Ok(segment_intersection(*a1, *a2, *b1, *b2)
            .into_iter()
            .collect()),
        _ => Err(Error::Unsupported("complex line intersections")),
    }
}

/// Classic parametric two-segment intersection. Returns `None` when the
/// segments are parallel, collinear, or meet outside either segment's
/// extent.
fn segment_intersection(
    start1: Position,
    end1: Position,
    start2: Position,
    end2: Position,
) -> Option<Position> {
    let x1 = start1.longitude();
    let y1 = start1.latitude();
    let x2 = end1.longitude();
    let y2 = end1.latitude();
    let x3 = start2.longitude();
    let y3 = start2.latitude();
    let x4 = end2.longitude();
    let y4 = end2.latitude();

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    let num_a = (x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3);
    let num_b = (x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3);

    if denom == 0.0 || (num_a == 0.0 && num_b == 0.0) {
        return None;
    }

    let u_a = num_a / denom;
    let u_b = num_b / denom;

    if (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b) {
        let x = x1 + u_a * (x2 - x1);
        let y = y1 + u_a * (y2 - y1);
        Some(Position::new(x, y))
    } else {
        None
    }
}

/// Result values from [`nearest_point_on_line`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPointOnLineResult {
    /// The point on the line nearest to the input position.
    pub point: Position,
    /// Distance between the input position and [`point`](Self::point).
    pub distance: f64,
    /// Distance along the line from its start to
    /// [`point`](Self::point).
    pub location: f64,
    /// Index of the segment of the line whose start vertex lies at or before
    /// the projected point.
    pub index: usize,
}

/// Finds the closest position along a line string to the given position.
pub fn nearest_point_on_line(
    line: &LineString,
    point: Position,
    units: Units,
) -> Result<NearestPointOnLineResult, Error> {
    nearest_point(std::iter::once(line.coordinates()), point, units)
}

/// Finds the closest position along any member of a multi-line-string to the
/// given position.
pub fn nearest_point_on_multi_line(
    lines: &MultiLineString,
    point: Position,
    units: Units,
) -> Result<NearestPointOnLineResult, Error> {
    nearest_point(
        lines.coordinates().iter().map(|line| &line[..]),
        point,
        units,
    )
}

fn nearest_point<'a>(
    lines: impl Iterator<Item = &'a [Position]>,
    point: Position,
    units: Units,
) -> Result<NearestPointOnLineResult, Error> {
    let mut closest = NearestPointOnLineResult {
        point: Position::new(f64::INFINITY, f64::INFINITY),
        distance: f64::INFINITY,
        location: f64::INFINITY,
        index: 0,
    };

    let mut length = 0.0;

    for coords in lines {
        for i in 0..coords.len() - 1 {
            let start = coords[i];
            let start_distance = distance(point, start, units)?;
            let stop = coords[i + 1];
            let stop_distance = distance(point, stop, units)?;

            let section_length = distance(start, stop, units)?;

            // two candidate perpendiculars, long enough to reach past the
            // segment from either side
            let height_distance = start_distance.max(stop_distance);
            let direction = bearing(start, stop);
            let perp1 = destination(point, height_distance, direction + 90.0, units)?;
            let perp2 = destination(point, height_distance, direction - 90.0, units)?;

            let intersect = segment_intersection(perp1, perp2, start, stop);

            if start_distance < closest.distance {
                closest = NearestPointOnLineResult {
                    point: start,
                    distance: start_distance,
                    location: length,
                    index: i,
                };
            }
            if stop_distance < closest.distance {
                closest = NearestPointOnLineResult {
                    point: stop,
                    distance: stop_distance,
                    location: length + section_length,
                    index: i + 1,
                };
            }
            if let Some(intersect) = intersect {
                let intersect_distance = distance(point, intersect, units)?;
                if intersect_distance < closest.distance {
                    closest = NearestPointOnLineResult {
                        point: intersect,
                        distance: intersect_distance,
                        location: length + distance(start, intersect, units)?,
                        index: i,
                    };
                }
            }

            length += section_length;
        }
    }

    Ok(closest)
}

/// Returns the subsection of the line between the projections of `start` and
/// `stop` onto it. The start and stop positions do not need to fall exactly
/// on the line.
pub fn line_slice(
    start: Position,
    stop: Position,
    line: &LineString,
) -> Result<LineString, Error> {
    let start_vertex = nearest_point_on_line(line, start, Units::Kilometers)?;
    let stop_vertex = nearest_point_on_line(line, stop, Units::Kilometers)?;

    let (first, last) = if start_vertex.index <= stop_vertex.index {
        (start_vertex, stop_vertex)
    } else {
        (stop_vertex, start_vertex)
    };

    let mut positions = vec![first.point];
    positions.extend_from_slice(&line.coordinates()[first.index + 1..=last.index]);
    positions.push(last.point);

    Ok(LineString::new(positions)?)
}
