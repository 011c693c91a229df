//! Great-circle routing between two positions.

use crate::error::Error;
use crate::measurement::{compute_bbox, distance};
use crate::units::{degrees, radians, Units};
use meridian_types::{Geometry, LineString, MultiLineString, Position};
use nalgebra::Vector3;

const ANTIMERIDIAN_POS: f64 = 180.0;
const ANTIMERIDIAN_NEG: f64 = -180.0;

/// Calculates a great-circle route between `start` and `end` as a
/// [`LineString`] of `point_count` positions (including both endpoints),
/// with the bounding box attached.
///
/// Wherever consecutive interpolated positions jump across the ±180°
/// meridian by more than `360 - antimeridian_offset` degrees, the arc is
/// split and synthetic vertices are inserted exactly at ±180°; the result is
/// then a [`MultiLineString`]. The reference defaults are 100 positions and
/// an offset of 10 degrees.
///
/// Fails for antipodal inputs, where no single route exists.
pub fn great_circle(
    start: Position,
    end: Position,
    point_count: usize,
    antimeridian_offset: f64,
) -> Result<Geometry, Error> {
    let delta_longitude = start.longitude() - end.longitude();

    // the antipode of (lon, lat) is (lon ± 180, -lat)
    if (start.latitude() + end.latitude()).abs() == 0.0
        && delta_longitude.abs() % 360.0 == ANTIMERIDIAN_POS
    {
        return Err(Error::InvalidArgument(format!(
            "input {start:?} and {end:?} are diametrically opposite, thus there is no single route but rather infinite"
        )));
    }

    let arc_distance = distance(start, end, Units::Radians)?;

    let mut arc = Vec::with_capacity(point_count);
    arc.push(start);
    for i in 1..point_count.saturating_sub(1) {
        arc.push(intermediate_coordinate(
            start,
            end,
            arc_distance,
            (i + 1) as f64 / (point_count - 1) as f64,
        ));
    }
    arc.push(end);

    let mut parts = split_at_antimeridian(&arc, antimeridian_offset);
    // degenerate fragments cannot form a line string
    parts.retain(|part| part.len() >= 2);

    if parts.len() == 1 {
        let coordinates = parts.remove(0);
        let bbox = compute_bbox(&coordinates);
        Ok(Geometry::LineString(LineString::with_bbox(
            coordinates,
            bbox,
        )?))
    } else {
        let flattened: Vec<Position> = parts.iter().flatten().copied().collect();
        let bbox = compute_bbox(&flattened);
        Ok(Geometry::MultiLineString(MultiLineString::with_bbox(
            parts, bbox,
        )?))
    }
}

/// Intermediate point on the great circle through `start` and `end`, by
/// spherical linear interpolation of the endpoints' unit vectors.
///
/// See <http://www.edwilliams.org/avform.htm#Intermediate>.
fn intermediate_coordinate(
    start: Position,
    end: Position,
    arc_distance: f64,
    fraction: f64,
) -> Position {
    let lon1 = radians(start.longitude());
    let lon2 = radians(end.longitude());
    let lat1 = radians(start.latitude());
    let lat2 = radians(end.latitude());

    let a = (((1.0 - fraction) * arc_distance).sin()) / arc_distance.sin();
    let b = ((fraction * arc_distance).sin()) / arc_distance.sin();

    let v1 = Vector3::new(
        lat1.cos() * lon1.cos(),
        lat1.cos() * lon1.sin(),
        lat1.sin(),
    );
    let v2 = Vector3::new(
        lat2.cos() * lon2.cos(),
        lat2.cos() * lon2.sin(),
        lat2.sin(),
    );
    let v = v1 * a + v2 * b;

    let lat = degrees(v.z.atan2((v.x.powi(2) + v.y.powi(2)).sqrt()));
    let lon = degrees(v.y.atan2(v.x));
    Position::new(lon, lat)
}

/// Re-splits an interpolated arc into one or more coordinate lists wherever
/// it jumps across the antimeridian.
fn split_at_antimeridian(arc: &[Position], antimeridian_offset: f64) -> Vec<Vec<Position>> {
    let border_east = ANTIMERIDIAN_POS - antimeridian_offset;
    let border_west = ANTIMERIDIAN_NEG + antimeridian_offset;
    let diff_space = 360.0 - antimeridian_offset;

    let passes_antimeridian = arc.windows(2).any(|pair| {
        let diff = (pair[0].longitude() - pair[1].longitude()).abs();
        diff > diff_space
            && ((pair[0].longitude() > border_east && pair[1].longitude() < border_west)
                || (pair[1].longitude() > border_east && pair[0].longitude() < border_west))
    });

    let max_small_diff = arc
        .windows(2)
        .map(|pair| (pair[0].longitude() - pair[1].longitude()).abs())
        .filter(|diff| *diff <= diff_space)
        .fold(0.0, f64::max);

    let mut parts: Vec<Vec<Position>> = Vec::new();
    if !passes_antimeridian || max_small_diff >= antimeridian_offset {
        parts.push(arc.to_vec());
        return parts;
    }

    let mut current: Vec<Position> = Vec::new();
    for (k, position) in arc.iter().enumerate() {
        if k > 0 && (position.longitude() - arc[k - 1].longitude()).abs() > diff_space {
            let previous = arc[k - 1];
            let mut lon1 = previous.longitude();
            let mut lat1 = previous.latitude();
            let mut lon2 = position.longitude();
            let mut lat2 = position.latitude();

            // an interpolated vertex landing exactly on ±180 is replaced by
            // its mirror and the arc continues from the next vertex
            if (ANTIMERIDIAN_NEG + 1.0..border_west).contains(&lon1)
                && lon2 == ANTIMERIDIAN_POS
                && k + 1 < arc.len()
            {
                current.push(Position::new(ANTIMERIDIAN_NEG, position.latitude()));
                current.push(arc[k + 1]);
                continue;
            } else if lon1 > border_east
                && lon1 < ANTIMERIDIAN_POS
                && lon2 == ANTIMERIDIAN_POS
                && k + 1 < arc.len()
            {
                current.push(Position::new(ANTIMERIDIAN_POS, position.latitude()));
                current.push(arc[k + 1]);
                continue;
            }

            if lon1 < border_west && lon2 > border_east {
                std::mem::swap(&mut lon1, &mut lon2);
                std::mem::swap(&mut lat1, &mut lat2);
            }
            if lon1 > border_east && lon2 < border_west {
                lon2 += 360.0;
            }

            if lon1 <= ANTIMERIDIAN_POS && ANTIMERIDIAN_POS <= lon2 && lon1 < lon2 {
                let ratio = (ANTIMERIDIAN_POS - lon1) / (lon2 - lon1);
                let lat = ratio * lat2 + (1.0 - ratio) * lat1;
                let (leaving, entering) = if previous.longitude() > border_east {
                    (ANTIMERIDIAN_POS, ANTIMERIDIAN_NEG)
                } else {
                    (ANTIMERIDIAN_NEG, ANTIMERIDIAN_POS)
                };
                current.push(Position::new(leaving, lat));
                parts.push(std::mem::take(&mut current));
                current.push(Position::new(entering, lat));
            } else {
                parts.push(std::mem::take(&mut current));
            }
        }
        current.push(*position);
    }
    parts.push(current);

    parts
}
