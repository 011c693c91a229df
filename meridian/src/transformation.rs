//! Shape transformations: Bezier smoothing and circle polygons.

use crate::error::Error;
use crate::measurement::{compute_bbox, destination};
use crate::units::Units;
use meridian_types::{LineString, Polygon, Position};
use nalgebra::Vector3;

/// Returns a curved version of the line by applying a Bezier spline.
///
/// `duration` is the time in milliseconds between points in the output data
/// and `sharpness` is a measure of how curvy the path should be between
/// splines; the reference defaults are 10000 and 0.85.
///
/// The algorithm is a port of the implementation by
/// [Leszek Rybicki](http://leszek.rybicki.cc/) used in turfjs.
pub fn bezier_spline(line: &LineString, duration: u32, sharpness: f64) -> Result<LineString, Error> {
    LineString::new(bezier_spline_positions(
        line.coordinates(),
        duration,
        sharpness,
    ))
    .map_err(Error::from)
}

/// [`bezier_spline`] over a plain list of positions.
///
/// Altitudes participate in the interpolation (missing ones are treated as 0)
/// but the output positions are two-dimensional.
pub fn bezier_spline_positions(
    coords: &[Position],
    duration: u32,
    sharpness: f64,
) -> Vec<Position> {
    let points: Vec<Vector3<f64>> = coords
        .iter()
        .map(|p| Vector3::new(p.longitude(), p.latitude(), p.altitude().unwrap_or(0.0)))
        .collect();
    if points.len() < 2 {
        return coords.to_vec();
    }
    let last = points.len() - 1;

    let centers: Vec<Vector3<f64>> = points
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .collect();

    // one pair of cubic control points per input vertex
    let mut controls: Vec<(Vector3<f64>, Vector3<f64>)> = Vec::with_capacity(points.len());
    controls.push((points[0], points[0]));
    for i in 0..centers.len() - 1 {
        let d = points[i + 1] - (centers[i] + centers[i + 1]) / 2.0;
        controls.push((
            points[i + 1] * (1.0 - sharpness) + (centers[i] + d) * sharpness,
            points[i + 1] * (1.0 - sharpness) + (centers[i + 1] + d) * sharpness,
        ));
    }
    controls.push((points[last], points[last]));

    let bezier = |t: f64, p1: Vector3<f64>, c1: Vector3<f64>, c2: Vector3<f64>, p2: Vector3<f64>| {
        let t2 = t * t;
        let t3 = t2 * t;
        p2 * t3
            + c2 * (3.0 * t2 * (1.0 - t))
            + c1 * (3.0 * t * (1.0 - t) * (1.0 - t))
            + p1 * ((1.0 - t) * (1.0 - t) * (1.0 - t))
    };

    let pos = |time: u32| -> Vector3<f64> {
        let t = if time > duration { duration - 1 } else { time };

        let t2 = f64::from(t) / f64::from(duration);
        if t2 >= 1.0 {
            return points[last];
        }

        let n = (last as f64 * t2) as usize;
        let t1 = last as f64 * t2 - n as f64;
        bezier(t1, points[n], controls[n].1, controls[n + 1].0, points[n + 1])
    };

    (0..duration)
        .step_by(10)
        .chain(std::iter::once(duration))
        .filter(|i| (i / 100) % 2 == 0)
        .map(|i| {
            let p = pos(i);
            Position::new(p.x, p.y)
        })
        .collect()
}

/// Calculates the circle polygon of the given radius around `center`, with
/// `steps` vertices of precision. The reference defaults are 64 steps and
/// kilometer units.
pub fn circle(
    center: Position,
    radius: f64,
    steps: usize,
    units: Units,
) -> Result<Polygon, Error> {
    if steps < 4 {
        return Err(Error::InvalidArgument(
            "circle needs to have four or more coordinates".into(),
        ));
    }
    if radius <= 0.0 {
        return Err(Error::InvalidArgument(
            "radius must be a positive value".into(),
        ));
    }

    let mut ring = Vec::with_capacity(steps + 2);
    for step in 0..=steps {
        ring.push(destination(
            center,
            radius,
            (step as f64 * -360.0) / steps as f64,
            units,
        )?);
    }
    let first = ring[0];
    ring.push(first);

    let bbox = compute_bbox(&ring);
    Polygon::with_bbox(vec![ring], bbox).map_err(Error::from)
}
