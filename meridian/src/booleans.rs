//! Boolean predicates over geometries.

use crate::measurement::bbox;
use meridian_types::{BoundingBox, MultiPolygon, Polygon, Position};

/// Determines if the point resides inside the polygon. The polygon can be
/// convex or concave, and may contain holes.
///
/// With `ignore_boundary` set, points lying exactly on the polygon boundary
/// are reported as outside.
pub fn boolean_point_in_polygon(
    point: Position,
    polygon: &Polygon,
    ignore_boundary: bool,
) -> bool {
    let bounds = polygon.bbox().copied().unwrap_or_else(|| bbox(polygon));
    in_polygons(
        point,
        &bounds,
        std::iter::once(polygon.coordinates()),
        ignore_boundary,
    )
}

/// Determines if the point resides inside any polygon of the multi-polygon.
pub fn boolean_point_in_multi_polygon(
    point: Position,
    multi_polygon: &MultiPolygon,
    ignore_boundary: bool,
) -> bool {
    let bounds = multi_polygon
        .bbox()
        .copied()
        .unwrap_or_else(|| bbox(multi_polygon));
    in_polygons(
        point,
        &bounds,
        multi_polygon.coordinates().iter().map(|rings| &rings[..]),
        ignore_boundary,
    )
}

fn in_polygons<'a>(
    point: Position,
    bounds: &BoundingBox,
    polygons: impl Iterator<Item = &'a [Vec<Position>]>,
    ignore_boundary: bool,
) -> bool {
    // quick elimination if the point is not inside the bbox
    if !in_bbox(point, bounds) {
        return false;
    }

    for rings in polygons {
        let Some((outer, holes)) = rings.split_first() else {
            continue;
        };
        if !in_ring(point, outer, ignore_boundary) {
            continue;
        }
        // a point inside a hole (with the boundary sense inverted) is
        // excluded from this polygon part
        let in_hole = holes
            .iter()
            .any(|hole| in_ring(point, hole, !ignore_boundary));
        if !in_hole {
            return true;
        }
    }

    false
}

/// Even-odd ray casting over a single ring, with an explicit on-segment check
/// so boundary points honor `ignore_boundary`.
fn in_ring(point: Position, ring: &[Position], ignore_boundary: bool) -> bool {
    let px = point.longitude();
    let py = point.latitude();

    // drop a duplicated closing vertex
    let ring = if ring.len() > 1 && ring[0].same_location(&ring[ring.len() - 1]) {
        &ring[..ring.len() - 1]
    } else {
        ring
    };

    let mut is_inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let xi = ring[i].longitude();
        let yi = ring[i].latitude();
        let xj = ring[j].longitude();
        let yj = ring[j].latitude();

        let on_boundary = py * (xi - xj) + yi * (xj - px) + yj * (px - xi) == 0.0
            && (xi - px) * (xj - px) <= 0.0
            && (yi - py) * (yj - py) <= 0.0;
        if on_boundary {
            return !ignore_boundary;
        }

        let intersect = (yi > py) != (yj > py) && px < ((xj - xi) * (py - yi)) / (yj - yi) + xi;
        if intersect {
            is_inside = !is_inside;
        }

        j = i;
    }

    is_inside
}

fn in_bbox(point: Position, bbox: &BoundingBox) -> bool {
    bbox.southwest().longitude() <= point.longitude()
        && bbox.southwest().latitude() <= point.latitude()
        && bbox.northeast().longitude() >= point.longitude()
        && bbox.northeast().latitude() >= point.latitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(rings: Vec<Vec<(f64, f64)>>) -> Polygon {
        Polygon::new(
            rings
                .into_iter()
                .map(|ring| {
                    ring.into_iter()
                        .map(|(lon, lat)| Position::new(lon, lat))
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn simple_polygon() {
        let poly = polygon(vec![vec![
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 0.0),
            (0.0, 0.0),
        ]]);

        assert!(boolean_point_in_polygon(
            Position::new(50.0, 50.0),
            &poly,
            false
        ));
        assert!(!boolean_point_in_polygon(
            Position::new(140.0, 150.0),
            &poly,
            false
        ));
    }

    #[test]
    fn concave_polygon() {
        let poly = polygon(vec![vec![
            (0.0, 0.0),
            (50.0, 50.0),
            (0.0, 100.0),
            (100.0, 100.0),
            (100.0, 0.0),
            (0.0, 0.0),
        ]]);

        assert!(boolean_point_in_polygon(
            Position::new(75.0, 75.0),
            &poly,
            false
        ));
        assert!(!boolean_point_in_polygon(
            Position::new(25.0, 50.0),
            &poly,
            false
        ));
    }

    #[test]
    fn vertex_point_toggles_with_boundary_setting() {
        let poly = polygon(vec![vec![
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 0.0),
            (0.0, 0.0),
        ]]);
        let vertex = Position::new(0.0, 100.0);

        assert!(boolean_point_in_polygon(vertex, &poly, false));
        assert!(!boolean_point_in_polygon(vertex, &poly, true));
    }

    #[test]
    fn boundary_cases_match_ray_casting_semantics() {
        let poly1 = polygon(vec![vec![
            (10.0, 10.0),
            (30.0, 20.0),
            (50.0, 10.0),
            (30.0, 0.0),
            (10.0, 10.0),
        ]]);
        let poly2 = polygon(vec![vec![
            (10.0, 0.0),
            (30.0, 20.0),
            (50.0, 0.0),
            (30.0, 10.0),
            (10.0, 0.0),
        ]]);
        let poly3 = polygon(vec![vec![
            (10.0, 0.0),
            (30.0, 20.0),
            (50.0, 0.0),
            (30.0, -20.0),
            (10.0, 0.0),
        ]]);

        for ignore_boundary in [false, true] {
            let boundary_included = !ignore_boundary;
            let cases = [
                (&poly1, (10.0, 10.0), boundary_included),
                (&poly1, (30.0, 20.0), boundary_included),
                (&poly1, (50.0, 10.0), boundary_included),
                (&poly1, (30.0, 10.0), true),
                (&poly1, (0.0, 10.0), false),
                (&poly1, (60.0, 10.0), false),
                (&poly1, (30.0, -10.0), false),
                (&poly1, (30.0, 30.0), false),
                (&poly2, (30.0, 0.0), false),
                (&poly2, (0.0, 0.0), false),
                (&poly2, (60.0, 0.0), false),
                (&poly3, (30.0, 0.0), true),
                (&poly3, (0.0, 0.0), false),
                (&poly3, (60.0, 0.0), false),
            ];

            for (i, (poly, (lon, lat), expected)) in cases.iter().enumerate() {
                assert_eq!(
                    boolean_point_in_polygon(Position::new(*lon, *lat), poly, ignore_boundary),
                    *expected,
                    "case {i}, ignore_boundary: {ignore_boundary}"
                );
            }
        }
    }

    #[test]
    fn attached_bbox_drives_the_fast_reject() {
        let ring = vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 100.0),
            Position::new(100.0, 100.0),
            Position::new(100.0, 0.0),
            Position::new(0.0, 0.0),
        ];
        // a pre-computed box covering only the western half
        let clipped = BoundingBox::new(0.0, 0.0, 50.0, 100.0);
        let poly = Polygon::with_bbox(vec![ring], clipped).unwrap();

        assert!(boolean_point_in_polygon(
            Position::new(25.0, 50.0),
            &poly,
            false
        ));
        // inside the ring but outside the attached box
        assert!(!boolean_point_in_polygon(
            Position::new(75.0, 50.0),
            &poly,
            false
        ));
    }

    #[test]
    fn point_in_hole_is_outside() {
        let poly = polygon(vec![
            vec![
                (0.0, 20.0),
                (20.0, 40.0),
                (40.0, 20.0),
                (20.0, 0.0),
                (0.0, 20.0),
            ],
            vec![
                (10.0, 20.0),
                (20.0, 30.0),
                (30.0, 20.0),
                (20.0, 10.0),
                (10.0, 20.0),
            ],
        ]);

        // center of the hole
        assert!(!boolean_point_in_polygon(
            Position::new(20.0, 20.0),
            &poly,
            false
        ));
        // inside the outer ring, outside the hole
        assert!(boolean_point_in_polygon(
            Position::new(5.0, 20.0),
            &poly,
            false
        ));
        // the hole boundary itself still belongs to the polygon
        assert!(boolean_point_in_polygon(
            Position::new(10.0, 20.0),
            &poly,
            false
        ));
    }

    #[test]
    fn multi_polygon_with_hole() {
        let multi = MultiPolygon::new(vec![
            vec![vec![
                Position::new(0.0, 0.0),
                Position::new(10.0, 0.0),
                Position::new(10.0, 10.0),
                Position::new(0.0, 10.0),
                Position::new(0.0, 0.0),
            ]],
            vec![
                vec![
                    Position::new(20.0, 0.0),
                    Position::new(40.0, 0.0),
                    Position::new(40.0, 20.0),
                    Position::new(20.0, 20.0),
                    Position::new(20.0, 0.0),
                ],
                vec![
                    Position::new(25.0, 5.0),
                    Position::new(35.0, 5.0),
                    Position::new(35.0, 15.0),
                    Position::new(25.0, 15.0),
                    Position::new(25.0, 5.0),
                ],
            ],
        ])
        .unwrap();

        assert!(boolean_point_in_multi_polygon(
            Position::new(5.0, 5.0),
            &multi,
            false
        ));
        assert!(boolean_point_in_multi_polygon(
            Position::new(22.0, 10.0),
            &multi,
            false
        ));
        // inside the second polygon's hole
        assert!(!boolean_point_in_multi_polygon(
            Position::new(30.0, 10.0),
            &multi,
            false
        ));
        assert!(!boolean_point_in_multi_polygon(
            Position::new(15.0, 5.0),
            &multi,
            false
        ));
    }
}
