//! Grid generation over a bounding-box extent.

use crate::error::Error;
use crate::units::{convert_length, Units};
use meridian_types::{BoundingBox, Feature, FeatureCollection, Geometry, Polygon, Position};

/// Creates a square grid within the bounding box.
///
/// Cells of `cell_width` by `cell_height` (measured in `units`, converted to
/// degrees) are packed into the extent and centered within it, so the margin
/// left over is split evenly on both sides. Cells are emitted column by
/// column, west to east, each column running south to north.
pub fn square_grid(
    bbox: &BoundingBox,
    cell_width: f64,
    cell_height: f64,
    units: Units,
) -> Result<FeatureCollection, Error> {
    let west = bbox.southwest().longitude();
    let south = bbox.southwest().latitude();
    let east = bbox.northeast().longitude();
    let north = bbox.northeast().latitude();

    let bbox_width = east - west;
    let cell_width_deg = convert_length(cell_width, units, Units::Degrees)?;

    let bbox_height = north - south;
    let cell_height_deg = convert_length(cell_height, units, Units::Degrees)?;

    let columns = (bbox_width.abs() / cell_width_deg).floor();
    let rows = (bbox_height.abs() / cell_height_deg).floor();

    let delta_x = (bbox_width - columns * cell_width_deg) / 2.0;
    let delta_y = (bbox_height - rows * cell_height_deg) / 2.0;

    let mut features = Vec::with_capacity((columns * rows) as usize);
    let mut current_x = west + delta_x;
    for _ in 0..columns as u64 {
        let mut current_y = south + delta_y;
        for _ in 0..rows as u64 {
            let ring = vec![
                Position::new(current_x, current_y),
                Position::new(current_x, current_y + cell_height_deg),
                Position::new(current_x + cell_width_deg, current_y + cell_height_deg),
                Position::new(current_x + cell_width_deg, current_y),
                Position::new(current_x, current_y),
            ];
            features.push(Feature::from(Geometry::from(Polygon::new(vec![ring])?)));
            current_y += cell_height_deg;
        }
        current_x += cell_width_deg;
    }

    Ok(FeatureCollection::new(features))
}
