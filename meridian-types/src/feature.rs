use crate::bounding_box::BoundingBox;
use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};

/// A geometry with an optional pre-computed bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    geometry: Option<Geometry>,
    bbox: Option<BoundingBox>,
}

impl Feature {
    /// Creates a feature wrapping the given geometry.
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self {
            geometry,
            bbox: None,
        }
    }

    /// Creates a feature with a bounding box attached.
    pub fn with_bbox(geometry: Option<Geometry>, bbox: BoundingBox) -> Self {
        Self {
            geometry,
            bbox: Some(bbox),
        }
    }

    /// The wrapped geometry, if any.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// The bounding box attached to the feature, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

impl From<Geometry> for Feature {
    fn from(value: Geometry) -> Self {
        Self::new(Some(value))
    }
}

/// A list of features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    bbox: Option<BoundingBox>,
}

impl FeatureCollection {
    /// Creates a collection from the given features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            bbox: None,
        }
    }

    /// The member features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The bounding box attached to the collection, if any.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}
