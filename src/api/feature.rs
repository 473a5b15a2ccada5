use crate::api::cell::HexCell;
use crate::util::error::HexGeoError;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use rayon::prelude::*;

/// Trait for converting collections of [`HexCell`]s to GeoJSON features.
///
/// Implemented for `[HexCell]` and `Vec<HexCell>`. Polygon construction is
/// parallelized, so rendering a large viewport worth of cells stays cheap.
pub trait HexCellsToFeatures {
    /// Converts cells to GeoJSON Features carrying id, q, and r properties.
    fn to_features(&self) -> Result<Vec<Feature>, HexGeoError>;
    /// Converts cells to a GeoJSON FeatureCollection.
    fn to_feature_collection(&self) -> Result<FeatureCollection, HexGeoError>;
}

impl HexCellsToFeatures for [HexCell] {
    fn to_features(&self) -> Result<Vec<Feature>, HexGeoError> {
        self.par_iter().map(cell_to_feature).collect()
    }

    fn to_feature_collection(&self) -> Result<FeatureCollection, HexGeoError> {
        Ok(FeatureCollection {
            bbox: None,
            features: self.to_features()?,
            foreign_members: None,
        })
    }
}

impl HexCellsToFeatures for Vec<HexCell> {
    fn to_features(&self) -> Result<Vec<Feature>, HexGeoError> {
        self.as_slice().to_features()
    }

    fn to_feature_collection(&self) -> Result<FeatureCollection, HexGeoError> {
        self.as_slice().to_feature_collection()
    }
}

fn cell_to_feature(cell: &HexCell) -> Result<Feature, HexGeoError> {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), JsonValue::from(cell.id.as_str()));
    properties.insert("q".to_string(), JsonValue::from(cell.q));
    properties.insert("r".to_string(), JsonValue::from(cell.r));

    Ok(Feature {
        bbox: None,
        geometry: Some(cell.to_geojson()?),
        id: Some(Id::String(cell.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    })
}
