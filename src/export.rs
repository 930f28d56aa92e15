//! GeoJSON export of detected hot spots.
//!
//! Each hot spot becomes a `Feature` whose geometry is its evaluation disc and
//! whose properties are:
//!
//! | property | value |
//! |---|---|
//! | `radius` | minimum enclosing radius of the member points |
//! | `centroid_x`, `centroid_y` | centre of the evaluation disc |
//! | `area` | disc area, 4 decimals |
//! | `n_points_contained` | member count |
//! | `point_indices` | member indices into the input points |

use crate::error::{MthsError, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use mths_types::hotspot::HotSpot;
use serde_json::json;

/// Converts one hot spot into a GeoJSON feature.
pub fn hot_spot_to_feature(hot_spot: &HotSpot) -> Feature {
    let mut rings = Vec::with_capacity(1 + hot_spot.geometry.interiors().len());
    rings.push(
        hot_spot
            .geometry
            .exterior()
            .coords()
            .map(|coord| vec![coord.x, coord.y])
            .collect::<Vec<_>>(),
    );
    for interior in hot_spot.geometry.interiors() {
        rings.push(
            interior
                .coords()
                .map(|coord| vec![coord.x, coord.y])
                .collect(),
        );
    }

    let mut properties = JsonObject::new();
    properties.insert("radius".to_string(), json!(hot_spot.min_radius));
    properties.insert("centroid_x".to_string(), json!(hot_spot.centroid_x()));
    properties.insert("centroid_y".to_string(), json!(hot_spot.centroid_y()));
    properties.insert("area".to_string(), json!(hot_spot.area));
    properties.insert(
        "n_points_contained".to_string(),
        json!(hot_spot.contained_count),
    );
    properties.insert(
        "point_indices".to_string(),
        json!(hot_spot.contained_indices),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(rings))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Converts hot spots into a `FeatureCollection`, preserving their order.
pub fn hot_spots_to_feature_collection(hot_spots: &[HotSpot]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: hot_spots.iter().map(hot_spot_to_feature).collect(),
        foreign_members: None,
    }
}

/// Converts hot spots into a GeoJSON `FeatureCollection` string.
pub fn hot_spots_to_geojson(hot_spots: &[HotSpot]) -> Result<String> {
    let collection = hot_spots_to_feature_collection(hot_spots);

    serde_json::to_string(&collection).map_err(|e| {
        MthsError::Serialization(format!("Failed to serialize hot spots: {}", e))
    })
}
