//! GeoJSON `Feature` projection shared by every mapped record.

use serde::Serialize;

/// Geometry of a projected record. Positions are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature<P>>,
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<I: IntoIterator<Item = Feature<P>>>(iter: I) -> Self {
        Self {
            kind: "FeatureCollection",
            features: iter.into_iter().collect(),
        }
    }
}

/// A record that can be drawn on the public map.
pub trait GeoFeature {
    type Properties: Serialize;

    fn geometry(&self) -> Geometry;

    fn properties(&self) -> Self::Properties;

    fn to_feature(&self) -> Feature<Self::Properties> {
        Feature::new(self.geometry(), self.properties())
    }
}

/// Project a record set, preserving its order
pub fn collect_features<T: GeoFeature>(records: &[T]) -> FeatureCollection<T::Properties> {
    records.iter().map(GeoFeature::to_feature).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Marker(f64, f64);

    impl GeoFeature for Marker {
        type Properties = serde_json::Value;

        fn geometry(&self) -> Geometry {
            Geometry::Point {
                coordinates: [self.1, self.0],
            }
        }

        fn properties(&self) -> Self::Properties {
            json!({ "lat": self.0 })
        }
    }

    #[test]
    fn test_point_feature_shape() {
        let feature = Marker(-26.5, 31.4).to_feature();
        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [31.4, -26.5] },
                "properties": { "lat": -26.5 }
            })
        );
    }

    #[test]
    fn test_line_string_shape() {
        let geometry = Geometry::LineString {
            coordinates: vec![[31.35, -26.47], [31.36, -26.48]],
        };
        assert_eq!(
            serde_json::to_value(&geometry).unwrap(),
            json!({ "type": "LineString", "coordinates": [[31.35, -26.47], [31.36, -26.48]] })
        );
    }

    #[test]
    fn test_collection_keeps_order() {
        let collection = collect_features(&[Marker(1.0, 2.0), Marker(3.0, 4.0)]);
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["properties"]["lat"], 1.0);
        assert_eq!(value["features"][1]["properties"]["lat"], 3.0);
    }

    #[test]
    fn test_empty_collection() {
        let collection: FeatureCollection<serde_json::Value> = std::iter::empty().collect();
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({ "type": "FeatureCollection", "features": [] })
        );
    }
}
