//! A headless [`MapWidget`] that renders into GeoJSON.

use std::collections::HashMap;

use ::geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use rounds_entities::geo::GeoPoint;

use crate::{
    scene::MarkerSpec,
    widget::{MapWidget, MarkerHandle},
};

/// Renders the applied features as a GeoJSON `FeatureCollection`
/// instead of drawing them on a screen.
///
/// Markers become `Point` features (the popup text is kept in a
/// `popup` property) and each line layer becomes a `LineString`
/// feature. Coordinates are emitted in GeoJSON longitude/latitude
/// order. The widget has no style to load, so it is ready immediately.
#[derive(Debug, Default)]
pub struct GeoJsonWidget {
    center: Option<GeoPoint>,
    zoom: Option<u8>,
    next_handle: u64,
    markers: Vec<(MarkerHandle, MarkerSpec)>,
    sources: HashMap<String, Vec<GeoPoint>>,
    layers: Vec<(String, String)>,
}

impl GeoJsonWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<GeoPoint> {
        self.center
    }

    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut features: Vec<_> = self
            .markers
            .iter()
            .map(|(_, marker)| marker_feature(marker))
            .collect();
        for (layer_id, source_id) in &self.layers {
            if let Some(points) = self.sources.get(source_id) {
                features.push(line_feature(layer_id, points));
            }
        }
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_feature_collection())
    }
}

// GeoJSON positions are longitude first.
fn position(point: GeoPoint) -> Vec<f64> {
    vec![point.lng().to_deg(), point.lat().to_deg()]
}

fn marker_feature(marker: &MarkerSpec) -> Feature {
    let mut properties = JsonObject::new();
    if let Some(popup) = &marker.popup {
        properties.insert("popup".to_owned(), popup.clone().into());
    }
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(position(marker.point)))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn line_feature(layer_id: &str, points: &[GeoPoint]) -> Feature {
    let coordinates = points.iter().copied().map(position).collect();
    let mut properties = JsonObject::new();
    properties.insert("layer".to_owned(), layer_id.to_owned().into());
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

impl MapWidget for GeoJsonWidget {
    fn is_style_loaded(&self) -> bool {
        true
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.center = Some(center);
        self.zoom = Some(zoom);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle::new(self.next_handle);
        self.markers.push((handle, marker.clone()));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.retain(|(h, _)| *h != handle);
    }

    fn add_line_source(&mut self, id: &str, points: &[GeoPoint]) {
        self.sources.insert(id.to_owned(), points.to_vec());
    }

    fn add_line_layer(&mut self, id: &str, source_id: &str) {
        self.layers.push((id.to_owned(), source_id.to_owned()));
    }

    fn remove_layer(&mut self, id: &str) {
        self.layers.retain(|(layer_id, _)| layer_id != id);
    }

    fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.iter().any(|(layer_id, _)| layer_id == id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }
}
