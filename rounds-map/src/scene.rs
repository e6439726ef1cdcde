use rounds_entities::{geo::GeoPoint, route::RouteStop};

/// A marker with an optional popup text.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub point: GeoPoint,
    pub popup: Option<String>,
}

/// The desired state of a map surface: markers plus an optional route
/// line, both in visiting order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteScene {
    pub markers: Vec<MarkerSpec>,
    pub line: Option<Vec<GeoPoint>>,
}

impl RouteScene {
    /// The scene for an ordered stop list: one labeled marker per stop
    /// plus a connecting line once there is more than one stop.
    pub fn from_stops(stops: &[RouteStop]) -> Self {
        let markers = stops
            .iter()
            .map(|stop| MarkerSpec {
                point: stop.point,
                popup: Some(stop.label.clone()),
            })
            .collect();
        let line = (stops.len() > 1).then(|| stops.iter().map(|stop| stop.point).collect());
        Self { markers, line }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.line.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(label: &str, lat: f64, lng: f64) -> RouteStop {
        RouteStop {
            label: label.into(),
            point: GeoPoint::from_lat_lng_deg(lat, lng),
        }
    }

    #[test]
    fn empty_scene_from_no_stops() {
        let scene = RouteScene::from_stops(&[]);
        assert!(scene.is_empty());
    }

    #[test]
    fn a_single_stop_has_no_line() {
        let scene = RouteScene::from_stops(&[stop("Anna", 40.0, -75.0)]);
        assert_eq!(1, scene.markers.len());
        assert_eq!(Some("Anna".into()), scene.markers[0].popup);
        assert_eq!(None, scene.line);
    }

    #[test]
    fn multiple_stops_are_connected_by_a_line() {
        let scene =
            RouteScene::from_stops(&[stop("Anna", 40.0, -75.0), stop("Ben", 41.0, -75.0)]);
        assert_eq!(2, scene.markers.len());
        let line = scene.line.unwrap();
        assert_eq!(2, line.len());
        assert_eq!(GeoPoint::from_lat_lng_deg(40.0, -75.0), line[0]);
    }
}
