use rounds_entities::geo::GeoPoint;

use crate::scene::MarkerSpec;

/// Id of the route line source, as known to the widget.
pub const ROUTE_SOURCE_ID: &str = "route";
/// Id of the route line layer, as known to the widget.
pub const ROUTE_LAYER_ID: &str = "route-layer";

/// Handle of one marker that was added to a widget.
///
/// Minted by the widget; only valid for the widget that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Imperative surface of an underlying map rendering library.
///
/// `set_view` is safe to call at any time after construction. Adding
/// or removing markers, sources and layers is only defined once the
/// widget reports `is_style_loaded`; [`crate::MapSurface`] enforces
/// this gating, so implementations do not have to.
pub trait MapWidget {
    fn is_style_loaded(&self) -> bool;

    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);

    fn add_line_source(&mut self, id: &str, points: &[GeoPoint]);
    /// Adds a line layer that draws the source with the given id. The
    /// source must have been added before.
    fn add_line_layer(&mut self, id: &str, source_id: &str);
    fn remove_layer(&mut self, id: &str);
    fn remove_source(&mut self, id: &str);
    fn has_layer(&self, id: &str) -> bool;
    fn has_source(&self, id: &str) -> bool;
}
