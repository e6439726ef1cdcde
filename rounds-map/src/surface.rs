use thiserror::Error;

use rounds_entities::geo::GeoPoint;

use crate::{
    scene::RouteScene,
    widget::{MapWidget, MarkerHandle, ROUTE_LAYER_ID, ROUTE_SOURCE_ID},
};

/// Center and zoom of a mounted widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl MapView {
    pub const fn new(center: GeoPoint, zoom: u8) -> Self {
        Self { center, zoom }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The map surface is not mounted")]
    NotMounted,
}

/// Lifecycle state of a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No widget is mounted.
    Uninitialized,
    /// A widget is mounted but still loading its style.
    Initializing,
    /// The widget is ready to receive features.
    Ready,
}

/// Owns one map widget and applies route scenes to it declaratively.
///
/// The surface moves from `Uninitialized` through `Initializing` to
/// `Ready` and back to `Uninitialized` on [`MapSurface::unmount`].
/// While the widget is still loading its style, at most one scene is
/// parked in a pending slot (a newer scene replaces an older pending
/// one) and applied exactly once when the widget reports
/// [`MapSurface::style_did_load`]. Centers and zoom levels are never
/// mutated on a loading widget; they are recorded and applied when the
/// widget becomes ready.
#[derive(Debug)]
pub struct MapSurface<W> {
    inner: Inner<W>,
}

#[derive(Debug)]
enum Inner<W> {
    Uninitialized,
    Initializing {
        widget: W,
        view: MapView,
        pending: Option<RouteScene>,
    },
    Ready {
        widget: W,
        view: MapView,
        applied: Applied,
    },
}

impl<W> Default for Inner<W> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

/// Features that were added to the widget and have to be removed
/// before the next scene is applied.
#[derive(Debug, Default)]
struct Applied {
    markers: Vec<MarkerHandle>,
}

impl<W: MapWidget> MapSurface<W> {
    pub const fn new() -> Self {
        Self {
            inner: Inner::Uninitialized,
        }
    }

    pub fn state(&self) -> SurfaceState {
        match &self.inner {
            Inner::Uninitialized => SurfaceState::Uninitialized,
            Inner::Initializing { .. } => SurfaceState::Initializing,
            Inner::Ready { .. } => SurfaceState::Ready,
        }
    }

    pub fn widget(&self) -> Option<&W> {
        match &self.inner {
            Inner::Uninitialized => None,
            Inner::Initializing { widget, .. } | Inner::Ready { widget, .. } => Some(widget),
        }
    }

    /// The recorded view, i.e. the view the widget shows once it is
    /// ready.
    pub fn view(&self) -> Option<MapView> {
        match &self.inner {
            Inner::Uninitialized => None,
            Inner::Initializing { view, .. } | Inner::Ready { view, .. } => Some(*view),
        }
    }

    /// Takes ownership of a freshly constructed widget.
    ///
    /// A still-mounted widget is torn down and dropped first:
    /// re-initialization always replaces the whole widget instead of
    /// mutating center, zoom or tile source on a live one. The given
    /// view is applied as soon as the widget is ready.
    pub fn mount(&mut self, mut widget: W, view: MapView) {
        if self.state() != SurfaceState::Uninitialized {
            log::debug!("Replacing the mounted map widget");
            self.unmount();
        }
        self.inner = if widget.is_style_loaded() {
            widget.set_view(view.center, view.zoom);
            Inner::Ready {
                widget,
                view,
                applied: Applied::default(),
            }
        } else {
            Inner::Initializing {
                widget,
                view,
                pending: None,
            }
        };
    }

    /// Tears the widget down and returns it for disposal.
    ///
    /// Every feature that was applied is removed first, so mounting
    /// and unmounting leave no residue on the widget.
    pub fn unmount(&mut self) -> Option<W> {
        match std::mem::take(&mut self.inner) {
            Inner::Uninitialized => None,
            // Nothing was applied yet.
            Inner::Initializing { widget, .. } => Some(widget),
            Inner::Ready {
                mut widget,
                mut applied,
                ..
            } => {
                remove_features(&mut widget, &mut applied);
                Some(widget)
            }
        }
    }

    /// Signals that the mounted widget finished loading its style.
    ///
    /// Applies the recorded view and the scene parked while loading,
    /// exactly once. Calling this in any other state is a no-op: map
    /// libraries may emit the corresponding event again, e.g. after a
    /// remount.
    pub fn style_did_load(&mut self) {
        self.inner = match std::mem::take(&mut self.inner) {
            Inner::Initializing {
                mut widget,
                view,
                pending,
            } => {
                widget.set_view(view.center, view.zoom);
                let mut applied = Applied::default();
                if let Some(scene) = pending {
                    apply_features(&mut widget, &mut applied, &scene);
                }
                Inner::Ready {
                    widget,
                    view,
                    applied,
                }
            }
            other => other,
        };
    }

    /// Reconciles the widget with the given scene.
    ///
    /// Idempotent: previously applied features are removed before the
    /// new ones are added, so repeated application never accumulates
    /// markers, sources or layers. While the widget is still loading
    /// its style the scene is parked and applied on
    /// [`MapSurface::style_did_load`]; a newer scene replaces an older
    /// pending one.
    pub fn apply_scene(&mut self, scene: RouteScene) -> Result<(), Error> {
        match &mut self.inner {
            Inner::Uninitialized => Err(Error::NotMounted),
            Inner::Initializing { pending, .. } => {
                if pending.is_some() {
                    log::debug!("Replacing the pending route scene");
                }
                *pending = Some(scene);
                Ok(())
            }
            Inner::Ready {
                widget, applied, ..
            } => {
                apply_features(widget, applied, &scene);
                Ok(())
            }
        }
    }

    /// Re-centers and re-zooms the widget.
    ///
    /// While the widget is still loading its style, only the recorded
    /// view changes; it is applied on [`MapSurface::style_did_load`].
    pub fn set_view(&mut self, center: GeoPoint, zoom: u8) -> Result<(), Error> {
        match &mut self.inner {
            Inner::Uninitialized => Err(Error::NotMounted),
            Inner::Initializing { view, .. } => {
                *view = MapView::new(center, zoom);
                Ok(())
            }
            Inner::Ready { widget, view, .. } => {
                *view = MapView::new(center, zoom);
                widget.set_view(center, zoom);
                Ok(())
            }
        }
    }

    /// [`MapSurface::set_view`] keeping the current zoom level.
    pub fn recenter(&mut self, center: GeoPoint) -> Result<(), Error> {
        let view = self.view().ok_or(Error::NotMounted)?;
        self.set_view(center, view.zoom)
    }
}

impl<W: MapWidget> Default for MapSurface<W> {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_features<W: MapWidget>(widget: &mut W, applied: &mut Applied, scene: &RouteScene) {
    remove_features(widget, applied);
    for marker in &scene.markers {
        applied.markers.push(widget.add_marker(marker));
    }
    if let Some(line) = &scene.line {
        widget.add_line_source(ROUTE_SOURCE_ID, line);
        widget.add_line_layer(ROUTE_LAYER_ID, ROUTE_SOURCE_ID);
    }
}

fn remove_features<W: MapWidget>(widget: &mut W, applied: &mut Applied) {
    // The layer has to go before the source it references.
    if widget.has_layer(ROUTE_LAYER_ID) {
        widget.remove_layer(ROUTE_LAYER_ID);
    }
    if widget.has_source(ROUTE_SOURCE_ID) {
        widget.remove_source(ROUTE_SOURCE_ID);
    }
    for handle in applied.markers.drain(..) {
        widget.remove_marker(handle);
    }
}
