//! # rounds-map
//!
//! Declarative map rendering for Rounds.
//!
//! A [`MapSurface`] owns one [`MapWidget`] instance and reconciles the
//! desired [`RouteScene`] (markers plus an optional route line)
//! against the widget's live state, tolerant of the asynchronous style
//! loading lifecycle that map libraries typically have.

pub mod geojson;
mod scene;
mod surface;
mod widget;

pub use self::{
    scene::{MarkerSpec, RouteScene},
    surface::{Error, MapSurface, MapView, SurfaceState},
    widget::{MapWidget, MarkerHandle, ROUTE_LAYER_ID, ROUTE_SOURCE_ID},
};
