use crate::{address::Address, geo::GeoPoint};

/// A labeled address that still has to be resolved into a
/// [`RouteStop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteWaypoint {
    pub label: String,
    pub address: Address,
}

/// One labeled location in the ordered sequence that is visited during
/// a planned route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub label: String,
    pub point: GeoPoint,
}

/// Outcome of resolving an ordered waypoint list.
///
/// Stops keep the relative order of the waypoints they were resolved
/// from. Waypoints that could not be resolved are dropped and only
/// counted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub stops: Vec<RouteStop>,
    pub failed: usize,
}

impl ResolvedRoute {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
