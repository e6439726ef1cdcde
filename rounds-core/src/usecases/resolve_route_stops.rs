use super::prelude::*;
use crate::{gateways::geocoding::GeocodingGateway, util::pacing::Pacer};

/// Resolves an ordered waypoint list into route stops, strictly one
/// lookup at a time.
///
/// Lookups run sequentially in input order with the pacer's spacing
/// awaited between consecutive lookups. A waypoint whose address
/// cannot be resolved is dropped and counted; the batch always runs to
/// completion. Dropping the returned future cancels the lookup in
/// flight together with all remaining ones.
pub async fn resolve_route_stops<G>(
    geocoder: &G,
    waypoints: &[RouteWaypoint],
    pacer: &Pacer,
) -> ResolvedRoute
where
    G: GeocodingGateway + ?Sized,
{
    let mut resolved = ResolvedRoute::default();
    for (index, waypoint) in waypoints.iter().enumerate() {
        if index > 0 {
            pacer.pace().await;
        }
        match geocoder.resolve_address(&waypoint.address).await {
            Some(point) => {
                log::debug!("Resolved '{}' to {}", waypoint.address, point);
                resolved.stops.push(RouteStop {
                    label: waypoint.label.clone(),
                    point,
                });
            }
            None => {
                log::warn!("Could not resolve '{}'", waypoint.address);
                resolved.failed += 1;
            }
        }
    }
    resolved
}
