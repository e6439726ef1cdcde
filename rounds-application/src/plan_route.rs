use time::Date;

use rounds_core::{gateways::geocoding::GeocodingGateway, util::pacing::Pacer};
use rounds_map::{MapSurface, MapWidget, RouteScene};

use super::*;

/// Outcome of one planning run.
#[derive(Debug, Clone)]
pub struct RoutePlanned {
    /// The resolved stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Number of addresses that could not be resolved and were
    /// dropped.
    pub skipped: usize,
    /// Straight-line distance estimate over the resolved stops.
    pub distance: Distance,
    /// The assembled addresses before resolution, e.g. for building an
    /// external directions link.
    pub addresses: Vec<Address>,
}

/// Plans the route for one day of appointments.
///
/// Loads the day's appointments and the clients once, assembles the
/// ordered address list (optional start address, appointments in
/// time-of-day order, optional end address), resolves it sequentially
/// through the geocoder and estimates the total distance. Addresses
/// that cannot be resolved are skipped and reported in
/// [`RoutePlanned::skipped`].
pub async fn plan_route<R, G>(
    repo: &R,
    geocoder: &G,
    pacer: &Pacer,
    prefs: &RoutePrefs,
    date: Date,
) -> Result<RoutePlanned>
where
    R: AppointmentRepo + ClientRepo,
    G: GeocodingGateway + ?Sized,
{
    let appointments = repo.appointments_on(date)?;
    let clients = repo.all_clients()?;
    let waypoints = usecases::assemble_itinerary(&appointments, &clients, prefs, date);
    if waypoints.len() < 2 {
        return Err(usecases::Error::NotEnoughStops.into());
    }
    log::debug!("Resolving {} locations for {}", waypoints.len(), date);

    let resolved = usecases::resolve_route_stops(geocoder, &waypoints, pacer).await;
    if resolved.is_empty() {
        return Err(usecases::Error::NoLocationsResolved.into());
    }
    if resolved.failed > 0 {
        log::warn!(
            "Skipped {} of {} locations that could not be resolved",
            resolved.failed,
            waypoints.len()
        );
    }

    let distance = usecases::total_distance(&resolved.stops);
    log::info!(
        "Planned a route with {} stops, estimated {} mi",
        resolved.stops.len(),
        distance
    );

    Ok(RoutePlanned {
        stops: resolved.stops,
        skipped: resolved.failed,
        distance,
        addresses: waypoints
            .into_iter()
            .map(|waypoint| waypoint.address)
            .collect(),
    })
}

/// [`plan_route`] plus map rendering: centers the surface on the first
/// stop and applies the stops as markers connected by a route line.
pub async fn plan_and_render<R, G, W>(
    repo: &R,
    geocoder: &G,
    pacer: &Pacer,
    prefs: &RoutePrefs,
    date: Date,
    surface: &mut MapSurface<W>,
) -> Result<RoutePlanned>
where
    R: AppointmentRepo + ClientRepo,
    G: GeocodingGateway + ?Sized,
    W: MapWidget,
{
    let planned = plan_route(repo, geocoder, pacer, prefs, date).await?;
    if let Some(first) = planned.stops.first() {
        surface.recenter(first.point)?;
    }
    surface.apply_scene(RouteScene::from_stops(&planned.stops))?;
    Ok(planned)
}
