use itertools::Itertools as _;
use time::Date;

use super::prelude::*;

/// Label of the configured start address.
pub const START_LABEL: &str = "Start";
/// Label of the configured end address.
pub const END_LABEL: &str = "End";
/// Fallback label of an appointment stop without a known client name.
pub const STOP_LABEL: &str = "Stop";

/// Builds the ordered waypoint list for one day of appointments.
///
/// The optional start address comes first, followed by the given
/// day's appointments in time-of-day order, followed by the optional
/// end address. Each appointment contributes its location override or,
/// if there is none, the stored address of the linked client.
/// Appointments without a usable address are skipped.
pub fn assemble_itinerary(
    appointments: &[Appointment],
    clients: &[Client],
    prefs: &RoutePrefs,
    date: Date,
) -> Vec<RouteWaypoint> {
    let mut waypoints = Vec::with_capacity(appointments.len() + 2);

    if let Some(start) = prefs.start_address.clone().filter(|a| !a.is_empty()) {
        waypoints.push(RouteWaypoint {
            label: START_LABEL.into(),
            address: start,
        });
    }

    let on_date = appointments
        .iter()
        .filter(|appointment| appointment.date == date)
        .sorted_by_key(|appointment| appointment.time);
    for appointment in on_date {
        let client = clients
            .iter()
            .find(|client| client.id == appointment.client_id);
        let Some(address) = stop_address(appointment, client) else {
            log::debug!(
                "Skipping appointment {} without a usable address",
                appointment.id
            );
            continue;
        };
        waypoints.push(RouteWaypoint {
            label: stop_label(client),
            address,
        });
    }

    if let Some(end) = prefs.end_address.clone().filter(|a| !a.is_empty()) {
        waypoints.push(RouteWaypoint {
            label: END_LABEL.into(),
            address: end,
        });
    }

    waypoints
}

// The appointment's location override wins over the client's stored
// address.
fn stop_address(appointment: &Appointment, client: Option<&Client>) -> Option<Address> {
    appointment
        .location
        .clone()
        .filter(|address| !address.is_empty())
        .or_else(|| {
            client
                .and_then(|client| client.address.clone())
                .filter(|address| !address.is_empty())
        })
}

fn stop_label(client: Option<&Client>) -> String {
    client
        .map(|client| client.name.trim())
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| STOP_LABEL.to_owned())
}
