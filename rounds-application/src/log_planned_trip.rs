use itertools::Itertools as _;
use time::Date;

use super::{plan_route::RoutePlanned, *};
use crate::usecases::NewMileageEntry;

/// Records a planned route in the mileage log.
///
/// The purpose names the number of stops, the notes keep the stop
/// labels in visiting order.
pub fn log_planned_trip<R>(repo: &R, planned: &RoutePlanned, date: Date) -> Result<MileageEntry>
where
    R: MileageRepo,
{
    let purpose = format!("Planned route ({} stops)", planned.stops.len());
    let notes = planned
        .stops
        .iter()
        .map(|stop| stop.label.as_str())
        .join(" -> ");
    let entry = usecases::add_mileage_entry(
        repo,
        NewMileageEntry {
            date,
            distance: planned.distance.to_miles(),
            purpose: Some(purpose),
            notes: Some(notes),
        },
    )?;
    log::info!("Logged {} mi for {}", entry.distance, date);
    Ok(entry)
}
