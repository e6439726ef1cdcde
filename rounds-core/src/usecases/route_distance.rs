use itertools::Itertools as _;

use super::prelude::*;

/// Sums up the great-circle distances between consecutive stops in
/// list order.
///
/// The result is a straight-line estimate between the stops, not a
/// road distance. Fewer than two stops yield [`Distance::ZERO`].
pub fn total_distance(stops: &[RouteStop]) -> Distance {
    stops
        .iter()
        .tuple_windows()
        .map(|(a, b)| GeoPoint::distance(a.point, b.point))
        .sum()
}

/// [`total_distance`] rendered with two decimal places, e.g. `"6.78"`.
pub fn total_distance_text(stops: &[RouteStop]) -> String {
    total_distance(stops).to_string()
}
