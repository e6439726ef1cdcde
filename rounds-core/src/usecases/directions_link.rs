use itertools::Itertools as _;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::prelude::*;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Builds a deep link into the external map provider's driving
/// directions view.
///
/// The first address becomes the origin, the last one the destination
/// and everything in between the ordered waypoint list. The link is
/// only assembled, never fetched or validated.
pub fn build_directions_link(addresses: &[Address]) -> Result<String> {
    let addresses: Vec<_> = addresses
        .iter()
        .filter(|address| !address.is_empty())
        .collect();
    let [origin, intermediate @ .., destination] = addresses.as_slice() else {
        return Err(Error::NotEnoughStops);
    };

    let mut link = format!(
        "{DIRECTIONS_BASE_URL}&origin={}&destination={}",
        encode(origin),
        encode(destination)
    );
    if !intermediate.is_empty() {
        let waypoints = intermediate.iter().map(|address| encode(address)).join("|");
        link.push_str("&waypoints=");
        link.push_str(&waypoints);
    }
    link.push_str("&travelmode=driving");
    Ok(link)
}

fn encode(address: &Address) -> String {
    utf8_percent_encode(address.as_str(), NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(raw: &[&str]) -> Vec<Address> {
        raw.iter().copied().map(Address::from).collect()
    }

    #[test]
    fn fewer_than_two_addresses_are_rejected() {
        assert!(matches!(
            build_directions_link(&[]),
            Err(Error::NotEnoughStops)
        ));
        assert!(matches!(
            build_directions_link(&addresses(&["12 Main St"])),
            Err(Error::NotEnoughStops)
        ));
        // Blank addresses do not count.
        assert!(matches!(
            build_directions_link(&addresses(&["12 Main St", "  "])),
            Err(Error::NotEnoughStops)
        ));
    }

    #[test]
    fn origin_and_destination_without_waypoints() {
        let link = build_directions_link(&addresses(&["1 First St", "2 Second St"])).unwrap();
        assert_eq!(
            "https://www.google.com/maps/dir/?api=1\
             &origin=1%20First%20St\
             &destination=2%20Second%20St\
             &travelmode=driving",
            link
        );
        assert!(!link.contains("waypoints"));
    }

    #[test]
    fn intermediate_stops_become_ordered_waypoints() {
        let link = build_directions_link(&addresses(&[
            "Home Base",
            "1 First St",
            "2 Second St",
            "Home Base",
        ]))
        .unwrap();
        assert_eq!(
            "https://www.google.com/maps/dir/?api=1\
             &origin=Home%20Base\
             &destination=Home%20Base\
             &waypoints=1%20First%20St|2%20Second%20St\
             &travelmode=driving",
            link
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let link =
            build_directions_link(&addresses(&["Café & Bar, 5th Ave", "2 Second St"])).unwrap();
        assert!(link.contains("origin=Caf%C3%A9%20%26%20Bar%2C%205th%20Ave"));
    }
}
