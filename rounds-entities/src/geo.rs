use std::{fmt, iter::Sum, ops::Add};

/// Mean radius of the Earth in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Geographical latitude in degrees.
///
/// Values are always finite and within `-90.0..=90.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MAX: f64 = 90.0;
    pub const DEG_MIN: f64 = -90.0;

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        (deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg)).then_some(Self(deg))
    }

    /// Unchecked variant of [`LatCoord::try_from_deg`] for values that
    /// are known to be valid, e.g. literals.
    pub fn from_deg(deg: f64) -> Self {
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
///
/// Values are always finite and within `-180.0..=180.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MAX: f64 = 180.0;
    pub const DEG_MIN: f64 = -180.0;

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        (deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg)).then_some(Self(deg))
    }

    /// Unchecked variant of [`LngCoord::try_from_deg`] for values that
    /// are known to be valid, e.g. literals.
    pub fn from_deg(deg: f64) -> Self {
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location, e.g. the resolved position of an address.
///
/// Instances can only be obtained through the checked constructors, so
/// every point carries valid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl GeoPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }

    /// Unchecked variant of [`GeoPoint::try_from_lat_lng_deg`] for
    /// values that are known to be valid, e.g. literals.
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// The great-circle distance between two points on the Earth's
    /// surface according to the haversine formula.
    ///
    /// This is a straight-line estimate, not a road distance.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: Self, p2: Self) -> Distance {
        let dlat_sin = ((p2.lat.to_rad() - p1.lat.to_rad()) / 2.0).sin();
        let dlng_sin = ((p2.lng.to_rad() - p1.lng.to_rad()) / 2.0).sin();

        let a = dlat_sin * dlat_sin
            + p1.lat.to_rad().cos() * p2.lat.to_rad().cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance(EARTH_RADIUS_MILES * c)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A travel distance in miles.
///
/// Always finite and non-negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Self = Self(0.0);

    pub fn try_from_miles(miles: f64) -> Option<Self> {
        (miles.is_finite() && miles >= 0.0).then_some(Self(miles))
    }

    /// Unchecked variant of [`Distance::try_from_miles`] for values
    /// that are known to be valid, e.g. literals.
    pub fn from_miles(miles: f64) -> Self {
        debug_assert!(miles.is_finite());
        debug_assert!(miles >= 0.0);
        Self(miles)
    }

    pub const fn to_miles(self) -> f64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Distance {
    /// Formats the distance with two decimal places, e.g. `12.34`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn latitude_bounds() {
        assert!(LatCoord::try_from_deg(LatCoord::DEG_MIN).is_some());
        assert!(LatCoord::try_from_deg(LatCoord::DEG_MAX).is_some());
        assert!(LatCoord::try_from_deg(0.0).is_some());
        assert!(LatCoord::try_from_deg(LatCoord::DEG_MIN - 0.000_001).is_none());
        assert!(LatCoord::try_from_deg(LatCoord::DEG_MAX + 0.000_001).is_none());
        assert!(LatCoord::try_from_deg(f64::NAN).is_none());
        assert!(LatCoord::try_from_deg(f64::INFINITY).is_none());
    }

    #[test]
    fn longitude_bounds() {
        assert!(LngCoord::try_from_deg(LngCoord::DEG_MIN).is_some());
        assert!(LngCoord::try_from_deg(LngCoord::DEG_MAX).is_some());
        assert!(LngCoord::try_from_deg(0.0).is_some());
        assert!(LngCoord::try_from_deg(LngCoord::DEG_MIN - 0.000_001).is_none());
        assert!(LngCoord::try_from_deg(LngCoord::DEG_MAX + 0.000_001).is_none());
        assert!(LngCoord::try_from_deg(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn no_distance_between_identical_points() {
        let p = GeoPoint::from_lat_lng_deg(40.7128, -74.006);
        assert_eq!(Distance::ZERO, GeoPoint::distance(p, p));
        assert_eq!("0.00", GeoPoint::distance(p, p).to_string());
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude is roughly 69 miles everywhere.
        let p1 = GeoPoint::from_lat_lng_deg(40.0, -75.0);
        let p2 = GeoPoint::from_lat_lng_deg(41.0, -75.0);
        let d = GeoPoint::distance(p1, p2).to_miles();
        assert!(d > 68.9);
        assert!(d < 69.2);
    }

    #[test]
    fn real_distance() {
        // Stuttgart <-> Mannheim, approx. 58.5 miles.
        let p1 = GeoPoint::from_lat_lng_deg(48.77, 9.17);
        let p2 = GeoPoint::from_lat_lng_deg(49.487, 8.466);
        let d = GeoPoint::distance(p1, p2).to_miles();
        assert!(d > 58.0);
        assert!(d < 59.5);
    }

    #[test]
    fn distance_across_the_antimeridian() {
        let p1 = GeoPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = GeoPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(GeoPoint::distance(p1, p2).to_miles() < 0.000_001);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let p1 = GeoPoint::from_lat_lng_deg(
                rng.gen_range(LatCoord::DEG_MIN..=LatCoord::DEG_MAX),
                rng.gen_range(LngCoord::DEG_MIN..=LngCoord::DEG_MAX),
            );
            let p2 = GeoPoint::from_lat_lng_deg(
                rng.gen_range(LatCoord::DEG_MIN..=LatCoord::DEG_MAX),
                rng.gen_range(LngCoord::DEG_MIN..=LngCoord::DEG_MAX),
            );
            let d12 = GeoPoint::distance(p1, p2);
            let d21 = GeoPoint::distance(p2, p1);
            assert!(d12.to_miles() >= 0.0);
            assert_eq!(d12, d21);
        }
    }

    #[test]
    fn distance_bounds() {
        assert!(Distance::try_from_miles(0.0).is_some());
        assert!(Distance::try_from_miles(123.45).is_some());
        assert!(Distance::try_from_miles(-0.1).is_none());
        assert!(Distance::try_from_miles(f64::NAN).is_none());
        assert!(Distance::try_from_miles(f64::INFINITY).is_none());
    }

    #[test]
    fn sum_of_distances() {
        let total: Distance = [1.25, 2.5, 0.25]
            .into_iter()
            .map(Distance::from_miles)
            .sum();
        assert_eq!(Distance::from_miles(4.0), total);
    }

    #[test]
    fn format_with_two_decimal_places() {
        assert_eq!("0.00", Distance::ZERO.to_string());
        assert_eq!("12.35", Distance::from_miles(12.345).to_string());
        assert_eq!("3.10", Distance::from_miles(3.1).to_string());
    }
}
