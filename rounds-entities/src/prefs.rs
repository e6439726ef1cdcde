use crate::address::Address;

/// Route planning preferences that survive between sessions.
///
/// Loaded once at the start of a planning run and saved explicitly
/// when changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoutePrefs {
    /// Address the route starts from, e.g. home or office.
    pub start_address: Option<Address>,
    /// Address the route returns to at the end of the day.
    pub end_address: Option<Address>,
}
