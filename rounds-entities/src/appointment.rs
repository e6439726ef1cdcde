use time::{Date, Time};

use crate::{address::Address, id::Id};

/// A scheduled visit at a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Id,
    pub client_id: Id,
    pub date: Date,
    /// Time of day, used to order the stops of a planned route.
    pub time: Time,
    /// Overrides the client's stored address when present.
    pub location: Option<Address>,
    pub notes: Option<String>,
}
