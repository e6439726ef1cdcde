use time::Date;

use crate::{geo::Distance, id::Id};

/// One entry of the mileage log.
#[derive(Debug, Clone, PartialEq)]
pub struct MileageEntry {
    pub id: Id,
    pub date: Date,
    pub distance: Distance,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}
