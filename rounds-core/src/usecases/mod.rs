mod add_mileage_entry;
mod assemble_itinerary;
mod directions_link;
mod error;
mod mileage_log;
mod resolve_route_stops;
mod route_distance;

#[cfg(test)]
mod tests;

pub use self::{
    add_mileage_entry::*, assemble_itinerary::*, directions_link::*, error::Error, mileage_log::*,
    resolve_route_stops::*, route_distance::*,
};

mod prelude {
    pub use super::error::Error;

    pub type Result<T> = std::result::Result<T, Error>;

    pub use crate::{entities::*, repositories::*};
}
