use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("At least two locations are required to plan a route")]
    NotEnoughStops,
    #[error("None of the addresses could be located")]
    NoLocationsResolved,
    #[error("Invalid distance")]
    Distance,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
