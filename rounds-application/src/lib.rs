//! # rounds-application
//!
//! The high-level planning flows of Rounds, tying the use cases, the
//! geocoding gateway and the map surface together.

mod log_planned_trip;
mod plan_route;
mod route_prefs;

pub mod prelude {
    pub use super::{log_planned_trip::*, plan_route::*, route_prefs::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rounds_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
