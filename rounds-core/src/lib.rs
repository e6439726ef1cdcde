//! # rounds-core
//!
//! The domain core of Rounds: repository and gateway abstractions plus
//! the route planning and mileage tracking use cases built on top of
//! them.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use rounds_entities::{
        address::*, appointment::*, client::*, geo::*, id::*, mileage::*, prefs::*, route::*,
    };
}
