#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # rounds-entities
//!
//! Domain entities of Rounds, a route planning and mileage tracking
//! toolkit for independent contractors.
//!
//! The entities only contain generic functionality that does not
//! reveal any application-specific business logic.

pub mod address;
pub mod appointment;
pub mod client;
pub mod geo;
pub mod id;
pub mod mileage;
pub mod prefs;
pub mod route;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
