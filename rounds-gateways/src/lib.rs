//! # rounds-gateways
//!
//! Gateway implementations for the external services used by Rounds.

pub mod geocoding;
