// Shared fixtures for the use case tests.

use std::{cell::RefCell, collections::HashMap, result, sync::Mutex};

use async_trait::async_trait;

use super::prelude::*;
use crate::{gateways::geocoding::GeocodingGateway, repositories::Error as RepoError};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockStore {
    pub mileage: RefCell<Vec<MileageEntry>>,
}

impl MileageRepo for MockStore {
    fn create_mileage_entry(&self, entry: &MileageEntry) -> RepoResult<()> {
        self.mileage.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn all_mileage_entries(&self) -> RepoResult<Vec<MileageEntry>> {
        Ok(self.mileage.borrow().clone())
    }
}

/// Resolves addresses from a fixed table, instantly.
#[derive(Debug, Default)]
pub struct StaticGeocoder {
    locations: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    pub fn with_location(mut self, address: &str, point: GeoPoint) -> Self {
        self.locations.insert(address.to_owned(), point);
        self
    }
}

#[async_trait]
impl GeocodingGateway for StaticGeocoder {
    async fn resolve_address(&self, address: &Address) -> Option<GeoPoint> {
        self.locations.get(address.as_str()).copied()
    }
}

/// Records every lookup together with its point in time.
#[derive(Debug, Default)]
pub struct RecordingGeocoder {
    failing: bool,
    calls: Mutex<Vec<(String, tokio::time::Instant)>>,
}

impl RecordingGeocoder {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, tokio::time::Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeocodingGateway for RecordingGeocoder {
    async fn resolve_address(&self, address: &Address) -> Option<GeoPoint> {
        self.calls
            .lock()
            .unwrap()
            .push((address.as_str().to_owned(), tokio::time::Instant::now()));
        (!self.failing).then(|| GeoPoint::from_lat_lng_deg(0.0, 0.0))
    }
}
