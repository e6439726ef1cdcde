use async_trait::async_trait;

use crate::entities::{Address, GeoPoint};

/// Resolves a free-text address into a geographical location.
///
/// Implementations never return an error: any lookup problem (network
/// failure, timeout, malformed response, no match) is reported as
/// `None`, and a lookup that yields `None` is final for that address.
#[async_trait]
pub trait GeocodingGateway: Send + Sync {
    async fn resolve_address(&self, address: &Address) -> Option<GeoPoint>;
}
