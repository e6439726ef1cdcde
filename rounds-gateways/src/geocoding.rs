use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use rounds_core::{
    entities::{Address, GeoPoint},
    gateways::geocoding::GeocodingGateway,
};

/// Search endpoint of the public Nominatim instance.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Per-lookup timeout after which the request is given up.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

// The usage policy of the public Nominatim instance requires an
// identifying User-Agent.
const USER_AGENT: &str = concat!("rounds/", env!("CARGO_PKG_VERSION"));

/// Geocoding gateway backed by a Nominatim-compatible search endpoint.
///
/// Sends `GET <endpoint>?q=<address>&format=json&limit=1` and takes
/// the first search result. Cloning is cheap and shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct NominatimGateway {
    client: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
}

impl NominatimGateway {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Overrides [`DEFAULT_REQUEST_TIMEOUT`].
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    async fn lookup(&self, query: &str) -> anyhow::Result<Option<GeoPoint>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .timeout(self.request_timeout)
            .send()
            .await?
            .error_for_status()?;
        let results: Vec<SearchResult> = response.json().await?;
        let Some(first) = results.first() else {
            return Ok(None);
        };
        // Nominatim encodes the coordinates as strings.
        let lat: f64 = first.lat.parse()?;
        let lng: f64 = first.lon.parse()?;
        Ok(GeoPoint::try_from_lat_lng_deg(lat, lng))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

#[async_trait]
impl GeocodingGateway for NominatimGateway {
    async fn resolve_address(&self, address: &Address) -> Option<GeoPoint> {
        if address.is_empty() {
            return None;
        }
        match self.lookup(address.as_str()).await {
            Ok(Some(point)) => {
                log::debug!("Resolved '{address}' to {point}");
                Some(point)
            }
            Ok(None) => {
                log::debug!("No match for '{address}'");
                None
            }
            Err(err) => {
                log::warn!("Failed to look up '{address}': {err}");
                None
            }
        }
    }
}
