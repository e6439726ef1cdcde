use anyhow::Result;
use async_trait::async_trait;

use rounds_core::{
    entities::{Address, GeoPoint},
    gateways::geocoding::GeocodingGateway,
};
use rounds_gateways::geocoding::NominatimGateway;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeocoderGw> {
    log::info!("Use Nominatim gateway: {}", cfg.endpoint);
    let gw = NominatimGateway::new(cfg.endpoint.as_str())?
        .with_request_timeout(cfg.request_timeout);
    Ok(GeocoderGw::new(gw))
}

pub struct GeocoderGw(Box<dyn GeocodingGateway + 'static>);

impl GeocoderGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeocodingGateway + 'static,
    {
        Self(Box::new(gw))
    }
}

#[async_trait]
impl GeocodingGateway for GeocoderGw {
    async fn resolve_address(&self, address: &Address) -> Option<GeoPoint> {
        self.0.resolve_address(address).await
    }
}
