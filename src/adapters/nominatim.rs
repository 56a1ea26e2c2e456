use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::model::GeoCoordinate;
use crate::domain::ports::Geocoder;
use crate::utils::error::{ChartError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim requires an identifying user agent.
const USER_AGENT: &str = "natal-chart/0.1 (birth chart geocoding)";

/// Free-text place lookup against the Nominatim search API. Transport
/// failures, timeouts, non-success statuses, and empty result sets all
/// surface as `LocationNotFound`; the distinction only matters in the logs.
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), timeout)
    }

    pub fn with_endpoint(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, place_name: &str) -> Result<GeoCoordinate> {
        let not_found = || ChartError::LocationNotFound {
            place: place_name.to_string(),
        };

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("q", place_name), ("format", "json"), ("limit", "1")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("geocoding request for '{}' failed: {}", place_name, e);
                return Err(not_found());
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "geocoding request for '{}' returned {}",
                place_name,
                response.status()
            );
            return Err(not_found());
        }

        let places: Vec<Place> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!("geocoding response for '{}' unreadable: {}", place_name, e);
                return Err(not_found());
            }
        };

        let place = places.into_iter().next().ok_or_else(not_found)?;
        let latitude = place.lat.parse::<f64>().map_err(|_| not_found())?;
        let longitude = place.lon.parse::<f64>().map_err(|_| not_found())?;

        Ok(GeoCoordinate::new(latitude, longitude))
    }
}
