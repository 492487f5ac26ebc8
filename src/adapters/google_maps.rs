use crate::config::ResolverConfig;
use crate::domain::model::{Coordinates, Travel};
use crate::domain::ports::{DistanceResolver, Geocoder};
use crate::utils::error::{RankerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

/// Google Maps Distance Matrix and Geocoding client. Travel mode is always driving.
pub struct GoogleMapsClient {
    client: Client,
    distance_endpoint: String,
    geocode_endpoint: String,
    api_key: String,
    language: String,
}

impl GoogleMapsClient {
    pub fn new(config: &ResolverConfig, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            distance_endpoint: config.distance_endpoint.clone(),
            geocode_endpoint: config.geocode_endpoint.clone(),
            api_key: api_key.to_string(),
            language: config.language.clone(),
        })
    }

    fn travel_from(body: DistanceMatrixResponse, destination: &str) -> Result<Travel> {
        let failure = |message: String| RankerError::ResolverError {
            destination: destination.to_string(),
            message,
        };

        if body.status != "OK" {
            return Err(failure(match body.error_message {
                Some(detail) => format!("{}: {}", body.status, detail),
                None => body.status,
            }));
        }

        let element = body
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| failure("empty rows".to_string()))?;

        if element.status != "OK" {
            return Err(failure(element.status));
        }

        match (element.distance, element.duration) {
            (Some(distance), Some(duration)) => Ok(Travel {
                distance_text: distance.text,
                distance_meters: distance.value,
                duration_text: duration.text,
            }),
            _ => Err(failure("element without distance or duration".to_string())),
        }
    }
}

#[async_trait]
impl DistanceResolver for GoogleMapsClient {
    async fn resolve(&self, origin: &str, destination: &str) -> Result<Travel> {
        let response = self
            .client
            .get(&self.distance_endpoint)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("mode", "driving"),
                ("language", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RankerError::ResolverError {
                destination: destination.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: DistanceMatrixResponse = response.json().await?;
        Self::travel_from(body, destination)
    }
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let failure = |message: String| RankerError::GeocodeError {
            address: address.to_string(),
            message,
        };

        let response = self
            .client
            .get(&self.geocode_endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(failure(format!("HTTP {}", response.status())));
        }

        let body: GeocodeResponse = response.json().await?;
        match body.status.as_str() {
            "OK" => Ok(body.results.into_iter().next().map(|r| r.geometry.location)),
            "ZERO_RESULTS" => Ok(None),
            _ => Err(failure(match body.error_message {
                Some(detail) => format!("{}: {}", body.status, detail),
                None => body.status,
            })),
        }
    }
}
