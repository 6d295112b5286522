use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    Config,
    error::WeatherError,
    http::HttpFetcher,
    model::{CurrentConditions, ForecastResponse, GeocodingResponse, LocationCandidate},
};

use super::{Geocoder, WeatherProvider};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m";

#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    fetcher: HttpFetcher,
    search_url: String,
    count: String,
    language: String,
}

impl OpenMeteoGeocoder {
    pub fn new(fetcher: HttpFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            search_url: endpoint(&config.geocoding_url, "v1/search"),
            count: config.result_count.to_string(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    #[instrument(skip(self))]
    async fn search(&self, city: &str) -> Result<Vec<LocationCandidate>, WeatherError> {
        let body = self
            .fetcher
            .fetch_text(
                &self.search_url,
                &[
                    ("name", city),
                    ("count", self.count.as_str()),
                    ("language", self.language.as_str()),
                    ("format", "json"),
                ],
            )
            .await?;

        let parsed: GeocodingResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Parse { context: "geocoding", source })?;

        let results = parsed.results.unwrap_or_default();
        debug!(matches = results.len(), "geocoding finished");
        Ok(results)
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    fetcher: HttpFetcher,
    forecast_url: String,
}

impl OpenMeteoForecast {
    pub fn new(fetcher: HttpFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            forecast_url: endpoint(&config.forecast_url, "v1/forecast"),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoForecast {
    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let body = self
            .fetcher
            .fetch_text(
                &self.forecast_url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current", CURRENT_FIELDS),
                ],
            )
            .await?;

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Parse { context: "forecast", source })?;

        Ok(parsed.current)
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
