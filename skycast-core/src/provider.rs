use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::WeatherError,
    model::{CurrentConditions, LocationCandidate},
};

pub mod open_meteo;

pub use open_meteo::{OpenMeteoForecast, OpenMeteoGeocoder};

/// Resolves free-text place names to candidate locations.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Every match for `city`, best first. An empty list means no match.
    async fn search(&self, city: &str) -> Result<Vec<LocationCandidate>, WeatherError>;
}

/// Supplies current conditions for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;
}
