//! The prompt / resolve / report loop.
//!
//! Network and parse failures never leave this module: each one is reported
//! to the user and the loop goes back to the prompt. Only console I/O errors
//! are returned from [`Session::run`].

use tracing::{info, warn};

use crate::{
    Config,
    console::Console,
    error::WeatherError,
    http::HttpFetcher,
    location::{Resolution, SEPARATOR, resolve_location},
    model::LocationCandidate,
    provider::{Geocoder, OpenMeteoForecast, OpenMeteoGeocoder, WeatherProvider},
    report::WeatherReport,
    zone::ResolvedZone,
};

pub const CITY_PROMPT: &str = "Please Enter a City or Press 'x' to Exit: ";
pub const NOT_FOUND: &str = "City not found. Please try again.";
pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";
pub const LOCATION_UNREACHABLE: &str = "Error! Could not connect to location API.";
pub const WEATHER_UNREACHABLE: &str = "Error! Could not connect to weather API.";

/// What the loop does after handling one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prompt,
    Exit,
}

#[derive(Debug)]
pub struct Session {
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherProvider>,
}

impl Session {
    pub fn new(geocoder: Box<dyn Geocoder>, weather: Box<dyn WeatherProvider>) -> Self {
        Self { geocoder, weather }
    }

    /// Session backed by the Open-Meteo services named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let fetcher = HttpFetcher::from_config(config)?;

        Ok(Self::new(
            Box::new(OpenMeteoGeocoder::new(fetcher.clone(), config)),
            Box::new(OpenMeteoForecast::new(fetcher, config)),
        ))
    }

    /// Prompt for cities until the user exits or input runs out.
    pub async fn run(&self, console: &mut dyn Console) -> Result<(), WeatherError> {
        loop {
            console.say(SEPARATOR);
            let input = console.read_line(CITY_PROMPT).await?;

            let step = match input {
                Some(line) => self.handle_input(&line, console).await?,
                None => Step::Exit,
            };

            if step == Step::Exit {
                console.say("");
                console.say("Goodbye!");
                return Ok(());
            }
        }
    }

    /// Handle one line typed at the city prompt.
    pub async fn handle_input(
        &self,
        input: &str,
        console: &mut dyn Console,
    ) -> Result<Step, WeatherError> {
        if input.trim().eq_ignore_ascii_case("x") {
            return Ok(Step::Exit);
        }

        let location = match resolve_location(self.geocoder.as_ref(), input, console).await {
            Ok(Resolution::Found(location)) => location,
            Ok(Resolution::NotFound) => {
                console.say(NOT_FOUND);
                return Ok(Step::Prompt);
            }
            Ok(Resolution::Abandoned) => return Ok(Step::Exit),
            Err(WeatherError::Console(err)) => return Err(WeatherError::Console(err)),
            Err(err) => {
                warn!(error = %err, "location lookup failed");
                console.say(if err.is_network() { LOCATION_UNREACHABLE } else { GENERIC_FAILURE });
                console.say(NOT_FOUND);
                return Ok(Step::Prompt);
            }
        };

        self.show_weather(&location, console).await;
        Ok(Step::Prompt)
    }

    async fn show_weather(&self, location: &LocationCandidate, console: &mut dyn Console) {
        let (zone, zone_warning) = ResolvedZone::resolve(location.timezone.as_deref());
        if let Some(zone_warning) = zone_warning {
            warn!(%zone_warning, "falling back to local zone");
            console.say(&zone_warning.to_string());
        }

        console.say(&format!("Showing weather for: {}", location.display_name()));
        info!(
            location = %location.display_name(),
            latitude = location.latitude,
            longitude = location.longitude,
            "fetching weather"
        );

        let conditions = match self
            .weather
            .current_conditions(location.latitude, location.longitude)
            .await
        {
            Ok(conditions) => conditions,
            Err(err) => {
                warn!(error = %err, "weather lookup failed");
                console.say(if err.is_network() { WEATHER_UNREACHABLE } else { GENERIC_FAILURE });
                return;
            }
        };

        let report = WeatherReport::new(zone.clock_now(), conditions);
        for line in report.lines() {
            console.say(&line);
        }
    }
}
