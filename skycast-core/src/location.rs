use tracing::{debug, info};

use crate::{
    console::Console,
    error::{SelectionError, WeatherError},
    model::LocationCandidate,
    provider::Geocoder,
};

pub const SEPARATOR: &str = "+---------------------------------------+";

/// Outcome of turning a city name into one location.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(LocationCandidate),
    NotFound,
    /// Input ran out while the user was choosing among matches.
    Abandoned,
}

/// Geocode `city` and, when it is ambiguous, ask the user which match they meant.
pub async fn resolve_location(
    geocoder: &dyn Geocoder,
    city: &str,
    console: &mut dyn Console,
) -> Result<Resolution, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        debug!("blank city name, skipping lookup");
        return Ok(Resolution::NotFound);
    }

    let mut candidates = geocoder.search(city).await?;
    match candidates.len() {
        0 => Ok(Resolution::NotFound),
        1 => Ok(Resolution::Found(candidates.remove(0))),
        _ => choose_candidate(candidates, console).await,
    }
}

async fn choose_candidate(
    mut candidates: Vec<LocationCandidate>,
    console: &mut dyn Console,
) -> Result<Resolution, WeatherError> {
    console.say("Multiple matches found! Please select the correct location by number.");
    for (i, candidate) in candidates.iter().enumerate() {
        console.say(&candidate.menu_entry(i + 1));
    }

    let prompt = format!("Choose a location by number (1-{}): ", candidates.len());
    loop {
        console.say(SEPARATOR);
        let Some(line) = console.read_line(&prompt).await? else {
            return Ok(Resolution::Abandoned);
        };

        match parse_selection(&line, candidates.len()) {
            Ok(index) => {
                info!(choice = index + 1, "location selected");
                return Ok(Resolution::Found(candidates.swap_remove(index)));
            }
            Err(err) => {
                debug!(%err, "rejected selection");
                console.say("Invalid selection.");
            }
        }
    }
}

/// Validate a 1-based menu choice, returning the 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let input = input.trim();
    let choice: i64 = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    match usize::try_from(choice) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(SelectionError::OutOfRange { choice, count }),
    }
}
