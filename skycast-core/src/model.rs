use serde::{Deserialize, Deserializer, de::Error as _};

/// One match returned by the geocoding service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationCandidate {
    pub name: String,

    /// First-level administrative division (state, province, ...).
    #[serde(default)]
    pub admin1: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    pub latitude: f64,
    pub longitude: f64,

    /// IANA zone identifier as reported by the service; not yet validated.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl LocationCandidate {
    /// `name[, admin1][, country]`
    pub fn display_name(&self) -> String {
        let mut out = self.name.clone();
        for part in [&self.admin1, &self.country].into_iter().flatten() {
            out.push_str(", ");
            out.push_str(part);
        }
        out
    }

    /// Line shown in the disambiguation menu, numbered from 1.
    pub fn menu_entry(&self, number: usize) -> String {
        format!(
            "{}. {}, {}, {}",
            number,
            self.name,
            self.admin1.as_deref().unwrap_or("N/A"),
            self.country.as_deref().unwrap_or("N/A"),
        )
    }
}

/// Point-in-time readings for one location.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m")]
    pub temperature_c: f64,

    #[serde(rename = "relative_humidity_2m", deserialize_with = "humidity_percent")]
    pub humidity_pct: u8,

    #[serde(rename = "wind_speed_10m")]
    pub wind_speed_kph: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<LocationCandidate>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: CurrentConditions,
}

/// Accept any JSON number, rounding to a whole percentage.
fn humidity_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(D::Error::custom(format!("relative humidity {value} is not a percentage")));
    }
    Ok(value.round() as u8)
}
