use crate::model::CurrentConditions;

pub const MPH_PER_KPH: f64 = 0.621371;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kph_to_mph(kph: f64) -> f64 {
    kph * MPH_PER_KPH
}

/// Nearest integer, with halves rounded up (toward positive infinity).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Current conditions for one location, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub clock: String,
    pub conditions: CurrentConditions,
}

impl WeatherReport {
    pub fn new(clock: String, conditions: CurrentConditions) -> Self {
        Self { clock, conditions }
    }

    pub fn lines(&self) -> [String; 4] {
        let c = &self.conditions;
        [
            format!("Current time: {}", self.clock),
            format!(
                "Current temperature: {} °F ({} °C)",
                round_half_up(celsius_to_fahrenheit(c.temperature_c)),
                round_half_up(c.temperature_c),
            ),
            format!("Relative Humidity: {}%", c.humidity_pct),
            format!(
                "Wind Speed: {:.1} mph ({:.1} km/h)",
                kph_to_mph(c.wind_speed_kph),
                c.wind_speed_kph,
            ),
        ]
    }
}
