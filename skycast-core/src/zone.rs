use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

const CLOCK_FORMAT: &str = "%I:%M %p";

/// Time zone used to show the local clock of a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedZone {
    Named(Tz),
    /// The host's own zone, used when the service gave us nothing usable.
    SystemLocal,
}

/// Why a location's zone fell back to [`ResolvedZone::SystemLocal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneWarning {
    Missing,
    Invalid(String),
}

impl fmt::Display for ZoneWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneWarning::Missing => f.write_str("Timezone missing from API, using system default."),
            ZoneWarning::Invalid(id) => {
                write!(f, "Invalid timezone from API: {id}, using system default.")
            }
        }
    }
}

impl ResolvedZone {
    /// Validate a zone identifier, falling back to the local zone with a warning.
    pub fn resolve(id: Option<&str>) -> (Self, Option<ZoneWarning>) {
        match id.map(str::trim) {
            None | Some("") => (ResolvedZone::SystemLocal, Some(ZoneWarning::Missing)),
            Some(id) => match id.parse::<Tz>() {
                Ok(tz) => (ResolvedZone::Named(tz), None),
                Err(_) => (ResolvedZone::SystemLocal, Some(ZoneWarning::Invalid(id.to_string()))),
            },
        }
    }

    /// Current wall-clock time in this zone as `hh:mm AM/PM`.
    pub fn clock_now(&self) -> String {
        self.clock_at(Utc::now())
    }

    pub fn clock_at(&self, instant: DateTime<Utc>) -> String {
        match self {
            ResolvedZone::Named(tz) => format_clock(&instant.with_timezone(tz)),
            ResolvedZone::SystemLocal => format_clock(&instant.with_timezone(&Local)),
        }
    }
}

fn format_clock<Z: TimeZone>(at: &DateTime<Z>) -> String
where
    Z::Offset: fmt::Display,
{
    at.format(CLOCK_FORMAT).to_string()
}
