//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Read-only configuration (endpoints, timeouts)
//! - HTTP plumbing and the Open-Meteo geocoding / forecast clients
//! - Location disambiguation and the current-conditions report
//! - The interactive session loop, written against a [`Console`] abstraction
//! - [`ScriptedConsole`], a canned-input console for testing sessions
//!
//! It is used by `skycast-cli`, which supplies a terminal-backed console.

pub mod config;
pub mod console;
pub mod error;
pub mod http;
pub mod location;
pub mod model;
pub mod provider;
pub mod report;
pub mod session;
pub mod zone;

pub use config::Config;
pub use console::{Console, ScriptedConsole};
pub use error::{SelectionError, WeatherError};
pub use location::{Resolution, resolve_location};
pub use model::{CurrentConditions, LocationCandidate};
pub use provider::{Geocoder, WeatherProvider};
pub use report::WeatherReport;
pub use session::{Session, Step};
pub use zone::{ResolvedZone, ZoneWarning};
