//! GET helpers shared by the geocoding and forecast clients.
//!
//! Every request is awaited to completion before the next one starts; the
//! fetcher never runs requests concurrently.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::{Config, error::WeatherError};

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self { http })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(config.connect_timeout(), config.read_timeout())
    }

    /// GET `url` with `query` appended. Anything but `200 OK` is an error.
    pub async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, WeatherError> {
        debug!(url, ?query, "GET");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| {
                warn!(url, error = %source, "request failed");
                WeatherError::Transport { url: url.to_string(), source }
            })?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(url, %status, "unexpected status");
            return Err(WeatherError::Status { url: url.to_string(), status });
        }

        Ok(res)
    }

    /// `fetch` followed by [`read_body`].
    pub async fn fetch_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, WeatherError> {
        let res = self.fetch(url, query).await?;
        read_body(res).await
    }
}

/// Drain a response into one string, joining its lines without separators.
pub async fn read_body(response: Response) -> Result<String, WeatherError> {
    let url = response.url().to_string();
    let body = response.text().await.map_err(|source| {
        warn!(url = %url, error = %source, "failed to read body");
        WeatherError::Read { url, source }
    })?;

    Ok(join_lines(&body))
}

fn join_lines(body: &str) -> String {
    body.lines().collect()
}
