//! Backend weather endpoint client

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{ConfigError, LookupError};
use crate::state::{CityQuery, WeatherReading};

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/weather";

/// Anything that can turn a city into a current weather reading
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Exactly one attempt; no retries, no caching.
    async fn fetch_weather(&self, query: &CityQuery) -> Result<WeatherReading, LookupError>;
}

// ============================================================================
// Wire format
// ============================================================================

/// Backend response body; extra fields are ignored
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u16,
}

/// Decode a response body into a reading for `query`
pub fn parse_reading(
    query: &CityQuery,
    body: &str,
    observed_at: DateTime<Local>,
) -> Result<WeatherReading, LookupError> {
    let data: WeatherResponse =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    Ok(WeatherReading {
        city_name: query.as_str().to_string(),
        temperature_celsius: data.current_weather.temperature,
        wind_speed_kmh: data.current_weather.windspeed,
        weather_code: data.current_weather.weathercode,
        observed_at,
    })
}

// ============================================================================
// HTTP client
// ============================================================================

/// HTTP implementation of [`WeatherSource`] against `GET <endpoint>?city=<name>`
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl WeatherClient {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("weather-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: parsed,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Full request URL with the city percent-encoded
    pub fn request_url(&self, query: &CityQuery) -> String {
        let mut base = self.endpoint.clone();
        base.set_fragment(None);
        let separator = if base.query().is_some() { '&' } else { '?' };
        format!(
            "{}{}city={}",
            base,
            separator,
            urlencoding::encode(query.as_str())
        )
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    #[instrument(skip(self, query), fields(city = %query))]
    async fn fetch_weather(&self, query: &CityQuery) -> Result<WeatherReading, LookupError> {
        if query.as_str().trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = self.request_url(query);
        debug!(%url, "requesting current weather");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "weather request failed before a response");
            LookupError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "weather request rejected");
            return Err(LookupError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let reading = parse_reading(query, &body, Local::now()).inspect_err(|e| {
            warn!(error = %e, "weather response could not be decoded");
        })?;

        info!(
            temperature = reading.temperature_celsius,
            windspeed = reading.wind_speed_kmh,
            code = reading.weather_code,
            "weather lookup succeeded"
        );
        Ok(reading)
    }
}
