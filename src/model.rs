//! Typed views of the service's JSON responses.
//!
//! Every container tolerates missing fields (`#[serde(default)]`): the
//! service delivers error envelopes such as `{"cod":401,"message":…}` over
//! HTTP 200, and those must decode so the embedded-status check in the
//! client can classify them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Temperature in Kelvin, the scale the service reports natively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl Kelvin {
    /// The Celsius equivalent of the temperature.
    pub fn celsius(self) -> f64 {
        self.0 - 273.15
    }

    /// The Fahrenheit equivalent of the temperature.
    pub fn fahrenheit(self) -> f64 {
        self.celsius() * 1.8 + 32.0
    }
}

/// Longitude and latitude of a location.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// Country plus sunrise and sunset timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl Sys {
    pub fn sunrise_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunrise, 0)
    }

    pub fn sunset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunset, 0)
    }
}

/// One weather-condition record; `main` is the condition category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// The basic measurements of a report.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Main {
    pub temp: Kelvin,
    pub temp_min: Kelvin,
    pub temp_max: Kelvin,
    pub sea_level: f64,
    pub grnd_level: f64,
    pub humidity: u8,
    pub pressure: f64,
}

/// Wind speed and direction in degrees.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

/// Rain or snow volume over the last 3 hours.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(rename = "3h")]
    pub last_3h: f64,
}

/// Cloud coverage percentage.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Clouds {
    pub all: u8,
}

/// Current weather for a location.
///
/// The envelope status `cod` is numeric on this endpoint; `message` only
/// appears on error envelopes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Current {
    pub coord: Coord,
    pub sys: Sys,
    pub weather: Vec<Condition>,
    pub main: Main,
    pub wind: Wind,
    pub rain: Volume,
    pub snow: Volume,
    pub clouds: Clouds,
    pub dt: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
    pub message: Option<String>,
}

impl Current {
    /// UTC time of the observation.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// City descriptor of a forecast.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub coord: Coord,
}

/// One 3-hour slot of a forecast.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastItem {
    pub dt: i64,
    pub dt_txt: String,
    pub main: Main,
    pub weather: Vec<Condition>,
    pub clouds: Clouds,
    pub wind: Wind,
    pub rain: Volume,
    pub snow: Volume,
}

impl ForecastItem {
    /// UTC time this entry forecasts.
    pub fn at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// A 5 day / 3 hours forecast.
///
/// Unlike [`Current`], the envelope status `cod` is a string (`"200"` on
/// success) and `message` is numeric.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub cod: String,
    pub message: f64,
    pub cnt: i64,
    pub city: City,
    pub list: Vec<ForecastItem>,
}
