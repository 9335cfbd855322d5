//! Client library for the OpenWeatherMap data API.
//!
//! This crate defines:
//! - A [`Query`] value selecting the location to look up
//! - A [`Client`] for the current-weather and 5 day / 3 hour forecast endpoints
//! - A pluggable [`Transport`] so any GET-capable HTTP stack can back the client
//! - Typed response models, including [`Kelvin`] with Celsius/Fahrenheit views
//!
//! ```no_run
//! use owm_client::{Client, Query};
//!
//! # async fn run() -> Result<(), owm_client::Error> {
//! let client = Client::new_http("YOUR-API-KEY");
//! let query = Query::by_city("Berlin").with_country("de");
//! let current = client.fetch_current(&query).await?;
//! println!("{} ({:.1} °C)", current.name, current.main.temp.celsius());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod transport;

pub use client::{BASE_URL, Client};
pub use config::Config;
pub use error::Error;
pub use model::{City, Current, Forecast, ForecastItem, Kelvin};
pub use query::Query;
pub use transport::{Transport, TransportResponse};
