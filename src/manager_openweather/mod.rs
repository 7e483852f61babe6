pub mod errors;

use std::time::Duration;
use ureq::Agent;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::models::openweather_find::{FindResponse, PlaceLookup};
use crate::models::openweather_forecast::WeatherResponse;

const REQUEST_DOMAIN: &str = "https://api.openweathermap.org";

/// Struct for managing forecast retrieval and place lookups against the
/// OpenWeatherMap API
pub struct OpenWeather {
    api_key: String,
    agent: Agent,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts and
    /// looking up place names
    ///
    /// # Arguments
    ///
    /// * 'api_key' - API key for the OpenWeatherMap API
    pub fn new(api_key: String) -> OpenWeather {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { api_key, agent }
    }

    /// Retrieves a multi day forecast for the given place.
    ///
    /// The feed delivers one sample per 3 hours, so a count of 56 covers
    /// roughly seven days. The raw feed order is kept as is, ascending by
    /// timestamp.
    ///
    /// # Arguments
    ///
    /// * 'place' - name of the place to get a forecast for
    /// * 'count' - number of 3 hour samples to request
    pub fn get_forecast(&self, place: &str, count: u32) -> Result<WeatherResponse, OpenWeatherError> {
        let url = format!("{}/data/2.5/forecast", REQUEST_DOMAIN);

        let json = self.agent
            .get(url)
            .query("q", place)
            .query("appid", &self.api_key)
            .query("cnt", count.to_string())
            .call()?
            .body_mut()
            .read_to_string()?;

        let forecast: WeatherResponse = serde_json::from_str(&json)?;

        if forecast.list.is_empty() {
            Err(OpenWeatherError(format!("no forecast returned for {}", place)))
        } else {
            Ok(forecast)
        }
    }

    /// Retrieves place name candidates matching a search query, used for
    /// the search suggestion list
    ///
    /// # Arguments
    ///
    /// * 'query' - the partial place name to search for
    pub fn find_places(&self, query: &str) -> Result<Vec<String>, OpenWeatherError> {
        let url = format!("{}/data/2.5/find", REQUEST_DOMAIN);

        let json = self.agent
            .get(url)
            .query("q", query)
            .query("appid", &self.api_key)
            .call()?
            .body_mut()
            .read_to_string()?;

        let found: FindResponse = serde_json::from_str(&json)?;

        Ok(found.list.into_iter().map(|e| e.name).collect())
    }

    /// Retrieves the place name for a geographic position, used to turn the
    /// configured coordinates into a forecast place
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude in decimal format
    /// * 'long' - longitude in decimal format
    pub fn get_place_name(&self, lat: f64, long: f64) -> Result<String, OpenWeatherError> {
        let url = format!("{}/data/2.5/weather", REQUEST_DOMAIN);

        let json = self.agent
            .get(url)
            .query("lat", format!("{:0.4}", lat))
            .query("lon", format!("{:0.4}", long))
            .query("appid", &self.api_key)
            .call()?
            .body_mut()
            .read_to_string()?;

        let lookup: PlaceLookup = serde_json::from_str(&json)?;

        if lookup.name.is_empty() {
            Err(OpenWeatherError(format!("no place found at {:0.4}/{:0.4}", lat, long)))
        } else {
            Ok(lookup.name)
        }
    }
}
