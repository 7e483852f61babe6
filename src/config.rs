use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use anyhow::Result;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize)]
pub struct DashboardParameters {
    pub place: String,
    pub forecast_count: u32,
    pub min_query_len: usize,
    pub min_query_interval_ms: u64,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub dashboard: DashboardParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    if config.dashboard.forecast_count == 0 {
        return Err(ConfigError::from("forecast_count must be at least 1"))
    }
    if config.dashboard.place.is_empty() {
        return Err(ConfigError::from("dashboard place must not be empty"))
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [geo_ref]
        lat = -6.5950
        long = 106.8166

        [dashboard]
        place = "Bogor"
        forecast_count = 56
        min_query_len = 3
        min_query_interval_ms = 300

        [general]
        log_path = "myweather.log"
        log_level = "info"
        log_to_stdout = true
    "#;

    #[test]
    fn test_config_parses() {
        let config: Config = toml::from_str(CONFIG).unwrap();
        assert_eq!(config.dashboard.place, "Bogor");
        assert_eq!(config.dashboard.forecast_count, 56);
        assert_eq!(config.general.log_level, LevelFilter::Info);
    }
}
