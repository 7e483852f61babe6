use std::fmt;
use std::fmt::Formatter;
use chrono::Local;
use crate::manager_openweather::errors::OpenWeatherError;

pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

pub struct MyWeatherInitError(pub String);

impl fmt::Display for MyWeatherInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MyWeatherInitError: {}", self.0)
    }
}
impl From<ConfigError> for MyWeatherInitError {
    fn from(e: ConfigError) -> Self {
        MyWeatherInitError(e.to_string())
    }
}
impl From<std::io::Error> for MyWeatherInitError {
    fn from(e: std::io::Error) -> Self {
        MyWeatherInitError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for MyWeatherInitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        MyWeatherInitError(e.to_string())
    }
}
impl From<log::SetLoggerError> for MyWeatherInitError {
    fn from(e: log::SetLoggerError) -> Self { MyWeatherInitError(e.to_string()) }
}

pub struct MyWeatherWorkerError {
    msg: String,
    place: Option<String>,
}
impl MyWeatherWorkerError {
    pub fn new(msg: String, place: &str) -> MyWeatherWorkerError {
        MyWeatherWorkerError {
            msg,
            place: Some(place.to_string()),
        }
    }
}
impl fmt::Display for MyWeatherWorkerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        let caption = format!("{} MyWeatherWorkerError ", report_time);
        write!(f, "{:=<96}\n", caption)?;
        write!(f, "{}\n", self.msg)?;
        if let Some(place) = &self.place {
            write!(f, "Place: {}", place)?;
        }

        Ok(())
    }
}
impl From<OpenWeatherError> for MyWeatherWorkerError {
    fn from(e: OpenWeatherError) -> Self {
        MyWeatherWorkerError { msg: e.to_string(), place: None }
    }
}
impl From<std::io::Error> for MyWeatherWorkerError {
    fn from(e: std::io::Error) -> Self {
        MyWeatherWorkerError { msg: e.to_string(), place: None }
    }
}
