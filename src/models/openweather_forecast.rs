use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct MainData {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub pressure: u32,
    #[serde(default)]
    pub humidity: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WeatherData {
    pub dt: i64,
    #[serde(default)]
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub wind: Wind,
    pub visibility: Option<u32>,
    #[serde(default)]
    pub dt_txt: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct City {
    pub id: u64,
    pub name: String,
    pub coord: Coord,
    pub country: String,
    pub timezone: i64,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WeatherResponse {
    pub cod: String,
    pub cnt: u32,
    pub list: Vec<WeatherData>,
    pub city: City,
}

/// One display ready forecast sample, fully populated by the sanitize step
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub dt: i64,
    pub dt_txt: String,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u32,
    pub visibility: u32,
    pub wind_speed: f64,
    pub icon: String,
    pub description: String,
}
