use chrono::{DateTime, NaiveDate, Timelike};
use crate::models::openweather_forecast::{ForecastSample, WeatherData};

/// Visibility in meters used when the feed omits the field
const DEFAULT_VISIBILITY: u32 = 10000;

/// Icon code used when a sample carries no weather condition at all
const DEFAULT_ICON: &str = "01d";

/// Hour of day from which a sample may represent its calendar day
const FIRST_REPRESENTATIVE_HOUR: u32 = 6;

/// Struct holding the shaped dashboard view of a forecast: the nearest term
/// sample as current conditions plus one representative sample per calendar
/// day present in the feed.
///
/// Days are grouped on the UTC calendar date of each sample timestamp and
/// the representative is the first sample of the day at or after 06:00 UTC.
/// A day where every sample lies before 06:00 gets no representative, so
/// the daily list may be shorter than the number of days in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub current: ForecastSample,
    pub daily: Vec<ForecastSample>,
}

impl DashboardData {
    /// Returns a new DashboardData from a sequence of samples ordered
    /// ascending by timestamp, or None if the sequence is empty.
    ///
    /// The input is left untouched and the same input always yields the
    /// same output.
    ///
    /// # Arguments
    ///
    /// * 'samples' - the sanitized forecast samples in feed order
    pub fn new(samples: &[ForecastSample]) -> Option<DashboardData> {
        let current = samples.first()?.clone();

        let mut unique_dates: Vec<NaiveDate> = Vec::new();
        for sample in samples {
            let date = sample_date(sample);
            if !unique_dates.contains(&date) {
                unique_dates.push(date);
            }
        }

        let daily = unique_dates
            .iter()
            .filter_map(|&date| {
                samples.iter().find(|s| {
                    sample_date(s) == date && sample_hour(s) >= FIRST_REPRESENTATIVE_HOUR
                })
            })
            .cloned()
            .collect::<Vec<ForecastSample>>();

        Some(DashboardData { current, daily })
    }
}

/// Converts one raw forecast entry into a display ready sample.
///
/// All defaulting of missing upstream fields happens here, so everything
/// downstream can rely on fully populated samples.
///
/// # Arguments
///
/// * 'data' - the raw forecast entry from the feed
pub fn sanitize(data: &WeatherData) -> ForecastSample {
    let (icon, description) = data
        .weather
        .first()
        .map(|w| (w.icon.clone(), w.description.clone()))
        .unwrap_or((DEFAULT_ICON.to_string(), String::new()));

    ForecastSample {
        dt: data.dt,
        dt_txt: data.dt_txt.clone(),
        temp: data.main.temp,
        feels_like: data.main.feels_like,
        temp_min: data.main.temp_min,
        temp_max: data.main.temp_max,
        pressure: data.main.pressure,
        humidity: data.main.humidity,
        visibility: data.visibility.unwrap_or(DEFAULT_VISIBILITY),
        wind_speed: data.wind.speed,
        icon,
        description,
    }
}

/// Sanitizes a full forecast list, preserving feed order
///
/// # Arguments
///
/// * 'list' - the raw forecast entries from the feed
pub fn sanitize_all(list: &[WeatherData]) -> Vec<ForecastSample> {
    list.iter().map(sanitize).collect()
}

/// Returns the UTC calendar date of a sample
fn sample_date(sample: &ForecastSample) -> NaiveDate {
    DateTime::from_timestamp(sample.dt, 0)
        .unwrap_or_default()
        .date_naive()
}

/// Returns the UTC hour of day of a sample
fn sample_hour(sample: &ForecastSample) -> u32 {
    DateTime::from_timestamp(sample.dt, 0)
        .unwrap_or_default()
        .hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::openweather_forecast::{MainData, WeatherCondition, Wind};

    fn sample(day: u32, hour: u32) -> ForecastSample {
        let dt = Utc
            .with_ymd_and_hms(2024, 6, day, hour, 0, 0)
            .unwrap()
            .timestamp();

        ForecastSample {
            dt,
            dt_txt: format!("2024-06-{:02} {:02}:00:00", day, hour),
            temp: 300.0,
            feels_like: 301.0,
            temp_min: 298.0,
            temp_max: 302.0,
            pressure: 1012,
            humidity: 70,
            visibility: 10000,
            wind_speed: 5.0,
            icon: "01d".to_string(),
            description: "clear sky".to_string(),
        }
    }

    /// Seven days of samples at 3 hour resolution, starting 09:00 on day one
    fn week_of_samples() -> Vec<ForecastSample> {
        let mut samples = vec![sample(10, 9), sample(10, 12), sample(10, 15)];
        for day in 11..=16 {
            for hour in [0, 3, 6, 9, 12, 15, 18, 21] {
                samples.push(sample(day, hour));
            }
        }
        samples
    }

    #[test]
    fn test_one_bucket_per_day_in_order() {
        let samples = week_of_samples();
        let data = DashboardData::new(&samples).unwrap();

        assert_eq!(data.daily.len(), 7);
        for window in data.daily.windows(2) {
            assert!(window[0].dt < window[1].dt);
        }
    }

    #[test]
    fn test_bucket_is_first_sample_at_or_after_six() {
        let samples = week_of_samples();
        let data = DashboardData::new(&samples).unwrap();

        assert_eq!(data.daily[0].dt_txt, "2024-06-10 09:00:00");
        assert_eq!(data.daily[1].dt_txt, "2024-06-11 06:00:00");
    }

    #[test]
    fn test_day_without_morning_sample_is_dropped() {
        let samples = vec![
            sample(10, 9),
            sample(11, 0),
            sample(11, 3),
            sample(12, 6),
        ];
        let data = DashboardData::new(&samples).unwrap();

        assert_eq!(data.daily.len(), 2);
        assert_eq!(data.daily[0].dt_txt, "2024-06-10 09:00:00");
        assert_eq!(data.daily[1].dt_txt, "2024-06-12 06:00:00");
    }

    #[test]
    fn test_current_is_first_sample_regardless_of_hour() {
        let samples = vec![sample(10, 0), sample(10, 6)];
        let data = DashboardData::new(&samples).unwrap();

        assert_eq!(data.current, samples[0]);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let samples = week_of_samples();
        let first = DashboardData::new(&samples).unwrap();
        let second = DashboardData::new(&samples).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_gives_no_data() {
        assert!(DashboardData::new(&[]).is_none());
    }

    #[test]
    fn test_sanitize_applies_defaults() {
        let data = WeatherData {
            dt: 1718784000,
            main: MainData::default(),
            weather: Vec::new(),
            wind: Wind::default(),
            visibility: None,
            dt_txt: String::new(),
        };

        let sample = sanitize(&data);
        assert_eq!(sample.visibility, 10000);
        assert_eq!(sample.icon, "01d");
        assert_eq!(sample.description, "");
        assert_eq!(sample.temp, 0.0);
    }

    #[test]
    fn test_sanitize_keeps_populated_fields() {
        let data = WeatherData {
            dt: 1718784000,
            main: MainData {
                temp: 300.0,
                feels_like: 301.5,
                temp_min: 298.0,
                temp_max: 302.0,
                pressure: 1009,
                humidity: 64,
            },
            weather: vec![WeatherCondition {
                id: 802,
                main: "Clouds".to_string(),
                description: "scattered clouds".to_string(),
                icon: "03d".to_string(),
            }],
            wind: Wind { speed: 4.3, deg: 120.0 },
            visibility: Some(8000),
            dt_txt: "2024-06-19 09:00:00".to_string(),
        };

        let sample = sanitize(&data);
        assert_eq!(sample.icon, "03d");
        assert_eq!(sample.description, "scattered clouds");
        assert_eq!(sample.visibility, 8000);
        assert_eq!(sample.humidity, 64);
    }
}
