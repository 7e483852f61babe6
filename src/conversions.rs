use chrono::{NaiveDateTime, Timelike};

/// Hour of day from which an icon switches to its day variant
const DAY_FROM_HOUR: u32 = 6;

/// Hour of day from which an icon switches back to its night variant
const NIGHT_FROM_HOUR: u32 = 18;

/// Format of the timestamps carried in the forecast feed
const FEED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts a temperature in Kelvin to whole degrees Celsius.
///
/// The fractional part is removed with floor, not by rounding to nearest,
/// so 300 K becomes 26 and not 27. Displayed temperatures depend on this.
///
/// # Arguments
///
/// * 'kelvin' - the temperature in Kelvin
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - 273.15).floor() as i64
}

/// Converts a wind speed in m/s to a display string in km/h.
///
/// The value is rounded to the nearest whole km/h, which differs from the
/// floor used for temperatures.
///
/// # Arguments
///
/// * 'speed' - the wind speed in meters per second
pub fn meters_per_second_to_km_per_hour(speed: f64) -> String {
    let km_per_hour = speed * 3.6;
    format!("{}km/h", km_per_hour.round() as i64)
}

/// Converts a visibility in meters to a display string in whole kilometers
///
/// # Arguments
///
/// * 'meters' - the visibility in meters
pub fn meters_to_kilometers(meters: f64) -> String {
    let kilometers = meters / 1000.0;
    format!("{}km", kilometers.round() as i64)
}

/// Selects the day or night variant of a weather icon code by replacing its
/// final character with 'd' or 'n'.
///
/// The hour is taken from a timestamp as supplied by the forecast feed.
/// Hours in 6..18 give the day variant and everything else the night
/// variant, so 18:00 exactly is night. A timestamp that does not parse also
/// gives the night variant, and an empty icon code is returned unchanged.
///
/// Icon codes are listed at https://openweathermap.org/weather-conditions
///
/// # Arguments
///
/// * 'icon' - the icon code, e.g. 01d
/// * 'date_time' - the feed timestamp the icon is valid for
pub fn day_or_night_icon(icon: &str, date_time: &str) -> String {
    let is_day_time = NaiveDateTime::parse_from_str(date_time, FEED_TIME_FORMAT)
        .map(|dt| dt.hour() >= DAY_FROM_HOUR && dt.hour() < NIGHT_FROM_HOUR)
        .unwrap_or(false);

    let mut chars = icon.chars().collect::<Vec<char>>();
    if chars.pop().is_none() {
        return String::new();
    }
    chars.push(if is_day_time { 'd' } else { 'n' });

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_celsius_floors() {
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(300.0), 26);
        assert_eq!(kelvin_to_celsius(272.15), -1);
    }

    #[test]
    fn test_wind_speed_rounds_to_nearest() {
        assert_eq!(meters_per_second_to_km_per_hour(5.0), "18km/h");
        assert_eq!(meters_per_second_to_km_per_hour(0.0), "0km/h");
        assert_eq!(meters_per_second_to_km_per_hour(5.2), "19km/h");
    }

    #[test]
    fn test_meters_to_kilometers() {
        assert_eq!(meters_to_kilometers(10000.0), "10km");
        assert_eq!(meters_to_kilometers(700.0), "1km");
    }

    #[test]
    fn test_icon_day_boundaries() {
        assert_eq!(day_or_night_icon("01n", "2024-06-19 06:00:00"), "01d");
        assert_eq!(day_or_night_icon("01d", "2024-06-19 17:59:59"), "01d");
        assert_eq!(day_or_night_icon("01d", "2024-06-19 18:00:00"), "01n");
        assert_eq!(day_or_night_icon("01d", "2024-06-19 03:00:00"), "01n");
    }

    #[test]
    fn test_icon_bad_input_degrades() {
        assert_eq!(day_or_night_icon("01d", "not a timestamp"), "01n");
        assert_eq!(day_or_night_icon("", "2024-06-19 09:00:00"), "");
    }
}
