use chrono::{DateTime, Local, NaiveDateTime};
use crate::bucketing::DashboardData;
use crate::conversions::{
    day_or_night_icon, kelvin_to_celsius, meters_per_second_to_km_per_hour, meters_to_kilometers,
};
use crate::models::openweather_forecast::{City, ForecastSample};

/// Number of hourly strip cells per output row
const STRIP_CELLS_PER_ROW: usize = 8;

/// Renders the full dashboard view for one fetched forecast: header,
/// current conditions, hourly strip and the per day forecast list.
///
/// This is a pure consumer of the bucketing output and the conversion
/// functions, it never looks at the raw feed structures.
///
/// # Arguments
///
/// * 'samples' - all sanitized samples in feed order, for the hourly strip
/// * 'data' - the bucketed dashboard data
/// * 'city' - city info from the feed, for name and sun times
pub fn render_dashboard(samples: &[ForecastSample], data: &DashboardData, city: &City) -> String {
    let mut msg = String::new();

    msg += &format!("{}, {}\n", city.name, city.country);
    msg += &format!(
        "{} ({})\n\n",
        format_feed_time(&data.current.dt_txt, "%A"),
        format_feed_time(&data.current.dt_txt, "%d.%m.%Y")
    );

    msg += &render_current(&data.current, city);
    msg += "\n";
    msg += &render_hourly_strip(samples);
    msg += "\n";
    msg += &render_daily(&data.daily, city);

    msg
}

/// Renders the suggestion list shown under the search input
///
/// # Arguments
///
/// * 'suggestions' - the place name candidates
pub fn render_suggestions(suggestions: &[String]) -> String {
    let mut msg = String::new();
    for name in suggestions {
        msg += &format!("  {}\n", name);
    }

    msg
}

/// Renders the current conditions block
fn render_current(current: &ForecastSample, city: &City) -> String {
    let mut msg = String::new();

    msg += &format!(
        "{}°   feels like {}°   {}°↓ {}°↑\n",
        kelvin_to_celsius(current.temp),
        kelvin_to_celsius(current.feels_like),
        kelvin_to_celsius(current.temp_min),
        kelvin_to_celsius(current.temp_max)
    );
    msg += &format!(
        "{} [{}]\n",
        capitalize(&current.description),
        day_or_night_icon(&current.icon, &current.dt_txt)
    );
    msg += &format!(
        "visibility {}   humidity {}%   pressure {} hPa   wind {}\n",
        meters_to_kilometers(current.visibility as f64),
        current.humidity,
        current.pressure,
        meters_per_second_to_km_per_hour(current.wind_speed)
    );
    msg += &format!(
        "sunrise {}   sunset {}\n",
        format_epoch(city.sunrise, "%-H:%M"),
        format_epoch(city.sunset, "%-H:%M")
    );

    msg
}

/// Renders every sample as a small time/icon/temperature cell, a fixed
/// number of cells per row
fn render_hourly_strip(samples: &[ForecastSample]) -> String {
    let mut msg = String::new();

    for row in samples.chunks(STRIP_CELLS_PER_ROW) {
        let cells = row
            .iter()
            .map(|s| {
                format!(
                    "{:>8} {:<3} {:>4}",
                    format_feed_time(&s.dt_txt, "%-I.%M %p"),
                    day_or_night_icon(&s.icon, &s.dt_txt),
                    format!("{}°", kelvin_to_celsius(s.temp))
                )
            })
            .collect::<Vec<String>>();
        msg += &format!("{}\n", cells.join(" | "));
    }

    msg
}

/// Renders one line per daily bucket
fn render_daily(daily: &[ForecastSample], city: &City) -> String {
    let mut msg = format!("Forecast ({} days)\n", daily.len());

    for d in daily {
        msg += &format!(
            "{:<9} {:<5}  {:>3}° feels {:>3}°  {:>3}°↓ {:>3}°↑  {:<20} [{}]  {:>4} hPa  {:>3}%  {:>5}  {:>6}  sunrise {} sunset {}\n",
            format_feed_time(&d.dt_txt, "%A"),
            format_feed_time(&d.dt_txt, "%d.%m"),
            kelvin_to_celsius(d.temp),
            kelvin_to_celsius(d.feels_like),
            kelvin_to_celsius(d.temp_min),
            kelvin_to_celsius(d.temp_max),
            d.description,
            d.icon,
            d.pressure,
            d.humidity,
            meters_to_kilometers(d.visibility as f64),
            meters_per_second_to_km_per_hour(d.wind_speed),
            format_epoch(city.sunrise, "%-H:%M"),
            format_epoch(city.sunset, "%-H:%M")
        );
    }

    msg
}

/// Formats a feed timestamp with the given chrono format, or a dash when
/// the timestamp does not parse
fn format_feed_time(dt_txt: &str, format: &str) -> String {
    NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.format(format).to_string())
        .unwrap_or("-".to_string())
}

/// Formats an epoch timestamp as local time with the given chrono format,
/// or a dash for an out of range epoch
fn format_epoch(epoch: i64, format: &str) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.with_timezone(&Local).format(format).to_string())
        .unwrap_or("-".to_string())
}

/// Uppercases the first character of a sky condition text
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_feed_time() {
        assert_eq!(format_feed_time("2024-06-19 09:00:00", "%A"), "Wednesday");
        assert_eq!(format_feed_time("2024-06-19 09:00:00", "%d.%m"), "19.06");
        assert_eq!(format_feed_time("", "%A"), "-");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("scattered clouds"), "Scattered clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_daily_row_uses_converted_units() {
        let sample = ForecastSample {
            dt: 1718787600,
            dt_txt: "2024-06-19 09:00:00".to_string(),
            temp: 300.0,
            feels_like: 301.0,
            temp_min: 298.0,
            temp_max: 302.0,
            pressure: 1012,
            humidity: 64,
            visibility: 10000,
            wind_speed: 5.0,
            icon: "03d".to_string(),
            description: "scattered clouds".to_string(),
        };
        let city = City {
            id: 1,
            name: "Bogor".to_string(),
            coord: crate::models::openweather_forecast::Coord { lat: -6.595, lon: 106.8166 },
            country: "ID".to_string(),
            timezone: 25200,
            sunrise: 1718838135,
            sunset: 1718880393,
        };

        let row = render_daily(&[sample], &city);
        assert!(row.contains("Wednesday"));
        assert!(row.contains("26°"));
        assert!(row.contains("18km/h"));
        assert!(row.contains("10km"));
        assert!(row.contains("scattered clouds"));
    }
}
