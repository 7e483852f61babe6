use std::io;
use std::io::BufRead;
use std::time::{Duration, Instant};
use chrono::Local;
use log::{info, warn};
use anyhow::Result;
use crate::bucketing::{sanitize_all, DashboardData};
use crate::config::Config;
use crate::display::{render_dashboard, render_suggestions};
use crate::errors::MyWeatherWorkerError;
use crate::initialization::Mgr;
use crate::search::{QueryDecision, QueryGate};
use crate::state::DashboardState;

/// Runs the dashboard loop: fetch and render the forecast for the
/// configured start place, then process commands from stdin until quit
/// or end of input.
///
/// Commands:
/// * search <text> - look up place name suggestions
/// * go <place> - switch the dashboard to a new place
/// * locate - switch to the place at the configured coordinates
/// * refresh - fetch the current place again
/// * quit - exit
///
/// Only one fetch is ever in flight since all commands are handled to
/// completion before the next line is read.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the managers to fetch with
/// * 'state' - the dashboard state to read and update
pub fn run(config: Config, mgr: &Mgr, state: &mut DashboardState) -> Result<(), MyWeatherWorkerError> {
    let mut gate = QueryGate::new(
        config.dashboard.min_query_len,
        Duration::from_millis(config.dashboard.min_query_interval_ms),
    );

    show_forecast(&config, mgr, state.place());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if let Some(query) = input.strip_prefix("search ") {
            handle_search(mgr, state, &mut gate, query.trim());
        } else if let Some(place) = input.strip_prefix("go ") {
            handle_go(&config, mgr, state, place.trim());
        } else if input == "locate" {
            handle_locate(&config, mgr, state);
        } else if input == "refresh" {
            show_forecast(&config, mgr, state.place());
        } else if input == "quit" || input == "exit" {
            break;
        } else if !input.is_empty() {
            print_msg("Commands: search <text>, go <place>, locate, refresh, quit", "Help");
        }
    }

    Ok(())
}

/// Handles one search input change: run it through the gate and, if it is
/// admitted, look up and show suggestions.
///
/// A failed lookup just clears the suggestion list, the search box is not
/// the place to surface errors.
///
/// # Arguments
///
/// * 'mgr' - the managers to fetch with
/// * 'state' - the dashboard state
/// * 'gate' - the query admission gate
/// * 'query' - the current search text
fn handle_search(mgr: &Mgr, state: &mut DashboardState, gate: &mut QueryGate, query: &str) {
    match gate.decide(query, Instant::now()) {
        QueryDecision::Clear => state.clear_suggestions(),
        QueryDecision::Skip => (),
        QueryDecision::Admit => {
            state.begin_suggestion_lookup(query);
            match mgr.openweather.find_places(query) {
                Ok(names) => {
                    if state.apply_suggestions(query, names) {
                        print_msg(&render_suggestions(state.suggestions()), "Suggestions");
                    }
                }
                Err(e) => {
                    warn!("suggestion lookup for '{}' failed: {}", query, e);
                    state.clear_suggestions();
                }
            }
        }
    }
}

/// Handles a place submit. Without any suggestion candidates from a
/// previous search the place is not accepted, matching the search box
/// behavior of requiring a confirmed location.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the managers to fetch with
/// * 'state' - the dashboard state
/// * 'place' - the submitted place name
fn handle_go(config: &Config, mgr: &Mgr, state: &mut DashboardState, place: &str) {
    if state.suggestions().is_empty() {
        print_msg("Location not found", "Search");
        return;
    }

    state.begin_place_change();
    print_loading(state);

    if show_forecast(config, mgr, place) {
        state.commit_place(place);
    } else {
        state.cancel_place_change();
    }
}

/// Handles the locate command: reverse geocode the configured coordinates
/// and switch to the resulting place.
///
/// A failed lookup only clears the loading flag, the current place stays
/// as it is and no error is shown.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the managers to fetch with
/// * 'state' - the dashboard state
fn handle_locate(config: &Config, mgr: &Mgr, state: &mut DashboardState) {
    state.begin_place_change();
    print_loading(state);

    match mgr.openweather.get_place_name(config.geo_ref.lat, config.geo_ref.long) {
        Ok(name) => {
            if show_forecast(config, mgr, &name) {
                state.commit_place(&name);
            } else {
                state.cancel_place_change();
            }
        }
        Err(e) => {
            warn!("reverse geocoding failed: {}", e);
            state.cancel_place_change();
        }
    }
}

/// Fetches, shapes and prints the forecast for a place. Returns true when
/// the dashboard was rendered and false when the fetch or shaping failed,
/// in which case the error is shown and the previous view stands.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the managers to fetch with
/// * 'place' - the place to fetch for
fn show_forecast(config: &Config, mgr: &Mgr, place: &str) -> bool {
    match fetch_dashboard(config, mgr, place) {
        Ok(view) => {
            print_msg(&view, "Forecast");
            true
        }
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}

/// Fetches the forecast for a place and shapes it into the rendered
/// dashboard view
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the managers to fetch with
/// * 'place' - the place to fetch for
fn fetch_dashboard(config: &Config, mgr: &Mgr, place: &str) -> Result<String, MyWeatherWorkerError> {
    let response = mgr.openweather
        .get_forecast(place, config.dashboard.forecast_count)
        .map_err(|e| MyWeatherWorkerError::new(e.to_string(), place))?;

    let samples = sanitize_all(&response.list);
    let data = DashboardData::new(&samples)
        .ok_or(MyWeatherWorkerError::new("empty forecast".to_string(), place))?;

    info!("forecast fetched for {}: {} samples, {} days", place, samples.len(), data.daily.len());

    Ok(render_dashboard(&samples, &data, &response.city))
}

/// Prints the loading indicator while a place change is in flight
///
/// # Arguments
///
/// * 'state' - the dashboard state
fn print_loading(state: &DashboardState) {
    if state.is_loading() {
        println!("Loading...");
    }
}

/// Prints a message with a caption
///
/// # Arguments
///
/// * 'message' - the message
/// * 'caption' - the caption to print
fn print_msg(message: &str, caption: &str) {
    let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let caption = format!("{} {} ", report_time, caption);

    let msg = format!("{:=<96}\n{}\n", caption, message);
    println!("{}", msg);
}
