use log::error;
use crate::worker::run;

mod bucketing;
mod config;
mod conversions;
mod display;
mod errors;
mod initialization;
mod manager_openweather;
mod models;
mod search;
mod state;
mod worker;

fn main() {
    let (config, mgr, mut state) = match initialization::init() {
        Ok(initialized) => initialized,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    if let Err(e) = run(config, &mgr, &mut state) {
        error!("{}", e);
    }
}
