use std::env;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config};
use crate::errors::MyWeatherInitError;
use crate::manager_openweather::OpenWeather;
use crate::state::DashboardState;

/// Default configuration file path when CONFIG_FILE is not set
const DEFAULT_CONFIG_FILE: &str = "myweather.toml";

/// Log line format for both file and stdout output
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}";

/// Struct holding the managers used by the worker
pub struct Mgr {
    pub openweather: OpenWeather,
}

/// Initializes and returns the Config, Mgr and DashboardState structs
///
/// The API key is the only secret and comes from the environment, all
/// other configuration lives in the configuration file.
pub fn init() -> Result<(Config, Mgr, DashboardState), MyWeatherInitError> {
    let api_key = env::var("WEATHER_API_KEY")
        .map_err(|_| MyWeatherInitError("Error getting WEATHER_API_KEY".to_string()))?;
    let config_file = env::var("CONFIG_FILE").unwrap_or(DEFAULT_CONFIG_FILE.to_string());

    let config = load_config(&config_file)?;
    setup_logging(&config)?;

    info!("myweather version: {}", env!("CARGO_PKG_VERSION"));

    let openweather = OpenWeather::new(api_key);
    let state = DashboardState::new(&config.dashboard.place);

    Ok((config, Mgr { openweather }, state))
}

/// Sets up log4rs with a file appender and, when configured, a stdout
/// appender
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn setup_logging(config: &Config) -> Result<(), MyWeatherInitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&config.general.log_path)?;

    let mut builder = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(config.general.log_level))?;
    let _ = log4rs::init_config(log_config)?;

    Ok(())
}
