use crate::shared::domain::value_objects::LlmChoice;
use crate::shared::errors::{AppError, AppResult};
use chrono::{Duration as DateDuration, NaiveDate, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "DailyScreamSheet (screamsheet)";

/// Point the weather strip is forecast for
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Default for WeatherLocation {
    fn default() -> Self {
        Self {
            latitude: 40.02,
            longitude: -75.34,
            name: "Bryn Mawr, PA".to_string(),
        }
    }
}

/// Runtime configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: Option<String>,
    pub grok_api_key: Option<String>,
    pub llm: LlmChoice,
    pub output_dir: PathBuf,
    pub font_dir: PathBuf,
    pub font_family: String,
    pub timezone: Tz,
    /// Replay captured responses from here instead of calling the network
    pub snapshot_dir: Option<PathBuf>,
    /// Write every live response here
    pub dump_dir: Option<PathBuf>,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub weather: WeatherLocation,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            grok_api_key: None,
            llm: LlmChoice::default(),
            output_dir: PathBuf::from("Files"),
            font_dir: PathBuf::from("fonts"),
            font_family: "LiberationSans".to_string(),
            timezone: chrono_tz::America::New_York,
            snapshot_dir: None,
            dump_dir: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: Duration::from_secs(30),
            weather: WeatherLocation::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment after reading `.env`
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        settings.gemini_api_key = get("GEMINI_API_KEY");
        settings.grok_api_key = get("GROK_API_KEY");

        if let Some(llm) = get("SCREAMSHEET_LLM") {
            settings.llm = llm.parse()?;
        }
        if let Some(dir) = get("SCREAMSHEET_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("SCREAMSHEET_FONT_DIR") {
            settings.font_dir = PathBuf::from(dir);
        }
        if let Some(family) = get("SCREAMSHEET_FONT_FAMILY") {
            settings.font_family = family;
        }
        if let Some(tz) = get("SCREAMSHEET_TIMEZONE") {
            settings.timezone = tz
                .parse::<Tz>()
                .map_err(|e| AppError::ConfigError(format!("SCREAMSHEET_TIMEZONE: {}", e)))?;
        }
        settings.snapshot_dir = get("SCREAMSHEET_SNAPSHOT_DIR").map(PathBuf::from);
        settings.dump_dir = get("SCREAMSHEET_DUMP_DIR").map(PathBuf::from);
        if let Some(agent) = get("SCREAMSHEET_USER_AGENT") {
            settings.user_agent = agent;
        }
        if let Some(secs) = get("SCREAMSHEET_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("SCREAMSHEET_HTTP_TIMEOUT_SECS: '{}'", secs))
            })?;
            settings.http_timeout = Duration::from_secs(secs);
        }

        if let Some(lat) = get("WEATHER_LAT") {
            settings.weather.latitude = parse_coordinate("WEATHER_LAT", &lat)?;
        }
        if let Some(lon) = get("WEATHER_LON") {
            settings.weather.longitude = parse_coordinate("WEATHER_LON", &lon)?;
        }
        if let Some(name) = get("WEATHER_LOCATION") {
            settings.weather.name = name;
        }

        Ok(settings)
    }

    /// Today's date in the configured timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Sports sheets cover the games finished the day before
    pub fn yesterday(&self) -> NaiveDate {
        self.today() - DateDuration::days(1)
    }
}

fn parse_coordinate(key: &str, value: &str) -> AppResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::ConfigError(format!("{}: '{}' is not a coordinate", key, value)))
}
