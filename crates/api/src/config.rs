//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the timetable
//! server. It retrieves configuration values from environment variables and
//! provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `TIMETABLE_SEED`: Seed for reproducible timetables (default: random)
//! - `TIMETABLE_LUNCH_AFTER_SLOT`: Instructional slots before lunch (default: 3)
//! - `TIMETABLE_DAY_START`: 24-hour start of the first slot (default: "8:50")
//! - `TIMETABLE_SLOT_MINUTES`: Length of a slot in minutes (default: 50)

use eyre::{Result, WrapErr};
use std::env;
use timetable_core::generator::{GeneratorSettings, DEFAULT_LUNCH_AFTER_SLOT};
use timetable_core::time_label::SlotClock;
use tracing::Level;

/// Configuration for the timetable server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use timetable_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Fixed seed for the timetable random source
    pub seed: Option<u64>,

    /// Weekdays and lunch placement
    pub generator: GeneratorSettings,

    /// First slot start time and slot length
    pub clock: SlotClock,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - TIMETABLE_SEED or TIMETABLE_LUNCH_AFTER_SLOT is not an integer
    /// - TIMETABLE_DAY_START or TIMETABLE_SLOT_MINUTES is not a valid clock
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Timetable settings
        let seed = lookup("TIMETABLE_SEED")
            .map(|seed| seed.trim().parse::<u64>())
            .transpose()
            .wrap_err("Invalid TIMETABLE_SEED value")?;

        let lunch_after_slot = lookup("TIMETABLE_LUNCH_AFTER_SLOT")
            .map(|slot| slot.trim().parse::<usize>())
            .transpose()
            .wrap_err("Invalid TIMETABLE_LUNCH_AFTER_SLOT value")?
            .unwrap_or(DEFAULT_LUNCH_AFTER_SLOT);

        let defaults = SlotClock::default();
        let slot_minutes = lookup("TIMETABLE_SLOT_MINUTES")
            .map(|minutes| minutes.trim().parse::<u32>())
            .transpose()
            .wrap_err("Invalid TIMETABLE_SLOT_MINUTES value")?
            .unwrap_or(defaults.duration_minutes);

        let clock = match lookup("TIMETABLE_DAY_START") {
            Some(start) => SlotClock::parse_start(&start, slot_minutes),
            None => SlotClock::new(defaults.start_hour, defaults.start_minute, slot_minutes),
        }
        .wrap_err("Invalid TIMETABLE_DAY_START or TIMETABLE_SLOT_MINUTES value")?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            seed,
            generator: GeneratorSettings {
                lunch_after_slot,
                ..GeneratorSettings::default()
            },
            clock,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
