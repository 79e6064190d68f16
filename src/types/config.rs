//! Configuration structures for the hotel booking simulator
//!
//! This module contains the simulation configuration structure and validation
//! logic used to control the parameters of the booking simulation.

use super::RoomType;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed bounds for user-supplied simulation parameters
pub mod limits {
    /// Minimum simulation horizon in days
    pub const MIN_DAYS: usize = 12;

    /// Maximum simulation horizon in days
    pub const MAX_DAYS: usize = 30;

    /// Minimum hours advanced per simulation step
    pub const MIN_HOUR_PER_STEP: usize = 1;

    /// Maximum hours advanced per simulation step
    pub const MAX_HOUR_PER_STEP: usize = 6;

    /// Minimum allowed bound for requests generated per step
    pub const MIN_REQUESTS_PER_STEP: usize = 1;

    /// Maximum allowed bound for requests generated per step
    pub const MAX_REQUESTS_PER_STEP: usize = 6;

    /// Minimum room count per bookable type
    pub const MIN_ROOMS_PER_TYPE: usize = 4;

    /// Maximum room count per bookable type
    pub const MAX_ROOMS_PER_TYPE: usize = 6;

    /// Minimum stay duration drawn by the request generator, in nights
    pub const MIN_STAY_NIGHTS: usize = 1;

    /// Maximum stay duration drawn by the request generator, in nights
    pub const MAX_STAY_NIGHTS: usize = 5;

    /// Hours in one simulation day
    pub const HOURS_PER_DAY: usize = 24;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-booking-simulator",
    version = "0.1.0",
    about = "Hotel Booking Simulator - Simulates day-by-day room booking against a finite inventory",
    long_about = "Simulates a hotel's day-by-day booking process: synthetic guest requests arrive \
over a configurable horizon, are matched against a finite room inventory under availability and \
upgrade rules, and aggregate statistics (occupancy, profit, success rate) are tracked per step.

EXAMPLES:
    # Run with default settings
    hotel-booking-simulator

    # Use a configuration file
    hotel-booking-simulator --config config.json

    # Override specific settings
    hotel-booking-simulator --days 20 --hour-per-step 6 --seed 42

    # Generate configuration template
    hotel-booking-simulator --print-config > my-config.json

    # Validate configuration without running
    hotel-booking-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Simulation horizon in days
    #[arg(
        long,
        help = "Simulation horizon in days (12-30)",
        long_help = "Total number of simulated days. Must be between 12 and 30. Default: 14"
    )]
    pub days: Option<usize>,

    /// Hours advanced per simulation step
    #[arg(long, help = "Hours advanced per step (1-6)")]
    pub hour_per_step: Option<usize>,

    /// Minimum requests generated per step
    #[arg(long, help = "Minimum requests per step (1-6, must be < max)")]
    pub min_requests_per_step: Option<usize>,

    /// Maximum requests generated per step
    #[arg(long, help = "Maximum requests per step (1-6, must be > min)")]
    pub max_requests_per_step: Option<usize>,

    /// Number of SINGLE rooms
    #[arg(long, help = "Number of SINGLE rooms (4-6)")]
    pub single_rooms: Option<usize>,

    /// Number of DOUBLE rooms
    #[arg(long, help = "Number of DOUBLE rooms (4-6)")]
    pub double_rooms: Option<usize>,

    /// Number of DOUBLE-SOFA rooms
    #[arg(long, help = "Number of DOUBLE-SOFA rooms (4-6)")]
    pub double_sofa_rooms: Option<usize>,

    /// Number of Half-LUX rooms
    #[arg(long, help = "Number of Half-LUX rooms (4-6)")]
    pub half_lux_rooms: Option<usize>,

    /// Number of LUX rooms
    #[arg(long, help = "Number of LUX rooms (4-6)")]
    pub lux_rooms: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Skip to the end of the horizon after the given number of stepped iterations
    #[arg(
        long,
        help = "Run this many steps, then fast-forward to the end of the horizon",
        long_help = "Run the given number of regular steps, then process all remaining steps as \
one aggregate batch and fold it into the statistics. Pass 0 to fast-forward immediately."
    )]
    pub skip_to_end: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Simulation horizon in days
    pub days: Option<usize>,

    /// Hours advanced per simulation step
    pub hour_per_step: Option<usize>,

    /// Minimum requests generated per step
    pub min_requests_per_step: Option<usize>,

    /// Maximum requests generated per step
    pub max_requests_per_step: Option<usize>,

    /// Number of SINGLE rooms
    pub single_rooms: Option<usize>,

    /// Number of DOUBLE rooms
    pub double_rooms: Option<usize>,

    /// Number of DOUBLE-SOFA rooms
    pub double_sofa_rooms: Option<usize>,

    /// Number of Half-LUX rooms
    pub half_lux_rooms: Option<usize>,

    /// Number of LUX rooms
    pub lux_rooms: Option<usize>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for the booking simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation horizon in days
    pub days: usize,

    /// Hours advanced per simulation step
    pub hour_per_step: usize,

    /// Minimum requests generated per step
    pub min_requests_per_step: usize,

    /// Maximum requests generated per step
    pub max_requests_per_step: usize,

    /// Number of SINGLE rooms
    pub single_rooms: usize,

    /// Number of DOUBLE rooms
    pub double_rooms: usize,

    /// Number of DOUBLE-SOFA rooms
    pub double_sofa_rooms: usize,

    /// Number of Half-LUX rooms
    pub half_lux_rooms: usize,

    /// Number of LUX rooms
    pub lux_rooms: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Simulation horizon is out of range
    #[error("Days must be between {min} and {max}, got {value}", min = limits::MIN_DAYS, max = limits::MAX_DAYS)]
    InvalidDays {
        /// The rejected day count
        value: usize,
    },

    /// Hours per step is out of range
    #[error("Hours per step must be between {min} and {max}, got {value}", min = limits::MIN_HOUR_PER_STEP, max = limits::MAX_HOUR_PER_STEP)]
    InvalidHourPerStep {
        /// The rejected hour increment
        value: usize,
    },

    /// Request range per step is invalid
    #[error("Requests per step must satisfy {low} <= min < max <= {high}, got min {min}, max {max}", low = limits::MIN_REQUESTS_PER_STEP, high = limits::MAX_REQUESTS_PER_STEP)]
    InvalidRequestRange {
        /// The rejected lower bound
        min: usize,
        /// The rejected upper bound
        max: usize,
    },

    /// Room count for a type is out of range
    #[error("Room count for {room_type} must be between {min} and {max}, got {value}", min = limits::MIN_ROOMS_PER_TYPE, max = limits::MAX_ROOMS_PER_TYPE)]
    InvalidRoomCount {
        /// The room type with the rejected count
        room_type: RoomType,
        /// The rejected count
        value: usize,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 14,
            hour_per_step: 4,
            min_requests_per_step: 1,
            max_requests_per_step: 5,
            single_rooms: 5,
            double_rooms: 5,
            double_sofa_rooms: 5,
            half_lux_rooms: 5,
            lux_rooms: 5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            days: config_file.days.unwrap_or(defaults.days),
            hour_per_step: config_file.hour_per_step.unwrap_or(defaults.hour_per_step),
            min_requests_per_step: config_file
                .min_requests_per_step
                .unwrap_or(defaults.min_requests_per_step),
            max_requests_per_step: config_file
                .max_requests_per_step
                .unwrap_or(defaults.max_requests_per_step),
            single_rooms: config_file.single_rooms.unwrap_or(defaults.single_rooms),
            double_rooms: config_file.double_rooms.unwrap_or(defaults.double_rooms),
            double_sofa_rooms: config_file.double_sofa_rooms.unwrap_or(defaults.double_sofa_rooms),
            half_lux_rooms: config_file.half_lux_rooms.unwrap_or(defaults.half_lux_rooms),
            lux_rooms: config_file.lux_rooms.unwrap_or(defaults.lux_rooms),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.hour_per_step {
            config.hour_per_step = value;
        }
        if let Some(value) = args.min_requests_per_step {
            config.min_requests_per_step = value;
        }
        if let Some(value) = args.max_requests_per_step {
            config.max_requests_per_step = value;
        }
        if let Some(value) = args.single_rooms {
            config.single_rooms = value;
        }
        if let Some(value) = args.double_rooms {
            config.double_rooms = value;
        }
        if let Some(value) = args.double_sofa_rooms {
            config.double_sofa_rooms = value;
        }
        if let Some(value) = args.half_lux_rooms {
            config.half_lux_rooms = value;
        }
        if let Some(value) = args.lux_rooms {
            config.lux_rooms = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Validate simulation horizon
        if !(limits::MIN_DAYS..=limits::MAX_DAYS).contains(&self.days) {
            return Err(ConfigValidationError::InvalidDays { value: self.days });
        }

        // Validate hour increment
        if !(limits::MIN_HOUR_PER_STEP..=limits::MAX_HOUR_PER_STEP).contains(&self.hour_per_step) {
            return Err(ConfigValidationError::InvalidHourPerStep { value: self.hour_per_step });
        }

        // Validate request range: min < max, both within the allowed bound
        if self.min_requests_per_step < limits::MIN_REQUESTS_PER_STEP
            || self.max_requests_per_step > limits::MAX_REQUESTS_PER_STEP
            || self.min_requests_per_step >= self.max_requests_per_step
        {
            return Err(ConfigValidationError::InvalidRequestRange {
                min: self.min_requests_per_step,
                max: self.max_requests_per_step,
            });
        }

        // Validate room counts
        for (room_type, count) in self.rooms_per_type() {
            if !(limits::MIN_ROOMS_PER_TYPE..=limits::MAX_ROOMS_PER_TYPE).contains(&count) {
                return Err(ConfigValidationError::InvalidRoomCount { room_type, value: count });
            }
        }

        Ok(())
    }

    /// Get the configured room counts in ascending quality order
    pub fn rooms_per_type(&self) -> Vec<(RoomType, usize)> {
        vec![
            (RoomType::Single, self.single_rooms),
            (RoomType::SimpleDouble, self.double_rooms),
            (RoomType::DoubleWithSofa, self.double_sofa_rooms),
            (RoomType::HalfLux, self.half_lux_rooms),
            (RoomType::Lux, self.lux_rooms),
        ]
    }

    /// Get the request count range per step as a tuple
    pub fn requests_per_step(&self) -> (usize, usize) {
        (self.min_requests_per_step, self.max_requests_per_step)
    }

    /// Total number of rooms across all types
    pub fn total_rooms(&self) -> usize {
        self.rooms_per_type().iter().map(|(_, count)| count).sum()
    }
}
