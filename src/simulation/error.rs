//! Error types for the simulation
//!
//! Business failures (no room available, invalid date range) are never
//! errors; they are recorded as failed allocation results. The errors here
//! cover configuration mistakes and I/O around the simulation itself.

use thiserror::Error;

/// Errors that can occur while setting up or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration precondition violated (programmer error, not a business
    /// condition; external validation should have caught it earlier)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Inventory setup failed
    #[error("Inventory error: {0}")]
    InventoryError(String),

    /// Statistics accumulation failed
    #[error("Statistics error: {0}")]
    StatisticsError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<anyhow::Error> for SimulationError {
    fn from(error: anyhow::Error) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an inventory error
    pub fn inventory_error(msg: impl Into<String>) -> Self {
        Self::InventoryError(msg.into())
    }

    /// Create a statistics error
    pub fn statistics_error(msg: impl Into<String>) -> Self {
        Self::StatisticsError(msg.into())
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
