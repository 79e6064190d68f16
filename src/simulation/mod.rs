//! Simulation orchestration and control
//!
//! This module contains the simulation driver, the day/hour clock, statistics
//! collection, logging setup, and error handling.
//!
//! # Overview
//!
//! - **SimulationDriver**: Main controller that coordinates clock, generator,
//!   inventory, and statistics
//! - **SimulationClock**: Integer day/hour time with fixed-size steps
//! - **StatisticsAccumulator**: Running aggregates over processed batches
//! - **LoggingConfig**: Structured logging initialization
//! - **SimulationError**: Error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_simulator::simulation::SimulationDriver;
//! use hotel_booking_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig { seed: Some(7), ..Default::default() };
//! let mut driver = SimulationDriver::new(config).unwrap();
//!
//! while driver.step() {
//!     print!("{}", driver.reservation_log());
//! }
//!
//! let snapshot = driver.snapshot();
//! println!("profit: {}", snapshot.profit);
//! ```

pub mod clock;
pub mod driver;
pub mod error;
pub mod logging;
pub mod statistics;

pub use clock::SimulationClock;
pub use driver::SimulationDriver;
pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use statistics::{StatisticsAccumulator, StatisticsSnapshot};
