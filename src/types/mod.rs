//! Core types for the hotel booking simulator
//!
//! This module contains the fundamental enumerations and configuration
//! structures used throughout the simulation system.
//!
//! # Overview
//!
//! - **Enums**: the `RoomType` category set with its quality-rank and
//!   nightly-price lookup tables
//! - **Configuration**: simulation configuration with validation and CLI
//!   support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_simulator::types::*;
//!
//! let room_type = RoomType::HalfLux;
//! assert_eq!(room_type.quality_rank(), 4);
//!
//! let config = SimulationConfig {
//!     days: 20,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! config.validate().unwrap();
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
