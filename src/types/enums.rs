//! Enumeration types for the hotel booking simulator
//!
//! This module contains the room category enumeration with its quality ranking
//! and nightly price tables used throughout the simulation system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of bookable hotel rooms, plus a sentinel for "no room assigned"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomType {
    /// One bed, lowest quality rank
    Single,
    /// Two beds
    SimpleDouble,
    /// Two beds plus a sofa
    DoubleWithSofa,
    /// Junior suite
    HalfLux,
    /// Full suite, highest quality rank
    Lux,
    /// Sentinel for failed allocations; never present in inventory
    NotARoom,
}

impl RoomType {
    /// The five bookable categories in ascending quality order
    pub const BOOKABLE: [RoomType; 5] = [
        RoomType::Single,
        RoomType::SimpleDouble,
        RoomType::DoubleWithSofa,
        RoomType::HalfLux,
        RoomType::Lux,
    ];

    /// Quality rank used for upgrade fallback, 1 (lowest) through 5 (highest).
    ///
    /// The ranking is a fixed lookup table rather than derived enum ordering
    /// so the upgrade policy stays explicit and testable. The sentinel ranks 0
    /// and is never eligible as an upgrade target.
    pub fn quality_rank(&self) -> u8 {
        match self {
            RoomType::Single => 1,
            RoomType::SimpleDouble => 2,
            RoomType::DoubleWithSofa => 3,
            RoomType::HalfLux => 4,
            RoomType::Lux => 5,
            RoomType::NotARoom => 0,
        }
    }

    /// Fixed nightly price for this category
    pub fn nightly_price(&self) -> i64 {
        match self {
            RoomType::Single => 70,
            RoomType::SimpleDouble => 80,
            RoomType::DoubleWithSofa => 90,
            RoomType::HalfLux => 100,
            RoomType::Lux => 120,
            RoomType::NotARoom => 0,
        }
    }

    /// Check whether this is a real bookable category (not the sentinel)
    pub fn is_room(&self) -> bool {
        *self != RoomType::NotARoom
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Single => write!(f, "SINGLE"),
            RoomType::SimpleDouble => write!(f, "DOUBLE"),
            RoomType::DoubleWithSofa => write!(f, "DOUBLE-SOFA"),
            RoomType::HalfLux => write!(f, "Half-LUX"),
            RoomType::Lux => write!(f, "LUX"),
            RoomType::NotARoom => write!(f, "NOT-A-ROOM"),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" | "simple double" | "simpledouble" => Ok(RoomType::SimpleDouble),
            "double-sofa" | "double with sofa" | "doublewithsofa" => Ok(RoomType::DoubleWithSofa),
            "half-lux" | "half lux" | "halflux" => Ok(RoomType::HalfLux),
            "lux" => Ok(RoomType::Lux),
            _ => Err(format!("Unknown room type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_ranks_are_strictly_ascending() {
        let ranks: Vec<u8> = RoomType::BOOKABLE.iter().map(|t| t.quality_rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(RoomType::NotARoom.quality_rank(), 0);
    }

    #[test]
    fn test_nightly_prices() {
        assert_eq!(RoomType::Single.nightly_price(), 70);
        assert_eq!(RoomType::SimpleDouble.nightly_price(), 80);
        assert_eq!(RoomType::DoubleWithSofa.nightly_price(), 90);
        assert_eq!(RoomType::HalfLux.nightly_price(), 100);
        assert_eq!(RoomType::Lux.nightly_price(), 120);
    }

    #[test]
    fn test_sentinel_is_not_a_room() {
        assert!(!RoomType::NotARoom.is_room());
        for room_type in RoomType::BOOKABLE {
            assert!(room_type.is_room());
        }
    }

    #[test]
    fn test_room_type_display() {
        assert_eq!(format!("{}", RoomType::Single), "SINGLE");
        assert_eq!(format!("{}", RoomType::SimpleDouble), "DOUBLE");
        assert_eq!(format!("{}", RoomType::DoubleWithSofa), "DOUBLE-SOFA");
        assert_eq!(format!("{}", RoomType::HalfLux), "Half-LUX");
        assert_eq!(format!("{}", RoomType::Lux), "LUX");
    }

    #[test]
    fn test_room_type_from_str() {
        assert_eq!("single".parse::<RoomType>().unwrap(), RoomType::Single);
        assert_eq!("double".parse::<RoomType>().unwrap(), RoomType::SimpleDouble);
        assert_eq!("double-sofa".parse::<RoomType>().unwrap(), RoomType::DoubleWithSofa);
        assert_eq!("half-lux".parse::<RoomType>().unwrap(), RoomType::HalfLux);
        assert_eq!("lux".parse::<RoomType>().unwrap(), RoomType::Lux);

        // Test error case
        assert!("penthouse".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let room_type = RoomType::HalfLux;
        let json = serde_json::to_string(&room_type).unwrap();
        let deserialized: RoomType = serde_json::from_str(&json).unwrap();
        assert_eq!(room_type, deserialized);
    }
}
