//! Individual room state
//!
//! This module contains the Room struct: one inventory unit with a fixed
//! nightly price and a per-day occupancy bitmap covering the whole simulation
//! horizon.

use crate::types::RoomType;
use serde::{Deserialize, Serialize};

/// A single hotel room with its occupancy schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier within the inventory
    pub id: usize,
    /// Category of the room
    pub room_type: RoomType,
    /// Fixed price per night
    pub nightly_price: i64,
    /// One flag per simulation day; true iff an accepted stay covers that day.
    /// Bits are only ever set, never cleared (no check-out modeled).
    occupancy: Vec<bool>,
}

impl Room {
    /// Create a new vacant room with an occupancy bitmap of `days` entries
    pub fn new(id: usize, room_type: RoomType, days: usize) -> Self {
        Self { id, room_type, nightly_price: room_type.nightly_price(), occupancy: vec![false; days] }
    }

    /// Check whether the room is free for every day in `[check_in, check_out)`
    pub fn is_available(&self, check_in: usize, check_out: usize) -> bool {
        !self.occupancy[check_in..check_out].iter().any(|&occupied| occupied)
    }

    /// Mark the room occupied for every day in `[check_in, check_out)`
    pub fn check_in(&mut self, check_in: usize, check_out: usize) {
        for day in check_in..check_out {
            self.occupancy[day] = true;
        }
    }

    /// Check whether the room is occupied on the given day
    pub fn is_occupied(&self, day: usize) -> bool {
        self.occupancy[day]
    }

    /// Total price for a stay of `[check_in, check_out)`, nights times nightly price
    pub fn stay_price(&self, check_in: usize, check_out: usize) -> i64 {
        self.nightly_price * (check_out - check_in) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_fully_vacant() {
        let room = Room::new(0, RoomType::Single, 10);
        assert_eq!(room.nightly_price, 70);
        for day in 0..10 {
            assert!(!room.is_occupied(day));
        }
        assert!(room.is_available(0, 10));
    }

    #[test]
    fn test_check_in_marks_exclusive_range() {
        let mut room = Room::new(0, RoomType::Lux, 5);
        room.check_in(1, 3);

        assert!(!room.is_occupied(0));
        assert!(room.is_occupied(1));
        assert!(room.is_occupied(2));
        // check_out day itself stays free
        assert!(!room.is_occupied(3));
        assert!(!room.is_occupied(4));
    }

    #[test]
    fn test_availability_blocked_by_any_overlap() {
        let mut room = Room::new(0, RoomType::SimpleDouble, 6);
        room.check_in(2, 4);

        assert!(!room.is_available(0, 3)); // overlaps day 2
        assert!(!room.is_available(3, 5)); // overlaps day 3
        assert!(room.is_available(0, 2)); // ends where the stay begins
        assert!(room.is_available(4, 6)); // begins where the stay ends
    }

    #[test]
    fn test_occupancy_bits_are_never_cleared() {
        let mut room = Room::new(0, RoomType::HalfLux, 4);
        room.check_in(0, 2);
        room.check_in(2, 4);

        for day in 0..4 {
            assert!(room.is_occupied(day));
        }
    }

    #[test]
    fn test_stay_price_is_nights_times_nightly() {
        let room = Room::new(0, RoomType::HalfLux, 10);
        assert_eq!(room.stay_price(2, 5), 300);
        assert_eq!(room.stay_price(0, 1), 100);
    }
}
