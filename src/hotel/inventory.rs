//! Room inventory and allocation
//!
//! This module contains the Hotel struct: the owner of all rooms, the
//! availability/upgrade search, and the check-in bookkeeping.

use crate::booking::{AllocationResult, Request};
use crate::hotel::Room;
use crate::types::RoomType;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Numerator/denominator of the price kept after an upgrade discount (30% off)
const UPGRADE_PRICE_KEEP: i64 = 7;
const UPGRADE_PRICE_BASE: i64 = 10;

/// A hotel owning a fixed room inventory for one simulation run
#[derive(Debug, Clone)]
pub struct Hotel {
    /// All rooms, grouped in per-type blocks with ascending ids
    rooms: Vec<Room>,
    /// The room counts the inventory was constructed with
    room_counts: BTreeMap<RoomType, usize>,
    /// Simulation horizon in days
    days: usize,
}

impl Hotel {
    /// Build the inventory: one block of rooms per type, each room with a
    /// zero-initialized occupancy bitmap of length `days`.
    ///
    /// Ids are assigned sequentially within each block with a one-id gap
    /// between blocks; the gaps are cosmetic and carry no meaning beyond
    /// keeping ids unique.
    pub fn new(rooms_per_type: &[(RoomType, usize)], days: usize) -> Self {
        let mut rooms = Vec::new();
        let mut room_counts = BTreeMap::new();
        let mut next_id = 0;

        for &(room_type, count) in rooms_per_type {
            for id in next_id..next_id + count {
                rooms.push(Room::new(id, room_type, days));
            }
            room_counts.insert(room_type, count);
            next_id += count + 1;
        }

        debug!(total_rooms = rooms.len(), days, "Hotel inventory constructed");
        Self { rooms, room_counts, days }
    }

    /// Two-pass availability search.
    ///
    /// The first pass accepts only an exact type match; only when no exact
    /// match is free does the second pass accept any room of strictly higher
    /// quality rank (an upgrade). Within each pass the first free room in
    /// ascending-id order wins.
    pub fn find_available(
        &self,
        room_type: RoomType,
        check_in: usize,
        check_out: usize,
    ) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.room_type == room_type && room.is_available(check_in, check_out))
            .or_else(|| {
                self.rooms.iter().find(|room| {
                    room.room_type.quality_rank() > room_type.quality_rank()
                        && room.is_available(check_in, check_out)
                })
            })
    }

    /// Allocate one request: search, price, and commit the check-in.
    ///
    /// An exact match costs `nightly_price x nights`; an upgrade costs
    /// `floor(nightly_price(upgraded) x nights x 0.7)`. An invalid request or
    /// a request no room can serve yields a failed result, never an error.
    pub fn allocate(&mut self, request: &Request) -> AllocationResult {
        if !request.is_valid(self.days) {
            trace!(?request, "Rejecting invalid request");
            return AllocationResult::failed();
        }

        let (room_id, assigned_type, full_price) =
            match self.find_available(request.desired_type, request.check_in, request.check_out) {
                Some(room) => {
                    (room.id, room.room_type, room.stay_price(request.check_in, request.check_out))
                }
                None => {
                    debug!(
                        desired = %request.desired_type,
                        check_in = request.check_in,
                        check_out = request.check_out,
                        "No room available"
                    );
                    return AllocationResult::failed();
                }
            };

        self.mark_occupied(room_id, request.check_in, request.check_out);

        if assigned_type == request.desired_type {
            AllocationResult::assigned(room_id, assigned_type, full_price)
        } else {
            // 30% discount compensates the guest for not receiving the
            // requested type; integer division floors the result.
            let discounted_price = full_price * UPGRADE_PRICE_KEEP / UPGRADE_PRICE_BASE;
            debug!(
                desired = %request.desired_type,
                assigned = %assigned_type,
                cost = discounted_price,
                "Upgrade with discount"
            );
            AllocationResult::upgraded(room_id, assigned_type, discounted_price)
        }
    }

    /// Allocate a batch strictly in order, committing each check-in before
    /// evaluating the next request so later requests observe earlier stays
    pub fn process_requests(&mut self, requests: &[Request]) -> Vec<AllocationResult> {
        requests.iter().map(|request| self.allocate(request)).collect()
    }

    /// Set the occupancy bits for `[check_in, check_out)` on one room
    fn mark_occupied(&mut self, room_id: usize, check_in: usize, check_out: usize) {
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id) {
            room.check_in(check_in, check_out);
        }
    }

    /// Count of rooms occupied on the given day
    pub fn occupied_count(&self, day: usize) -> usize {
        self.rooms.iter().filter(|room| room.is_occupied(day)).count()
    }

    /// Per-type count of rooms occupied on the given day
    pub fn occupied_count_by_type(&self, day: usize) -> BTreeMap<RoomType, usize> {
        let mut occupancy: BTreeMap<RoomType, usize> =
            self.room_counts.keys().map(|&room_type| (room_type, 0)).collect();

        for room in self.rooms.iter().filter(|room| room.is_occupied(day)) {
            *occupancy.entry(room.room_type).or_insert(0) += 1;
        }

        occupancy
    }

    /// Total number of rooms in the inventory
    pub fn total_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// The room counts the inventory was constructed with
    pub fn room_counts(&self) -> &BTreeMap<RoomType, usize> {
        &self.room_counts
    }

    /// Simulation horizon this inventory tracks occupancy for
    pub fn days(&self) -> usize {
        self.days
    }

    /// All rooms in ascending-id iteration order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
