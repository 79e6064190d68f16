//! End-to-end allocation tests for the room inventory
//!
//! These tests exercise the exact-then-upgrade matching algorithm against
//! small hand-built inventories where every outcome can be computed by hand.

use hotel_booking_simulator::booking::Request;
use hotel_booking_simulator::hotel::Hotel;
use hotel_booking_simulator::types::RoomType;

/// A single room blocks the overlapping follow-up request
#[test]
fn test_overlapping_request_is_rejected() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 1)], 3);

    let first = hotel.allocate(&Request::new(RoomType::Single, 0, 2));
    assert!(first.is_success());
    assert_eq!(first.assigned_type, RoomType::Single);
    assert_eq!(first.cost, 70 * 2);
    assert!(!first.discounted);

    let second = hotel.allocate(&Request::new(RoomType::Single, 1, 3));
    assert!(!second.is_success());
    assert_eq!(second.cost, -1);

    assert_eq!(hotel.occupied_count(0), 1);
    assert_eq!(hotel.occupied_count(1), 1);
    assert_eq!(hotel.occupied_count(2), 0);
}

/// Exclusive check-out lets a back-to-back stay reuse the same room
#[test]
fn test_back_to_back_stays_share_a_room() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 1)], 5);

    assert!(hotel.allocate(&Request::new(RoomType::Single, 0, 2)).is_success());
    let follow_up = hotel.allocate(&Request::new(RoomType::Single, 2, 4));
    assert!(follow_up.is_success());
    assert!(!follow_up.discounted);
}

/// With the desired type taken, a better room is assigned at 70% of its price
#[test]
fn test_upgrade_applies_thirty_percent_discount() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 1), (RoomType::Lux, 1)], 5);

    let batch = [
        Request::new(RoomType::Single, 0, 2),
        Request::new(RoomType::Single, 0, 2),
    ];
    let results = hotel.process_requests(&batch);

    assert_eq!(results[0].assigned_type, RoomType::Single);
    assert_eq!(results[0].cost, 70 * 2);

    assert_eq!(results[1].assigned_type, RoomType::Lux);
    assert!(results[1].discounted);
    // floor(120 * 2 * 0.7)
    assert_eq!(results[1].cost, 168);
}

/// Upgrades only go up in quality; a LUX request never lands in a lesser room
#[test]
fn test_no_downgrade_on_full_top_tier() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 2), (RoomType::Lux, 1)], 5);

    assert!(hotel.allocate(&Request::new(RoomType::Lux, 0, 3)).is_success());
    let rejected = hotel.allocate(&Request::new(RoomType::Lux, 0, 3));
    assert!(!rejected.is_success());
}

/// Among equally suitable rooms the lowest id wins, and upgrades pick the
/// least luxurious upgrade tier first
#[test]
fn test_first_id_wins_across_upgrade_tiers() {
    let mut hotel = Hotel::new(
        &[(RoomType::Single, 1), (RoomType::HalfLux, 1), (RoomType::Lux, 1)],
        5,
    );
    let half_lux_id = hotel
        .rooms()
        .iter()
        .find(|room| room.room_type == RoomType::HalfLux)
        .map(|room| room.id)
        .unwrap();

    assert!(hotel.allocate(&Request::new(RoomType::Single, 0, 2)).is_success());

    // Both Half-LUX and LUX are free; Half-LUX has the lower id
    let upgraded = hotel.allocate(&Request::new(RoomType::Single, 0, 2));
    assert_eq!(upgraded.assigned_type, RoomType::HalfLux);
    assert_eq!(upgraded.room_id, Some(half_lux_id));
    assert_eq!(upgraded.cost, 100 * 2 * 7 / 10);
}

/// Room ids leave a gap between consecutive type blocks
#[test]
fn test_room_id_blocks_are_non_contiguous() {
    let hotel = Hotel::new(&[(RoomType::Single, 2), (RoomType::SimpleDouble, 2)], 5);
    let ids: Vec<usize> = hotel.rooms().iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![0, 1, 3, 4]);
}

/// Invalid requests fail without touching any room
#[test]
fn test_invalid_request_leaves_inventory_untouched() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 1)], 3);

    for request in [
        Request::out_of_range(),
        Request::new(RoomType::Single, 2, 2),
        Request::new(RoomType::Single, 2, 1),
        Request::new(RoomType::Single, 1, 4),
    ] {
        let result = hotel.allocate(&request);
        assert!(!result.is_success());
    }

    for day in 0..3 {
        assert_eq!(hotel.occupied_count(day), 0);
    }
}

/// Batches are settled strictly in order, so an earlier request can starve a
/// later one within the same batch
#[test]
fn test_batch_order_decides_contention() {
    let mut hotel = Hotel::new(&[(RoomType::Lux, 1)], 5);

    let batch = [
        Request::new(RoomType::Lux, 0, 4),
        Request::new(RoomType::Lux, 1, 2),
    ];
    let results = hotel.process_requests(&batch);

    assert!(results[0].is_success());
    assert!(!results[1].is_success());
}

/// Per-type occupancy report includes untouched types at zero
#[test]
fn test_occupancy_by_type_is_zero_filled() {
    let mut hotel = Hotel::new(&[(RoomType::Single, 2), (RoomType::Lux, 2)], 5);
    hotel.allocate(&Request::new(RoomType::Lux, 0, 1));

    let by_type = hotel.occupied_count_by_type(0);
    assert_eq!(by_type[&RoomType::Single], 0);
    assert_eq!(by_type[&RoomType::Lux], 1);
}
