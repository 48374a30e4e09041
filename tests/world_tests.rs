//! World-level validation tests
//!
//! Exercise initialization, the tick loop, and full delivery scenarios
//! through the public SimWorld API.

use elevator_sim::simulation::{
    ActionKind, Direction, SimWorld, MAX_OCCUPANCY, MAX_RIDER_COUNT, MIN_RIDER_COUNT,
};

#[test]
fn test_rejects_bad_configurations() {
    assert!(SimWorld::new(10, MIN_RIDER_COUNT - 1).is_err());
    assert!(SimWorld::new(10, MAX_RIDER_COUNT + 1).is_err());
    assert!(SimWorld::new(1, 3).is_err(), "one floor allows no trips");
    assert!(SimWorld::new(0, 3).is_err());

    assert!(SimWorld::with_trips(10, &[(3, 3)]).is_err());
    assert!(SimWorld::with_trips(10, &[(0, 4)]).is_err());
    assert!(SimWorld::with_trips(10, &[(2, 11)]).is_err());
}

#[test]
fn test_spawned_trips_are_valid() {
    for seed in 0..20 {
        let world = SimWorld::new_with_seed(10, MAX_RIDER_COUNT, seed).expect("valid config");
        assert_eq!(world.riders().len(), MAX_RIDER_COUNT);
        for rider in world.riders() {
            assert!((1..=10).contains(&rider.current_floor));
            assert!((1..=10).contains(&rider.destination_floor));
            assert_ne!(
                rider.current_floor, rider.destination_floor,
                "seed {seed} produced a trivial trip"
            );
            assert!(!rider.in_elevator);
            assert!(!rider.finished);
        }
    }
}

/// The canonical one-rider walkthrough: 10 floors, rider on 3 heading to 7
#[test]
fn test_single_rider_scenario() {
    let mut world = SimWorld::with_trips(10, &[(3, 7)]).expect("valid trips");

    // Two ticks to climb from floor 1 to the rider on floor 3
    assert!(!world.tick().completed);
    assert_eq!(world.elevator().current_floor, 2);
    assert!(!world.tick().completed);
    assert_eq!(world.elevator().current_floor, 3);

    // Boarding, then the pause frame; the cabin holds position
    assert!(!world.tick().completed);
    let action = world.elevator().pending_action.expect("boarding expected");
    assert_eq!(action.kind, ActionKind::Boarding);
    assert!(world.riders()[0].in_elevator);
    assert!(!world.tick().completed);
    assert_eq!(world.elevator().current_floor, 3);

    // Four ticks to reach the destination
    for expected_floor in 4..=7 {
        assert!(!world.tick().completed);
        assert_eq!(world.elevator().current_floor, expected_floor);
    }

    // Alighting, its pause frame, then nothing left to do
    assert!(!world.tick().completed);
    let action = world.elevator().pending_action.expect("alighting expected");
    assert_eq!(action.kind, ActionKind::Alighting);
    assert!(world.riders()[0].finished);
    assert_eq!(world.riders()[0].current_floor, 7);
    assert!(!world.tick().completed);
    assert!(world.tick().completed);
    assert_eq!(world.ticks(), 11);
}

#[test]
fn test_boarding_beats_movement() {
    // Rider 2's distant pickup request must not pull the cabin away
    let mut world = SimWorld::with_trips(10, &[(1, 5), (9, 2)]).expect("valid trips");

    assert!(!world.tick().completed);
    assert_eq!(
        world.elevator().current_floor,
        1,
        "cabin must not move while a rider boards"
    );
    assert!(world.riders()[0].in_elevator);
}

#[test]
fn test_one_event_per_two_ticks() {
    let mut world = SimWorld::with_trips(10, &[(1, 3), (1, 4)]).expect("valid trips");

    // Rider 1 boards on tick 1; tick 2 is the pause frame
    world.tick();
    assert_eq!(world.elevator().occupants.len(), 1);
    world.tick();
    assert_eq!(
        world.elevator().occupants.len(),
        1,
        "pause frame must not board anyone"
    );

    // Rider 2 only gets their turn on tick 3
    world.tick();
    assert_eq!(world.elevator().occupants.len(), 2);
}

#[test]
fn test_sixth_rider_waits_for_capacity() {
    // Six riders on floor 1; the cabin holds five
    let trips: Vec<(usize, usize)> = (0..6).map(|_| (1, 3)).collect();
    let mut world = SimWorld::with_trips(10, &trips).expect("valid trips");

    // Five board/pause cycles fill the cabin
    for _ in 0..(2 * MAX_OCCUPANCY) {
        world.tick();
    }
    assert_eq!(world.elevator().occupants.len(), MAX_OCCUPANCY);
    assert!(!world.riders()[5].in_elevator);

    // With the cabin full, the next tick moves instead of boarding
    assert!(!world.tick().completed);
    assert_eq!(world.elevator().current_floor, 2);

    // The sixth rider is still delivered eventually
    let mut guard = 0;
    loop {
        let result = world.tick();
        assert!(world.elevator().occupants.len() <= MAX_OCCUPANCY);
        if result.completed {
            break;
        }
        guard += 1;
        assert!(guard < 200, "simulation failed to finish");
    }
    assert!(world.riders().iter().all(|r| r.finished));
}

#[test]
fn test_invariants_hold_over_a_full_run() {
    let mut world = SimWorld::new_with_seed(10, 4, 99).expect("valid config");
    let mut previous_direction = world.elevator().direction;
    let mut previous_floor = world.elevator().current_floor;

    for _ in 0..500 {
        let result = world.tick();
        let elevator = world.elevator();

        assert!(elevator.occupants.len() <= MAX_OCCUPANCY);
        assert!((1..=10).contains(&elevator.current_floor));
        if elevator.direction != previous_direction {
            assert!(
                previous_floor == 1 || previous_floor == 10,
                "reversed away from an extreme (floor {previous_floor})"
            );
        }

        previous_direction = elevator.direction;
        previous_floor = elevator.current_floor;
        if result.completed {
            return;
        }
    }
    panic!("simulation did not complete within 500 ticks");
}

#[test]
fn test_finished_riders_stay_finished() {
    let mut world = SimWorld::with_trips(10, &[(2, 4), (6, 3)]).expect("valid trips");
    let mut delivered: Vec<Option<(usize, usize)>> = vec![None; 2];

    loop {
        let result = world.tick();
        for (index, rider) in world.riders().iter().enumerate() {
            if rider.finished {
                assert!(!rider.in_elevator);
                let snapshot = (rider.current_floor, rider.destination_floor);
                match delivered[index] {
                    None => delivered[index] = Some(snapshot),
                    Some(previous) => {
                        assert_eq!(previous, snapshot, "finished rider changed state")
                    }
                }
            }
        }
        if result.completed {
            break;
        }
        assert!(world.ticks() < 300, "simulation failed to finish");
    }

    for (index, snapshot) in delivered.iter().enumerate() {
        let (floor, destination) = snapshot.expect("every rider should be delivered");
        assert_eq!(floor, destination, "rider {index} ended on the wrong floor");
    }
}

#[test]
fn test_liveness_across_seeds() {
    for seed in [1, 7, 42, 1234, 98765] {
        let mut world =
            SimWorld::new_with_seed(10, MAX_RIDER_COUNT, seed).expect("valid config");
        let mut completed = false;
        for _ in 0..1000 {
            if world.tick().completed {
                completed = true;
                break;
            }
        }
        assert!(completed, "seed {seed} did not finish within 1000 ticks");
        assert!(world.riders().iter().all(|r| r.finished));
    }
}

#[test]
fn test_reinitialize_resets_world() {
    let mut world = SimWorld::new_with_seed(10, 3, 5).expect("valid config");
    for _ in 0..10 {
        world.tick();
    }

    world.reinitialize(2).expect("valid rider count");
    assert_eq!(world.riders().len(), 2);
    assert!(world.riders().iter().all(|r| !r.finished && !r.in_elevator));
    assert_eq!(world.ticks(), 0);

    let elevator = world.elevator();
    assert_eq!(elevator.current_floor, 1);
    assert_eq!(elevator.direction, Direction::Up);
    assert!(elevator.occupants.is_empty());
    assert_eq!(elevator.pause_frames_remaining, 0);
    assert!(elevator.pending_action.is_none());

    // Out-of-range counts fail without touching the fresh population
    assert!(world.reinitialize(MIN_RIDER_COUNT - 1).is_err());
    assert!(world.reinitialize(MAX_RIDER_COUNT + 1).is_err());
    assert_eq!(world.riders().len(), 2);
}

#[test]
fn test_draw_building_places_everyone() {
    let world = SimWorld::with_trips(3, &[(2, 3)]).expect("valid trips");
    let text = world.draw_building();
    let lines: Vec<&str> = text.lines().collect();

    // One row per floor plus a separator each, top floor first
    assert_eq!(lines.len(), 6);
    assert!(
        lines[2].contains("P1"),
        "waiting rider missing from floor 2:\n{text}"
    );
    assert!(
        lines[4].contains('[') && lines[4].contains(']'),
        "cabin missing from floor 1:\n{text}"
    );
    assert!(!lines[0].contains("P1"));
}

#[test]
fn test_draw_building_shows_cabin_occupants() {
    let mut world = SimWorld::with_trips(3, &[(1, 3)]).expect("valid trips");
    world.tick(); // rider boards on floor 1

    let text = world.draw_building();
    let lines: Vec<&str> = text.lines().collect();
    assert!(
        lines[4].contains('[') && lines[4].contains("P1"),
        "rider missing from cabin:\n{text}"
    );
}
