//! End-to-end behaviour of the simulation driven frame by frame.

use std::time::Duration;

use rstest::rstest;
use snake_chain::game::{
    ChainStatus, Direction, DirectionalIntents, Position, SimConfig, Simulation,
};

const TICK: Duration = Duration::from_millis(200);

fn default_sim() -> Simulation {
    Simulation::new(&SimConfig::default()).expect("default config is valid")
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(37)]
fn straight_travel_covers_one_stride_per_tick(#[case] ticks: i32) {
    let mut sim = default_sim();
    for _ in 0..ticks {
        sim.update(TICK, DirectionalIntents::NONE);
    }

    assert_eq!(sim.head().at, Position::new(32 * ticks, 0));
    assert_eq!(sim.head().to, Position::new(32 * (ticks + 1), 0));
    assert_eq!(sim.len(), 1);
}

#[rstest]
#[case(500, 2, 100)]
#[case(200, 1, 0)]
#[case(199, 0, 199)]
#[case(1_000, 5, 0)]
fn long_frames_split_into_discrete_moves(
    #[case] elapsed_ms: u64,
    #[case] expected_moves: u32,
    #[case] remainder_ms: u64,
) {
    let mut sim = default_sim();
    let outcome = sim.update(Duration::from_millis(elapsed_ms), DirectionalIntents::NONE);

    assert_eq!(outcome.moves, expected_moves);
    assert_eq!(sim.head().at, Position::new(32 * expected_moves as i32, 0));

    let expected_progress = remainder_ms as f32 / 200.0;
    assert!((sim.progress() - expected_progress).abs() < 1e-6);
}

#[rstest]
#[case(Direction::Down, Direction::Down, Position::new(96, 32))]
#[case(Direction::Up, Direction::Up, Position::new(96, -32))]
#[case(Direction::Left, Direction::Right, Position::new(128, 0))]
#[case(Direction::Right, Direction::Right, Position::new(128, 0))]
fn third_tick_turn(
    #[case] pressed: Direction,
    #[case] expected: Direction,
    #[case] expected_to: Position,
) {
    let mut sim = default_sim();

    let first = sim.update(TICK, DirectionalIntents::NONE);
    assert_eq!(first.moves, 1);
    assert_eq!(sim.head().at, Position::new(32, 0));
    assert_eq!(sim.head().to, Position::new(64, 0));

    sim.update(TICK, DirectionalIntents::NONE);
    sim.update(TICK, pressed.into());

    assert_eq!(sim.head().direction, expected);
    assert_eq!(sim.head().at, Position::new(96, 0));
    assert_eq!(sim.head().to, expected_to);
}

#[test]
fn resolved_direction_never_reverses_the_head() {
    let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
    sim.grow(6);
    let pattern = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::Left,
    ];

    for (i, direction) in pattern.iter().cycle().take(200).enumerate() {
        let before = sim.head().direction;
        let elapsed = Duration::from_millis(40 * (i as u64 % 7));
        let outcome = sim.update(elapsed, (*direction).into());
        let after = sim.head().direction;

        if outcome.moves == 1 {
            assert!(after.dot(before) >= 0, "{before:?} reversed to {after:?}");
        }
    }
}

#[test]
fn move_never_changes_length() {
    let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
    sim.grow(9);

    for direction in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
        sim.update(Duration::from_millis(375), direction.into());
        assert_eq!(sim.len(), 10);
    }
}

#[test]
fn followers_trail_the_head_by_one_tick() {
    let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
    sim.grow(3);
    let tick = sim.tick_interval();

    let mut head_history = vec![sim.head().at];
    for direction in [Direction::Right, Direction::Down, Direction::Down, Direction::Left] {
        sim.update(tick, direction.into());
        head_history.push(sim.head().at);
    }

    let cells: Vec<Position> = sim.segments().map(|s| s.at).collect();
    let expected: Vec<Position> = head_history.iter().rev().take(4).copied().collect();
    assert_eq!(cells, expected);
}

#[test]
fn closed_loop_collides_when_head_reenters_occupied_cell() {
    // Head plus four trailing segments; the shortest grid loop is four moves,
    // so this is the smallest chain that can run into itself
    let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
    sim.grow(4);
    let tick = sim.tick_interval();

    for _ in 0..4 {
        let outcome = sim.update(tick, DirectionalIntents::NONE);
        assert_eq!(outcome.collision, None);
    }

    let steering = [Direction::Down, Direction::Left, Direction::Up];
    for direction in steering {
        let outcome = sim.update(tick, direction.into());
        assert_eq!(outcome.collision, None);
        assert_eq!(sim.status(), ChainStatus::Running);
    }

    let outcome = sim.update(tick, Direction::Right.into());
    let collision = outcome.collision.expect("head re-entered the tail's cell");
    assert_eq!(collision.tick, 8);
    assert_eq!(collision.cell, Position::new(4, 0));
    assert_eq!(collision.segment_index, 4);
    assert_eq!(sim.status(), ChainStatus::Collided);
    assert_eq!(sim.len(), 5);
}

#[test]
fn collision_does_not_stop_the_simulation() {
    let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
    sim.grow(4);
    let tick = sim.tick_interval();

    for _ in 0..4 {
        sim.update(tick, DirectionalIntents::NONE);
    }
    for direction in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
        sim.update(tick, direction.into());
    }
    assert_eq!(sim.status(), ChainStatus::Collided);

    let outcome = sim.update(tick, DirectionalIntents::NONE);
    assert_eq!(outcome.moves, 1);
    assert_eq!(sim.ticks(), 9);
    assert_eq!(sim.status(), ChainStatus::Collided);

    sim.initialize(Position::new(0, 0), 1);
    assert_eq!(sim.status(), ChainStatus::Running);
    assert_eq!(sim.len(), 1);
}
