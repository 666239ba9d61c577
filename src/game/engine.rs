use std::time::Duration;

use serde::Serialize;

use super::{
    action::{Direction, DirectionalIntents},
    arbiter::InputArbiter,
    clock::MovementClock,
    config::SimConfig,
    state::{ChainStatus, Position, Segment, SegmentChain},
};
use crate::error::ConfigError;

/// The head entered a cell held by a trailing segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyCollision {
    /// Tick number (since initialize) of the colliding move
    pub tick: u64,
    /// Cell the head entered
    pub cell: Position,
    /// Index of the first trailing segment found on that cell
    pub segment_index: usize,
}

/// Result of one frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Number of discrete moves performed
    pub moves: u32,
    /// First collision raised during this update, if any
    pub collision: Option<BodyCollision>,
}

/// The simulation a frame driver owns and calls once per frame.
///
/// Holds the chain, the movement clock and the input arbiter; nothing is
/// shared or global.
#[derive(Debug, Clone)]
pub struct Simulation {
    chain: SegmentChain,
    clock: MovementClock,
    arbiter: InputArbiter,
    ticks: u64,
}

impl Simulation {
    /// Create a simulation initialized from the given configuration
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            chain: SegmentChain::new(config.start(), config.stride),
            clock: MovementClock::new(config.tick_interval())?,
            arbiter: InputArbiter::default(),
            ticks: 0,
        })
    }

    /// Replace all state with a single head segment at `start`.
    ///
    /// Zeroes the clock and resets the pending direction to the initial
    /// direction. The tick interval is kept.
    pub fn initialize(&mut self, start: Position, stride: i32) {
        self.chain = SegmentChain::new(start, stride);
        self.clock.reset();
        self.arbiter.reset(Direction::INITIAL);
        self.ticks = 0;

        log::debug!("initialized chain at ({}, {}) with stride {stride}", start.x, start.y);
    }

    /// Advance the clock by `elapsed` and perform every move that falls due.
    ///
    /// Intents are resolved once for the frame and again before each move
    /// against the head direction at that moment. At most one collision is
    /// reported, the first one found during this call.
    pub fn update(&mut self, elapsed: Duration, intents: DirectionalIntents) -> UpdateOutcome {
        self.arbiter.resolve(intents, self.chain.head().direction);
        self.clock.accumulate(elapsed);

        let mut outcome = UpdateOutcome::default();

        while self.clock.consume_tick() {
            let direction = self.arbiter.resolve(intents, self.chain.head().direction);
            let moved = self.chain.advance(direction);
            self.ticks += 1;
            outcome.moves += 1;

            let head = self.chain.head();
            log::trace!(
                "tick {}: head at ({}, {}) heading {:?}",
                self.ticks,
                head.at.x,
                head.at.y,
                head.direction
            );

            if let Some(segment_index) = moved.collided_with {
                if outcome.collision.is_none() {
                    log::debug!(
                        "body collision at tick {} on ({}, {}) with segment {segment_index}",
                        self.ticks,
                        head.at.x,
                        head.at.y
                    );
                    outcome.collision = Some(BodyCollision {
                        tick: self.ticks,
                        cell: head.at,
                        segment_index,
                    });
                }
            }
        }

        outcome
    }

    /// Lengthen the chain by `count` segments; call between moves
    pub fn grow(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.chain.grow(count);
        log::debug!("chain grew by {count} to {} segments", self.chain.len());
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.chain.segments()
    }

    pub fn head(&self) -> &Segment {
        self.chain.head()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false; the chain keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn status(&self) -> ChainStatus {
        self.chain.status()
    }

    /// Interpolation progress toward the next move, for presentation only
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    pub fn pending_direction(&self) -> Direction {
        self.arbiter.pending()
    }

    /// Moves performed since the last initialize
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(200);

    fn sim() -> Simulation {
        Simulation::new(&SimConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(Simulation::new(&SimConfig::new(-1, 200)).is_err());
        assert!(Simulation::new(&SimConfig::new(32, 0)).is_err());
    }

    #[test]
    fn test_start_at_world_edge() {
        let config = SimConfig::from_toml_str("start_x = 2147483647").unwrap();
        let mut sim = Simulation::new(&config).unwrap();
        assert_eq!(sim.head().to, Position::new(i32::MIN + 31, 0));

        let outcome = sim.update(TICK, DirectionalIntents::NONE);
        assert_eq!(outcome.moves, 1);
        assert_eq!(sim.head().at, Position::new(i32::MIN + 31, 0));

        sim.initialize(Position::new(i32::MAX - 10, i32::MIN), 32);
        sim.update(TICK, Direction::Up.into());
        assert_eq!(sim.head().at, Position::new(i32::MIN + 21, i32::MIN));
        assert_eq!(sim.head().to, Position::new(i32::MIN + 21, i32::MAX - 31));
    }

    #[test]
    fn test_initial_state() {
        let sim = sim();
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.status(), ChainStatus::Running);
        assert_eq!(sim.pending_direction(), Direction::Right);
        assert_eq!(sim.progress(), 0.0);
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn test_basic_movement() {
        let mut sim = sim();
        let outcome = sim.update(TICK, DirectionalIntents::NONE);

        assert_eq!(outcome.moves, 1);
        assert_eq!(outcome.collision, None);
        assert_eq!(sim.head().at, Position::new(32, 0));
        assert_eq!(sim.head().to, Position::new(64, 0));
        assert_eq!(sim.len(), 1);
    }

    #[test]
    fn test_partial_frame_does_not_move() {
        let mut sim = sim();
        let outcome = sim.update(Duration::from_millis(120), DirectionalIntents::NONE);

        assert_eq!(outcome.moves, 0);
        assert_eq!(sim.head().at, Position::new(0, 0));
        assert!((sim.progress() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_pending_updates_without_move() {
        let mut sim = sim();
        sim.update(Duration::from_millis(10), Direction::Down.into());
        assert_eq!(sim.pending_direction(), Direction::Down);
        assert_eq!(sim.head().direction, Direction::Right);

        // Sticky: the next frame without intents still turns
        sim.update(Duration::from_millis(190), DirectionalIntents::NONE);
        assert_eq!(sim.head().direction, Direction::Down);
    }

    #[test]
    fn test_reversal_rejected() {
        let mut sim = sim();
        sim.update(TICK, Direction::Left.into());
        assert_eq!(sim.head().direction, Direction::Right);
        assert_eq!(sim.head().at, Position::new(32, 0));
    }

    #[test]
    fn test_multiple_moves_in_one_frame() {
        let mut sim = sim();
        let outcome = sim.update(Duration::from_millis(500), DirectionalIntents::NONE);

        assert_eq!(outcome.moves, 2);
        assert_eq!(sim.head().at, Position::new(64, 0));
        assert!((sim.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_grow_between_moves() {
        let mut sim = sim();
        sim.grow(2);
        assert_eq!(sim.len(), 3);

        sim.update(TICK * 3, DirectionalIntents::NONE);
        let cells: Vec<Position> = sim.segments().map(|s| s.at).collect();
        assert_eq!(
            cells,
            vec![Position::new(96, 0), Position::new(64, 0), Position::new(32, 0)]
        );
    }

    #[test]
    fn test_collision_reported_once_per_update() {
        let mut sim = Simulation::new(&SimConfig::cells()).unwrap();
        let tick = sim.tick_interval();
        sim.grow(4);
        for _ in 0..4 {
            sim.update(tick, DirectionalIntents::NONE);
        }

        // Turn into a 2x2 loop; each head cell lags its direction by one tick
        sim.update(tick, Direction::Down.into());
        sim.update(tick, Direction::Left.into());
        sim.update(tick, Direction::Up.into());

        // Two moves in one frame, both landing on the tail's cell
        let outcome = sim.update(tick * 2, Direction::Right.into());
        assert_eq!(outcome.moves, 2);
        let collision = outcome.collision.expect("collision expected");
        assert_eq!(collision.tick, 8);
        assert_eq!(collision.cell, Position::new(4, 0));
        assert_eq!(sim.status(), ChainStatus::Collided);
    }

    #[test]
    fn test_initialize_replaces_state() {
        let mut sim = sim();
        sim.grow(3);
        sim.update(Duration::from_millis(650), Direction::Down.into());

        sim.initialize(Position::new(10, 20), 4);
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.progress(), 0.0);
        assert_eq!(sim.pending_direction(), Direction::Right);
        assert_eq!(sim.status(), ChainStatus::Running);
        assert_eq!(
            *sim.head(),
            Segment {
                at: Position::new(10, 20),
                to: Position::new(14, 20),
                direction: Direction::Right,
            }
        );
    }
}
