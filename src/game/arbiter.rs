use super::action::{Direction, DirectionalIntents};

/// Resolves raw intents into the direction the next move will adopt.
///
/// The pending direction is sticky: a frame without intents keeps it. A
/// candidate strictly opposite the current head direction is dropped
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputArbiter {
    pending: Direction,
}

impl InputArbiter {
    pub fn new(initial: Direction) -> Self {
        Self { pending: initial }
    }

    /// The direction the next move will adopt
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Resolve this frame's intents against the head's current direction
    pub fn resolve(&mut self, intents: DirectionalIntents, current: Direction) -> Direction {
        let candidate = intents.first_asserted().unwrap_or(self.pending);

        if candidate.dot(current) >= 0 {
            self.pending = candidate;
        } else {
            log::trace!("rejected reversal {candidate:?} while heading {current:?}");
        }

        self.pending
    }

    pub fn reset(&mut self, initial: Direction) {
        self.pending = initial;
    }
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new(Direction::INITIAL)
    }
}
