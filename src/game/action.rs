use serde::{Deserialize, Serialize};

/// Direction the chain head can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction a freshly initialized chain travels in (+X)
    pub const INITIAL: Direction = Direction::Right;

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.dot(other) < 0
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Dot product of the two unit vectors: 1 straight, 0 perpendicular, -1 reversed
    pub fn dot(&self, other: Direction) -> i32 {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax * bx + ay * by
    }
}

/// Raw directional intents sampled once per frame.
///
/// When more than one intent is asserted the first match wins, in the order
/// up, down, left, right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalIntents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalIntents {
    /// No intent asserted
    pub const NONE: DirectionalIntents = DirectionalIntents {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Intents with exactly one direction asserted
    pub fn only(direction: Direction) -> Self {
        let mut intents = Self::NONE;
        intents.assert(direction);
        intents
    }

    /// Mark a direction as asserted for this frame
    pub fn assert(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// The highest-priority asserted direction, if any
    pub fn first_asserted(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_asserted().is_none()
    }
}

impl From<Direction> for DirectionalIntents {
    fn from(direction: Direction) -> Self {
        DirectionalIntents::only(direction)
    }
}

impl From<Option<Direction>> for DirectionalIntents {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(DirectionalIntents::only).unwrap_or_default()
    }
}
