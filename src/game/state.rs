use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position in world units.
///
/// Coordinates wrap at the `i32` bounds, so stepping off one edge of the
/// world re-enters from the opposite edge instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Move position `stride` units in a direction
    pub fn stepped(&self, direction: Direction, stride: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx.wrapping_mul(stride), dy.wrapping_mul(stride))
    }
}

/// One link of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Cell the segment currently occupies
    pub at: Position,
    /// Cell the segment is moving toward this tick
    pub to: Position,
    pub direction: Direction,
}

impl Segment {
    /// A head segment at `at`, aimed one stride ahead
    pub fn head(at: Position, direction: Direction, stride: i32) -> Self {
        Self {
            at,
            to: at.stepped(direction, stride),
            direction,
        }
    }
}

/// Observable state of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainStatus {
    Running,
    Collided,
}

/// Result of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Index of the first trailing segment sharing the head's new cell
    pub collided_with: Option<usize>,
}

/// The ordered chain of segments, head at index 0.
///
/// A move prepends the advanced head and drops the tail, so every trailing
/// segment inherits the record its predecessor held one tick earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentChain {
    segments: VecDeque<Segment>,
    stride: i32,
    status: ChainStatus,
}

impl SegmentChain {
    /// A chain of one head segment travelling in the initial direction
    pub fn new(start: Position, stride: i32) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(Segment::head(start, Direction::INITIAL, stride));

        Self {
            segments,
            stride,
            status: ChainStatus::Running,
        }
    }

    /// Get the head segment
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// Get the tail segment (last segment)
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn status(&self) -> ChainStatus {
        self.status
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a chain keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if any trailing segment (excluding head) occupies `pos`
    pub fn collides_with_body(&self, pos: Position) -> Option<usize> {
        self.segments
            .iter()
            .skip(1)
            .position(|segment| segment.at == pos)
            .map(|offset| offset + 1)
    }

    /// Advance the chain one stride, adopting `direction` for the head.
    ///
    /// The head's new cell is its previous target; the new target is one
    /// stride along `direction`. The move always completes, and a collision
    /// with a trailing segment is reported after the fact.
    pub fn advance(&mut self, direction: Direction) -> MoveOutcome {
        let previous = *self.head();
        let new_head = Segment::head(previous.to, direction, self.stride);

        self.segments.push_front(new_head);
        self.segments.pop_back();

        let collided_with = self.collides_with_body(new_head.at);
        if collided_with.is_some() {
            self.status = ChainStatus::Collided;
        }

        MoveOutcome { collided_with }
    }

    /// Append `count` copies of the tail.
    ///
    /// The copies sit on the tail's cell and unfold one per move, since the
    /// shift drops a duplicate before the original tail.
    pub fn grow(&mut self, count: usize) {
        let tail = *self.tail();
        self.segments.extend(std::iter::repeat(tail).take(count));
    }
}
