//! Shared rule for sliding pieces.
//!
//! A sliding piece moves any distance along one of a fixed set of directions
//! until the board edge or another piece stops it. Bishop, rook and queen
//! differ only in their direction sets, so each is a [`SlidingRule`] constant.
//!
//! Two different notions of "blocked" live here:
//! - [`SlidingRule::validate_move`] checks only the cells strictly between
//!   `from` and `to`. Whether `to` may be entered (capture vs. own piece) is
//!   left to the caller.
//! - [`SlidingRule::valid_moves`] stops a ray at the first occupied cell and
//!   does not yield it, whichever side the piece on it belongs to.

use std::iter::FusedIterator;

use crate::game_state::chess_board::BoardView;
use crate::game_state::chess_types::Cell;

/// Unit step along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

// y grows towards the bottom of the console board, so north is -y.
pub const NORTH_WEST: Direction = Direction::new(-1, -1);
pub const NORTH_EAST: Direction = Direction::new(1, -1);
pub const SOUTH_WEST: Direction = Direction::new(-1, 1);
pub const SOUTH_EAST: Direction = Direction::new(1, 1);
pub const WEST: Direction = Direction::new(-1, 0);
pub const EAST: Direction = Direction::new(1, 0);
pub const NORTH: Direction = Direction::new(0, -1);
pub const SOUTH: Direction = Direction::new(0, 1);

/// Move rule of a sliding piece: an ordered set of ray directions.
///
/// The order of `directions` is the order in which [`SlidingRule::valid_moves`]
/// walks the rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingRule {
    directions: &'static [Direction],
}

impl SlidingRule {
    pub const fn new(directions: &'static [Direction]) -> Self {
        Self { directions }
    }

    #[inline]
    pub fn directions(&self) -> &'static [Direction] {
        self.directions
    }

    /// The ray direction that leads from `from` to `to`, if this rule has one.
    ///
    /// A null move has step `(0, 0)`, which no rule contains, so it yields
    /// `None`.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        let dx = to.x() as i8 - from.x() as i8;
        let dy = to.y() as i8 - from.y() as i8;
        let step = Direction::new(dx.signum(), dy.signum());

        if !self.directions.contains(&step) {
            return None;
        }

        let distance = dx.abs().max(dy.abs());
        (dx == step.dx * distance && dy == step.dy * distance).then_some(step)
    }

    /// Whether the piece may slide from `from` to `to` on `board`.
    ///
    /// True iff `to` lies on one of this rule's rays from `from` and every cell
    /// strictly between them is empty. The occupancy of `to` is not examined.
    pub fn validate_move<B: BoardView + ?Sized>(&self, from: Cell, to: Cell, board: &B) -> bool {
        let Some(step) = self.direction_between(from, to) else {
            return false;
        };

        let mut cell = from;
        while let Some(next) = cell.offset(step.dx, step.dy) {
            if next == to {
                return true;
            }
            if board.is_occupied(next) {
                return false;
            }
            cell = next;
        }

        // `to` is on the board and on this ray, so the walk always reaches it.
        false
    }

    /// Lazily enumerate every empty cell reachable from `position`.
    ///
    /// Rays are walked in `directions` order, nearest cell first. Each ray ends
    /// at the board edge or just before the first occupied cell. Call again to
    /// restart; the iterator can also be cloned mid-way.
    pub fn valid_moves<'a, B: BoardView + ?Sized>(
        &self,
        position: Cell,
        board: &'a B,
    ) -> SlidingMoves<'a, B> {
        SlidingMoves {
            board,
            origin: position,
            directions: self.directions,
            last: None,
        }
    }
}

/// Iterator returned by [`SlidingRule::valid_moves`].
pub struct SlidingMoves<'a, B: ?Sized> {
    board: &'a B,
    origin: Cell,
    // Rays not yet exhausted; the first one is in progress.
    directions: &'static [Direction],
    // Last cell yielded on the current ray.
    last: Option<Cell>,
}

impl<B: ?Sized> Clone for SlidingMoves<'_, B> {
    fn clone(&self) -> Self {
        Self {
            board: self.board,
            origin: self.origin,
            directions: self.directions,
            last: self.last,
        }
    }
}

impl<B: BoardView + ?Sized> Iterator for SlidingMoves<'_, B> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            let directions: &'static [Direction] = self.directions;
            let (step, rest) = directions.split_first()?;
            let from = self.last.unwrap_or(self.origin);
            match from.offset(step.dx, step.dy) {
                Some(cell) if !self.board.is_occupied(cell) => {
                    self.last = Some(cell);
                    return Some(cell);
                }
                _ => {
                    self.directions = rest;
                    self.last = None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.directions.len() * 7))
    }
}

impl<B: BoardView + ?Sized> FusedIterator for SlidingMoves<'_, B> {}
