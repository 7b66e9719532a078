//! Grid positions.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::direction::Direction;
use crate::rect::Rectangle;

/// A cell on the unbounded integer grid.
///
/// Ordering is row-major (by `y`, then `x`), which keeps iteration over
/// position-keyed maps in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `amount` cells away in `direction`, clamped to the grid.
    pub fn relative(self, direction: Direction, amount: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx.saturating_mul(amount), dy.saturating_mul(amount))
    }

    /// Like [`Position::relative`], but `None` when the step leaves the
    /// `i32` grid.
    pub fn checked_relative(self, direction: Direction, amount: i32) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add(dx.checked_mul(amount)?)?;
        let y = self.y.checked_add(dy.checked_mul(amount)?)?;
        Some(Self::new(x, y))
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Inclusive containment in `rect`.
    pub fn inside_rectangle(self, rect: &Rectangle) -> bool {
        (rect.x()..=rect.right()).contains(&self.x) && (rect.y()..=rect.bottom()).contains(&self.y)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
