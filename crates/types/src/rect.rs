//! Rectangles and side-containment queries.

use crate::bounds::Bounds;
use crate::direction::{Direction, Inclusion, Sides};
use crate::error::{Result, TerrainError};
use crate::position::Position;

/// Axis-aligned rectangle anchored at its top-left cell.
///
/// `width` and `height` are expected to be positive. A rectangle with a
/// non-positive size has no interior and containment queries on it are
/// meaningless; use [`Rectangle::try_new`] where the size comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub start: Position,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(start: Position, width: i32, height: i32) -> Self {
        Self {
            start,
            width,
            height,
        }
    }

    /// Checked constructor for sizes coming from outside the crate.
    pub fn try_new(start: Position, width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(TerrainError::invalid_argument("width", "must be positive"));
        }
        if height <= 0 {
            return Err(TerrainError::invalid_argument("height", "must be positive"));
        }
        Ok(Self::new(start, width, height))
    }

    pub fn x(&self) -> i32 {
        self.start.x
    }

    pub fn y(&self) -> i32 {
        self.start.y
    }

    /// Last column inside the rectangle.
    pub fn right(&self) -> i32 {
        self.start.x + self.width - 1
    }

    /// Last row inside the rectangle.
    pub fn bottom(&self) -> i32 {
        self.start.y + self.height - 1
    }

    pub fn top_left(&self) -> Position {
        self.start
    }

    pub fn top_right(&self) -> Position {
        Position::new(self.right(), self.y())
    }

    pub fn bottom_left(&self) -> Position {
        Position::new(self.x(), self.bottom())
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.right(), self.bottom())
    }

    pub fn x_span(&self) -> Bounds {
        Bounds::new(self.x(), self.right())
    }

    pub fn y_span(&self) -> Bounds {
        Bounds::new(self.y(), self.bottom())
    }

    pub fn contains(&self, position: Position) -> bool {
        position.inside_rectangle(self)
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell of the rectangle in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (x0, x1) = (self.x(), self.right());
        (self.y()..=self.bottom()).flat_map(move |y| (x0..=x1).map(move |x| Position::new(x, y)))
    }

    /// Overlapping part of two rectangles, if any.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left > right || top > bottom {
            return None;
        }
        Some(Rectangle::new(
            Position::new(left, top),
            right - left + 1,
            bottom - top + 1,
        ))
    }

    /// Whether the whole edge of `self` named by `side` lies inside `other`.
    ///
    /// The edge coordinate must fall within `other`'s span on the same axis,
    /// and both ends of `self`'s perpendicular span must fall within `other`'s
    /// perpendicular span, all under `inclusion`.
    pub fn side_in(&self, other: &Rectangle, side: Direction, inclusion: Inclusion) -> bool {
        let (edge, along, across) = match side {
            Direction::Up => (self.y(), other.y_span(), other.x_span()),
            Direction::Down => (self.bottom(), other.y_span(), other.x_span()),
            Direction::Left => (self.x(), other.x_span(), other.y_span()),
            Direction::Right => (self.right(), other.x_span(), other.y_span()),
        };
        let own_across = if side.is_horizontal() {
            self.y_span()
        } else {
            self.x_span()
        };

        along.contains(edge, inclusion)
            && across.contains(own_across.min, inclusion)
            && across.contains(own_across.max, inclusion)
    }

    /// Sides of `self` that lie inside `other`.
    ///
    /// With `full_side_check`, `LEFT`/`RIGHT` are only reported when both
    /// `UP` and `DOWN` are inside too, and `UP`/`DOWN` only when both `LEFT`
    /// and `RIGHT` are.
    pub fn inside(&self, other: &Rectangle, full_side_check: bool, inclusion: Inclusion) -> Sides {
        let up = self.side_in(other, Direction::Up, inclusion);
        let down = self.side_in(other, Direction::Down, inclusion);
        let left = self.side_in(other, Direction::Left, inclusion);
        let right = self.side_in(other, Direction::Right, inclusion);

        let (vertical_ok, horizontal_ok) = if full_side_check {
            (left && right, up && down)
        } else {
            (true, true)
        };

        let mut sides = Sides::empty();
        sides.set(Sides::UP, up && vertical_ok);
        sides.set(Sides::DOWN, down && vertical_ok);
        sides.set(Sides::LEFT, left && horizontal_ok);
        sides.set(Sides::RIGHT, right && horizontal_ok);
        sides
    }

    pub fn fully_inside(&self, other: &Rectangle, inclusion: Inclusion) -> bool {
        self.inside(other, true, inclusion) == Sides::all()
    }
}
