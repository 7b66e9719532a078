//! One- and two-axis integer intervals.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::direction::{Direction, Inclusion};
use crate::position::Position;
use crate::rect::Rectangle;

/// Inclusive interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Interval covering a single value.
    pub const fn point(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: i32, inclusion: Inclusion) -> bool {
        inclusion.between(value, self.min, self.max)
    }

    /// Number of integers in the interval (zero when inverted), capped at
    /// `i32::MAX`.
    pub fn len(&self) -> i32 {
        self.max.saturating_sub(self.min).saturating_add(1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slide both ends by `delta`, stopping at the edge of the `i32` range.
    pub fn slide(&mut self, delta: i32) {
        self.min = self.min.saturating_add(delta);
        self.max = self.max.saturating_add(delta);
    }

    /// Grow the interval so it covers `value`.
    pub fn expand_to(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

macro_rules! scalar_ops {
    ($($trait:ident $method:ident $assign_trait:ident $assign_method:ident $op:tt),* $(,)?) => {
        $(
            impl $trait<i32> for Bounds {
                type Output = Bounds;
                fn $method(self, rhs: i32) -> Bounds {
                    Bounds::new(self.min $op rhs, self.max $op rhs)
                }
            }

            impl $assign_trait<i32> for Bounds {
                fn $assign_method(&mut self, rhs: i32) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

scalar_ops!(
    Add add AddAssign add_assign +,
    Sub sub SubAssign sub_assign -,
    Mul mul MulAssign mul_assign *,
    Div div DivAssign div_assign /,
);

/// A pair of independent [`Bounds`], one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds2D {
    pub x: Bounds,
    pub y: Bounds,
}

impl Bounds2D {
    pub const fn new(x: Bounds, y: Bounds) -> Self {
        Self { x, y }
    }

    pub const fn from_scalars(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self::new(Bounds::new(x_min, x_max), Bounds::new(y_min, y_max))
    }

    /// Bounds covering a single position.
    pub const fn point(position: Position) -> Self {
        Self::new(Bounds::point(position.x), Bounds::point(position.y))
    }

    pub fn contains(&self, position: Position, inclusion: Inclusion) -> bool {
        self.x.contains(position.x, inclusion) && self.y.contains(position.y, inclusion)
    }

    /// Move both ends of the axis named by `direction` by `amount` cells.
    pub fn shift(&mut self, direction: Direction, amount: i32) {
        let (dx, dy) = direction.delta();
        self.x.slide(dx.saturating_mul(amount));
        self.y.slide(dy.saturating_mul(amount));
    }

    pub fn expand_to(&mut self, position: Position) {
        self.x.expand_to(position.x);
        self.y.expand_to(position.y);
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Position::new(self.x.min, self.y.min),
            self.x.len(),
            self.y.len(),
        )
    }
}

impl From<Rectangle> for Bounds2D {
    fn from(rect: Rectangle) -> Self {
        Self::from_scalars(rect.x(), rect.right(), rect.y(), rect.bottom())
    }
}

impl From<&Rectangle> for Bounds2D {
    fn from(rect: &Rectangle) -> Self {
        Self::from(*rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_ops_apply_to_both_ends() {
        let b = Bounds::new(2, 6);
        assert_eq!(b + 3, Bounds::new(5, 9));
        assert_eq!(b - 3, Bounds::new(-1, 3));
        assert_eq!(b * 2, Bounds::new(4, 12));
        assert_eq!(b / 2, Bounds::new(1, 3));

        let mut c = b;
        c -= 2;
        c *= 3;
        assert_eq!(c, Bounds::new(0, 12));
    }

    #[test]
    fn len_counts_inclusive_cells() {
        assert_eq!(Bounds::new(0, 9).len(), 10);
        assert_eq!(Bounds::point(4).len(), 1);
        assert!(Bounds::new(3, 2).is_empty());
        assert_eq!(Bounds::new(i32::MIN, i32::MAX).len(), i32::MAX);
        assert!(Bounds::new(i32::MAX, i32::MIN).is_empty());
    }

    #[test]
    fn shift_moves_only_the_named_axis() {
        let mut b = Bounds2D::from_scalars(0, 9, 0, 4);
        b.shift(Direction::Left, 3);
        assert_eq!(b, Bounds2D::from_scalars(-3, 6, 0, 4));
        b.shift(Direction::Down, 2);
        assert_eq!(b, Bounds2D::from_scalars(-3, 6, 2, 6));
    }

    #[test]
    fn shift_saturates_at_the_grid_edge() {
        let mut b = Bounds2D::from_scalars(0, 9, 0, 4);
        b.shift(Direction::Right, i32::MAX);
        assert_eq!(b.x, Bounds::new(i32::MAX, i32::MAX));
        b.shift(Direction::Up, i32::MAX);
        b.shift(Direction::Up, i32::MAX);
        assert_eq!(b.y, Bounds::new(i32::MIN, i32::MIN));
    }

    #[test]
    fn expand_never_shrinks() {
        let mut b = Bounds2D::point(Position::new(2, 2));
        b.expand_to(Position::new(-1, 5));
        b.expand_to(Position::new(0, 0));
        assert_eq!(b, Bounds2D::from_scalars(-1, 2, 0, 5));
    }

    #[test]
    fn rectangle_conversion_roundtrips() {
        let rect = Rectangle::new(Position::new(-2, 3), 5, 4);
        let b = Bounds2D::from(rect);
        assert_eq!(b, Bounds2D::from_scalars(-2, 2, 3, 6));
        assert_eq!(b.to_rectangle(), rect);
    }
}
