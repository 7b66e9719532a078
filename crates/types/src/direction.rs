//! Movement directions, rectangle side sets, and interval inclusion modes.

use std::str::FromStr;

use bitflags::bitflags;

use crate::error::TerrainError;

/// One of the four cardinal movement directions.
///
/// The grid uses console orientation: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Left`/`Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = TerrainError;

    /// Parse a direction (case-insensitive, single-letter aliases accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(TerrainError::invalid_enum("direction", s)),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = TerrainError;

    /// Decode the single-bit flag encoding (`1` up, `2` down, `4` left, `8` right).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Sides::from_bits(value) {
            Some(Sides::UP) => Ok(Direction::Up),
            Some(Sides::DOWN) => Ok(Direction::Down),
            Some(Sides::LEFT) => Ok(Direction::Left),
            Some(Sides::RIGHT) => Ok(Direction::Right),
            _ => Err(TerrainError::invalid_enum("direction", value)),
        }
    }
}

bitflags! {
    /// A set of rectangle sides, produced by [`crate::Rectangle::inside`].
    ///
    /// The empty set means "no side".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sides: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for Sides {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Sides::UP,
            Direction::Down => Sides::DOWN,
            Direction::Left => Sides::LEFT,
            Direction::Right => Sides::RIGHT,
        }
    }
}

/// Whether each end of an interval counts as inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inclusion {
    #[default]
    BothInclusive,
    OnlyLeftInclusive,
    OnlyRightInclusive,
    BothExclusive,
}

impl Inclusion {
    pub const ALL: [Inclusion; 4] = [
        Inclusion::BothInclusive,
        Inclusion::OnlyLeftInclusive,
        Inclusion::OnlyRightInclusive,
        Inclusion::BothExclusive,
    ];

    /// Test `min ≤/< value ≤/< max` with the ends chosen by this mode.
    #[inline]
    pub fn between(self, value: i32, min: i32, max: i32) -> bool {
        match self {
            Inclusion::BothInclusive => min <= value && value <= max,
            Inclusion::OnlyLeftInclusive => min <= value && value < max,
            Inclusion::OnlyRightInclusive => min < value && value <= max,
            Inclusion::BothExclusive => min < value && value < max,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Inclusion::BothInclusive => "both-inclusive",
            Inclusion::OnlyLeftInclusive => "left-inclusive",
            Inclusion::OnlyRightInclusive => "right-inclusive",
            Inclusion::BothExclusive => "both-exclusive",
        }
    }
}

impl FromStr for Inclusion {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both-inclusive" | "inclusive" => Ok(Inclusion::BothInclusive),
            "left-inclusive" => Ok(Inclusion::OnlyLeftInclusive),
            "right-inclusive" => Ok(Inclusion::OnlyRightInclusive),
            "both-exclusive" | "exclusive" => Ok(Inclusion::BothExclusive),
            _ => Err(TerrainError::invalid_enum("inclusion", s)),
        }
    }
}

impl TryFrom<u8> for Inclusion {
    type Error = TerrainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Inclusion::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| TerrainError::invalid_enum("inclusion", value))
    }
}
