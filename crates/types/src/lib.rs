//! Core types module - geometry and entity value types
//!
//! This crate defines the plain data the terrain engine is built from. Every
//! type here is a small `Copy` value with no I/O, so the same types can be
//! used by the board, the renderer, and any persistence layer.
//!
//! # Coordinates
//!
//! The grid is unbounded in every direction and uses console orientation:
//!
//! - **x** grows to the right
//! - **y** grows downward (`Direction::Up` decreases `y`)
//! - [`Position`] ordering is row-major, so position-keyed maps iterate in
//!   screen order
//!
//! # Inclusion modes
//!
//! Interval queries take an [`Inclusion`] deciding whether the ends count:
//!
//! | Mode | Test |
//! |------|------|
//! | `BothInclusive` | `min <= v <= max` |
//! | `OnlyLeftInclusive` | `min <= v < max` |
//! | `OnlyRightInclusive` | `min < v <= max` |
//! | `BothExclusive` | `min < v < max` |
//!
//! # Examples
//!
//! ```
//! use tui_terrain_types::{Direction, Inclusion, Position, Rectangle, Sides};
//!
//! let bar = Rectangle::new(Position::ZERO, 4, 1);
//! let screen = Rectangle::new(Position::ZERO, 10, 10);
//!
//! assert!(bar.side_in(&screen, Direction::Up, Inclusion::BothInclusive));
//! assert!(!bar.side_in(&screen, Direction::Left, Inclusion::BothExclusive));
//! assert_eq!(bar.inside(&screen, true, Inclusion::BothInclusive), Sides::all());
//!
//! let p = Position::new(2, 2).relative(Direction::Right, 1);
//! assert_eq!(p, Position::new(3, 2));
//! ```

pub mod bounds;
pub mod direction;
pub mod entity;
pub mod error;
pub mod graphics;
pub mod position;
pub mod rect;

pub use bounds::{Bounds, Bounds2D};
pub use direction::{Direction, Inclusion, Sides};
pub use entity::{Entity, EntityKind, Health, TileType};
pub use error::{Result, TerrainError};
pub use graphics::{Graphics, Rgb};
pub use position::Position;
pub use rect::Rectangle;
