//! Terrain core - entity board, printer, and movement rules
//!
//! This crate owns the authoritative entity map and every rule that mutates
//! it. It performs **no terminal I/O**: drawing goes through the [`Surface`]
//! trait, so the same board renders to a terminal, a framebuffer, or a test
//! canvas.
//!
//! # Module Structure
//!
//! - [`board`]: the entity map, edit protocol, movement, viewport and spawn search
//! - [`printer`]: clipping and placeholder rules between the map and a surface
//! - [`surface`]: the display seam and its error type
//! - [`observer`]: movement notifications and transition records
//! - [`chunk`]: generation of rectangular tile chunks
//! - [`config`]: `TERRAIN_*` environment configuration
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_terrain_core::{Board, ChunkSpec, EditOperation, Surface, SurfaceError};
//! use tui_terrain_core::types::{Direction, Entity, Graphics, Position, Rectangle, Rgb, TileType};
//!
//! struct Null;
//! impl Surface for Null {
//!     fn put(&mut self, _: Position, _: Graphics) -> Result<(), SurfaceError> {
//!         Ok(())
//!     }
//! }
//!
//! let area = Rectangle::new(Position::ZERO, 5, 5);
//! let floor = ChunkSpec::new(area, Graphics::glyph('.', Rgb::GREY), TileType::WALKABLE);
//! let mut board = Board::from_chunk(area, &floor, Null);
//!
//! let mut hero = Entity::drawable(Graphics::glyph('@', Rgb::WHITE), Position::new(2, 2));
//! assert!(board.edit_entities(&hero, EditOperation::UpdateOrCreate));
//! let moved = board.move_entity(&mut hero, Direction::Right, 1).unwrap();
//! assert_eq!(moved.to, Position::new(3, 2));
//!
//! let spawn = board.random_spawn_point(&Default::default(), &mut StdRng::seed_from_u64(1));
//! assert!(spawn.is_some());
//! ```

pub mod board;
pub mod chunk;
pub mod config;
pub mod observer;
pub mod printer;
pub mod surface;

pub use tui_terrain_types as types;

pub use board::{Board, EditOperation, SpawnQuery, SpawnSearch};
pub use chunk::ChunkSpec;
pub use config::TerrainConfig;
pub use observer::{MoveLog, MoveObserver, MoveTransition};
pub use printer::{CellLookup, PositionIndex, Printer};
pub use surface::{Surface, SurfaceError};
