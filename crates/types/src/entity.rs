//! Entities: everything that can be placed on a board.
//!
//! All entities share a [`Graphics`] and a [`Position`]. What they can do is
//! decided by their [`EntityKind`]:
//!
//! - [`EntityKind::Drawable`]: plain scenery or an inert object
//! - [`EntityKind::Tile`]: terrain, classified by a [`TileType`] flag set
//! - [`EntityKind::Character`]: an actor with [`Health`]

use bitflags::bitflags;

use crate::graphics::Graphics;
use crate::position::Position;

bitflags! {
    /// Walkability and interaction classification of a tile.
    ///
    /// The empty set is a tile nobody can enter or use.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileType: u8 {
        const WALKABLE     = 1 << 0;
        const GATHERABLE   = 1 << 1;
        const INTERACTABLE = 1 << 2;
        const CUSTOM       = 1 << 3;
    }
}

/// Hit points of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage, saturating at zero. Returns the damage actually taken.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.current);
        self.current -= taken;
        taken
    }

    /// Heal up to `max`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max - self.current.min(self.max));
        self.current += restored;
        restored
    }
}

/// Capability tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Drawable,
    Tile(TileType),
    Character(Health),
}

/// A positioned, drawable unit. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub graphics: Graphics,
    pub position: Position,
    pub kind: EntityKind,
}

impl Entity {
    pub const fn new(graphics: Graphics, position: Position, kind: EntityKind) -> Self {
        Self {
            graphics,
            position,
            kind,
        }
    }

    pub const fn drawable(graphics: Graphics, position: Position) -> Self {
        Self::new(graphics, position, EntityKind::Drawable)
    }

    pub const fn tile(graphics: Graphics, position: Position, tile_type: TileType) -> Self {
        Self::new(graphics, position, EntityKind::Tile(tile_type))
    }

    pub const fn character(graphics: Graphics, position: Position, health: Health) -> Self {
        Self::new(graphics, position, EntityKind::Character(health))
    }

    /// The tile left behind in a vacated cell when no replacement is configured.
    pub const fn empty_tile(position: Position) -> Self {
        Self::tile(Graphics::EMPTY, position, TileType::empty())
    }

    /// Copy of this entity moved to `position`.
    pub fn at(&self, position: Position) -> Self {
        Self { position, ..*self }
    }

    pub fn is_tile(&self) -> bool {
        matches!(self.kind, EntityKind::Tile(_))
    }

    /// Terrain classification, `None` for non-tiles.
    pub fn tile_type(&self) -> Option<TileType> {
        match self.kind {
            EntityKind::Tile(tile_type) => Some(tile_type),
            _ => None,
        }
    }

    /// True only for tiles carrying the `WALKABLE` flag.
    pub fn is_walkable(&self) -> bool {
        self.tile_type()
            .is_some_and(|t| t.contains(TileType::WALKABLE))
    }

    pub fn health(&self) -> Option<&Health> {
        match &self.kind {
            EntityKind::Character(health) => Some(health),
            _ => None,
        }
    }

    pub fn health_mut(&mut self) -> Option<&mut Health> {
        match &mut self.kind {
            EntityKind::Character(health) => Some(health),
            _ => None,
        }
    }
}
