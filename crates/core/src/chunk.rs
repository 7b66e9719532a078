//! Rectangular tile chunks.

use crate::types::{Entity, Graphics, Position, Rectangle, TileType};

/// Recipe for a rectangle filled with one tile, optionally framed by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSpec {
    pub area: Rectangle,
    pub fill: Graphics,
    pub fill_type: TileType,
    pub border: Option<(Graphics, TileType)>,
}

impl ChunkSpec {
    pub fn new(area: Rectangle, fill: Graphics, fill_type: TileType) -> Self {
        Self {
            area,
            fill,
            fill_type,
            border: None,
        }
    }

    pub fn with_border(mut self, graphics: Graphics, tile_type: TileType) -> Self {
        self.border = Some((graphics, tile_type));
        self
    }

    fn on_edge(&self, position: Position) -> bool {
        position.x == self.area.x()
            || position.x == self.area.right()
            || position.y == self.area.y()
            || position.y == self.area.bottom()
    }

    /// One tile per cell of `area`, in row-major order.
    pub fn generate(&self) -> Vec<Entity> {
        self.area
            .positions()
            .map(|position| match self.border {
                Some((graphics, tile_type)) if self.on_edge(position) => {
                    Entity::tile(graphics, position, tile_type)
                }
                _ => Entity::tile(self.fill, position, self.fill_type),
            })
            .collect()
    }
}
