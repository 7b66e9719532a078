//! Board module - the authoritative entity index
//!
//! The board owns every entity in a position-keyed map (at most one entity
//! per cell), tracks the terrain bounds, and owns the display surface its
//! printer paints on. All mutation goes through the edit protocol in
//! [`edit`]; movement and spawn-point search are built on top of it.
//!
//! Terrain bounds only ever grow: deleting an entity does not shrink them.

use std::collections::BTreeMap;

use tracing::debug;

use crate::chunk::ChunkSpec;
use crate::config::TerrainConfig;
use crate::observer::MoveObserver;
use crate::printer::Printer;
use crate::surface::Surface;
use crate::types::{
    Bounds2D, Direction, Entity, Graphics, Position, Rectangle, Result, TerrainError,
};

pub mod edit;
pub mod movement;
pub mod spawn;

pub use edit::EditOperation;
pub use spawn::{SpawnQuery, SpawnSearch};

/// Entities on a grid, rendered through a [`Printer`] onto a surface `S`.
pub struct Board<S> {
    entities: BTreeMap<Position, Entity>,
    terrain_bounds: Option<Bounds2D>,
    replacement_tile: Option<Entity>,
    printer: Printer,
    surface: S,
    observers: Vec<Box<dyn MoveObserver>>,
}

impl<S: Surface> Board<S> {
    /// Create a board drawing into `drawable_area` of `surface`.
    ///
    /// Entities sharing a position keep the last one given. Nothing is drawn
    /// until [`Board::draw`] is called.
    pub fn new(
        drawable_area: Rectangle,
        entities: impl IntoIterator<Item = Entity>,
        surface: S,
    ) -> Self {
        Self::with_printer(
            Printer::new(drawable_area, TerrainConfig::default().out_of_bounds()),
            entities,
            surface,
        )
    }

    /// Create a board around a preconfigured printer.
    pub fn with_printer(
        printer: Printer,
        entities: impl IntoIterator<Item = Entity>,
        surface: S,
    ) -> Self {
        let mut board = Self {
            entities: BTreeMap::new(),
            terrain_bounds: None,
            replacement_tile: None,
            printer,
            surface,
            observers: Vec::new(),
        };
        for entity in entities {
            board.insert(entity);
        }
        debug!(entities = board.entities.len(), "board created");
        board
    }

    /// Create a board holding a generated tile chunk.
    pub fn from_chunk(drawable_area: Rectangle, chunk: &ChunkSpec, surface: S) -> Self {
        Self::new(drawable_area, chunk.generate(), surface)
    }

    /// Apply the out-of-bounds placeholder from `config`.
    pub fn configure(&mut self, config: &TerrainConfig) {
        self.printer.set_out_of_bounds(config.out_of_bounds());
    }

    /// Register an observer for movement notifications.
    pub fn subscribe(&mut self, observer: Box<dyn MoveObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in row-major order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Entity> {
        self.entity_at(Position::new(x, y))
    }

    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities.get(&position)
    }

    /// First entity in row-major order drawn with `graphics`.
    pub fn find_by_graphics(&self, graphics: &Graphics) -> Option<&Entity> {
        self.entities.values().find(|e| &e.graphics == graphics)
    }

    /// Running extent of every position ever inserted, `None` before the
    /// first insert.
    pub fn terrain_bounds(&self) -> Option<Bounds2D> {
        self.terrain_bounds
    }

    pub fn drawable_area(&self) -> Rectangle {
        self.printer.rendered_area()
    }

    pub fn printable_bounds(&self) -> Bounds2D {
        self.printer.printable_bounds()
    }

    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    pub fn printer_mut(&mut self) -> &mut Printer {
        &mut self.printer
    }

    pub fn replacement_tile(&self) -> Option<&Entity> {
        self.replacement_tile.as_ref()
    }

    /// Set the tile used to backfill vacated cells. Only tiles are accepted.
    pub fn set_replacement_tile(&mut self, tile: Option<Entity>) -> Result<()> {
        if tile.as_ref().is_some_and(|t| !t.is_tile()) {
            return Err(TerrainError::invalid_argument(
                "replacement_tile",
                "must be a tile",
            ));
        }
        self.replacement_tile = tile;
        Ok(())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Repaint the whole drawable area.
    pub fn draw(&mut self) -> bool {
        self.printer
            .draw_entities(&self.entities, &mut self.surface, None)
    }

    /// Repaint the part of the drawable area inside `bounds`.
    pub fn draw_part(&mut self, bounds: &Bounds2D) -> bool {
        self.printer
            .draw_entities(&self.entities, &mut self.surface, Some(bounds))
    }

    /// Blank the drawable area.
    pub fn clear_surface(&mut self) -> bool {
        self.printer.fill(Graphics::EMPTY, &mut self.surface)
    }

    /// Shift the viewport (the printable bounds), not any entity.
    pub fn move_view(&mut self, direction: Direction, count: i32, draw_after: bool) -> bool {
        self.printer.shift_view(direction, count);
        debug!(?direction, count, bounds = ?self.printer.printable_bounds(), "view moved");
        if draw_after {
            self.draw()
        } else {
            true
        }
    }

    fn insert(&mut self, entity: Entity) {
        match self.terrain_bounds.as_mut() {
            Some(bounds) => bounds.expand_to(entity.position),
            None => self.terrain_bounds = Some(Bounds2D::point(entity.position)),
        }
        self.entities.insert(entity.position, entity);
    }

    fn render_cell(&mut self, position: Position) -> bool {
        match self.entities.get(&position) {
            Some(entity) => self.printer.draw(entity, &mut self.surface),
            None => false,
        }
    }
}
