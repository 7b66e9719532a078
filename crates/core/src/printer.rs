//! Printer: clips and paints entities onto a display surface.
//!
//! The printer never owns entities. Each draw call gets a read view of the
//! cells to paint through [`CellLookup`], which the board's position map
//! implements directly. For arbitrary entity sets, [`PositionIndex`] builds a
//! transient index (last write wins on duplicate positions).
//!
//! Two rectangles control output:
//!
//! - the **rendered area**: the fixed physical display rectangle; nothing is
//!   written outside it
//! - the **printable bounds**: the logical viewport clip; cells inside the
//!   rendered area but outside these bounds show the out-of-bounds placeholder

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::surface::Surface;
use crate::types::{Bounds2D, Direction, Entity, Graphics, Inclusion, Position, Rectangle};

/// Read access to "which entity occupies this cell".
pub trait CellLookup {
    fn entity_at(&self, position: Position) -> Option<&Entity>;
}

impl CellLookup for BTreeMap<Position, Entity> {
    fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.get(&position)
    }
}

impl CellLookup for HashMap<Position, Entity> {
    fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.get(&position)
    }
}

/// Position-keyed view over a borrowed entity set.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex<'a> {
    cells: HashMap<Position, &'a Entity>,
}

impl<'a> PositionIndex<'a> {
    /// Index `entities` by position. Later entries replace earlier ones.
    pub fn new(entities: impl IntoIterator<Item = &'a Entity>) -> Self {
        let mut cells = HashMap::new();
        for entity in entities {
            cells.insert(entity.position, entity);
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellLookup for PositionIndex<'_> {
    fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.cells.get(&position).copied()
    }
}

/// Renders entities into a fixed display rectangle, masking cells outside
/// the current printable bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Printer {
    rendered_area: Rectangle,
    printable_bounds: Bounds2D,
    out_of_bounds: Graphics,
}

impl Printer {
    /// Create a printer whose printable bounds start equal to `rendered_area`.
    pub fn new(rendered_area: Rectangle, out_of_bounds: Graphics) -> Self {
        Self {
            rendered_area,
            printable_bounds: Bounds2D::from(rendered_area),
            out_of_bounds,
        }
    }

    pub fn rendered_area(&self) -> Rectangle {
        self.rendered_area
    }

    pub fn printable_bounds(&self) -> Bounds2D {
        self.printable_bounds
    }

    pub fn set_printable_bounds(&mut self, bounds: Bounds2D) {
        self.printable_bounds = bounds;
    }

    pub fn out_of_bounds(&self) -> Graphics {
        self.out_of_bounds
    }

    pub fn set_out_of_bounds(&mut self, graphics: Graphics) {
        self.out_of_bounds = graphics;
    }

    /// Shift the printable bounds `amount` cells in `direction`.
    pub fn shift_view(&mut self, direction: Direction, amount: i32) {
        self.printable_bounds.shift(direction, amount);
    }

    pub fn is_printable(&self, position: Position) -> bool {
        self.printable_bounds
            .contains(position, Inclusion::BothInclusive)
    }

    /// What would be written for `entity`, or `None` outside the rendered area.
    pub fn graphics_for(&self, entity: &Entity) -> Option<Graphics> {
        if !self.rendered_area.contains(entity.position) {
            return None;
        }
        if self.is_printable(entity.position) {
            Some(entity.graphics)
        } else {
            Some(self.out_of_bounds)
        }
    }

    /// Paint one entity and flush. Returns `false` when the entity lies
    /// outside the rendered area or the surface rejected the write.
    pub fn draw<S: Surface + ?Sized>(&self, entity: &Entity, surface: &mut S) -> bool {
        self.put(entity, surface) && flush(surface)
    }

    /// Repaint every cell of the rendered area (or of its overlap with
    /// `clip`) from `lookup`. Cells without an entity are left untouched.
    ///
    /// Returns `true` iff every write succeeded.
    pub fn draw_entities<L, S>(&self, lookup: &L, surface: &mut S, clip: Option<&Bounds2D>) -> bool
    where
        L: CellLookup + ?Sized,
        S: Surface + ?Sized,
    {
        let area = match clip {
            Some(bounds) => match self.rendered_area.intersection(&bounds.to_rectangle()) {
                Some(area) => area,
                None => return true,
            },
            None => self.rendered_area,
        };

        let mut ok = true;
        for position in area.positions() {
            if let Some(entity) = lookup.entity_at(position) {
                ok &= self.put(entity, surface);
            }
        }
        flush(surface) && ok
    }

    /// Repaint from an arbitrary entity set.
    pub fn draw_set<S: Surface + ?Sized>(&self, entities: &[Entity], surface: &mut S) -> bool {
        let index = PositionIndex::new(entities);
        self.draw_entities(&index, surface, None)
    }

    /// Paint `graphics` over the whole rendered area, ignoring the clip.
    pub fn fill<S: Surface + ?Sized>(&self, graphics: Graphics, surface: &mut S) -> bool {
        let mut ok = true;
        for position in self.rendered_area.positions() {
            ok &= write(surface, position, graphics);
        }
        flush(surface) && ok
    }

    fn put<S: Surface + ?Sized>(&self, entity: &Entity, surface: &mut S) -> bool {
        match self.graphics_for(entity) {
            Some(graphics) => write(surface, entity.position, graphics),
            None => false,
        }
    }
}

fn write<S: Surface + ?Sized>(surface: &mut S, position: Position, graphics: Graphics) -> bool {
    match surface.put(position, graphics) {
        Ok(()) => true,
        Err(err) => {
            warn!(?position, error = %err, "cell write failed");
            false
        }
    }
}

fn flush<S: Surface + ?Sized>(surface: &mut S) -> bool {
    match surface.flush() {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "surface flush failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceError;
    use crate::types::{Rgb, TileType};

    #[derive(Default)]
    struct Recorder {
        cells: HashMap<Position, Graphics>,
        flushes: usize,
        broken: Option<Position>,
    }

    impl Surface for Recorder {
        fn put(&mut self, position: Position, graphics: Graphics) -> Result<(), SurfaceError> {
            if self.broken == Some(position) {
                return Err(SurfaceError::OutOfSurface(position));
            }
            self.cells.insert(position, graphics);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), SurfaceError> {
            self.flushes += 1;
            Ok(())
        }
    }

    const GRASS: Graphics = Graphics::glyph('.', Rgb::new(0, 160, 0));
    const FOG: Graphics = Graphics::glyph('?', Rgb::GREY);

    fn printer() -> Printer {
        Printer::new(Rectangle::new(Position::ZERO, 4, 3), FOG)
    }

    fn grass(x: i32, y: i32) -> Entity {
        Entity::tile(GRASS, Position::new(x, y), TileType::WALKABLE)
    }

    #[test]
    fn draw_outside_rendered_area_is_a_noop() {
        let mut surface = Recorder::default();
        assert!(!printer().draw(&grass(4, 0), &mut surface));
        assert!(!printer().draw(&grass(0, -1), &mut surface));
        assert!(surface.cells.is_empty());
    }

    #[test]
    fn cells_outside_printable_bounds_get_the_placeholder() {
        let mut p = printer();
        p.shift_view(Direction::Right, 2);
        let mut surface = Recorder::default();

        assert!(p.draw(&grass(0, 0), &mut surface));
        assert!(p.draw(&grass(3, 0), &mut surface));
        assert_eq!(surface.cells[&Position::new(0, 0)], FOG);
        assert_eq!(surface.cells[&Position::new(3, 0)], GRASS);
    }

    #[test]
    fn index_keeps_the_last_entity_per_cell() {
        let first = grass(1, 1);
        let second = Entity::drawable(Graphics::glyph('@', Rgb::WHITE), Position::new(1, 1));
        let set = [first, second];
        let index = PositionIndex::new(&set);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entity_at(Position::new(1, 1)), Some(&second));
    }

    #[test]
    fn draw_entities_leaves_empty_cells_alone() {
        let mut surface = Recorder::default();
        surface.cells.insert(Position::new(2, 2), FOG);
        let set = [grass(0, 0), grass(9, 9)];

        assert!(printer().draw_set(&set, &mut surface));
        assert_eq!(surface.cells.len(), 2);
        assert_eq!(surface.cells[&Position::new(2, 2)], FOG);
        assert_eq!(surface.flushes, 1);
    }

    #[test]
    fn clip_restricts_the_repaint() {
        let mut surface = Recorder::default();
        let set: Vec<_> = Rectangle::new(Position::ZERO, 4, 3)
            .positions()
            .map(|p| grass(p.x, p.y))
            .collect();
        let index = PositionIndex::new(&set);
        let clip = Bounds2D::from_scalars(1, 2, 0, 0);

        assert!(printer().draw_entities(&index, &mut surface, Some(&clip)));
        let mut painted: Vec<_> = surface.cells.keys().copied().collect();
        painted.sort();
        assert_eq!(painted, vec![Position::new(1, 0), Position::new(2, 0)]);
    }

    #[test]
    fn surface_faults_degrade_to_false() {
        let mut surface = Recorder {
            broken: Some(Position::new(1, 0)),
            ..Recorder::default()
        };
        let set = [grass(0, 0), grass(1, 0), grass(2, 0)];
        assert!(!printer().draw_set(&set, &mut surface));
        // The remaining cells are still painted.
        assert_eq!(surface.cells.len(), 2);
    }
}
