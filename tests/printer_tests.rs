//! Printer tests - clipping, placeholders and surface faults

use std::collections::HashMap;

use tui_terrain::core::{CellLookup, PositionIndex, Printer, Surface, SurfaceError};
use tui_terrain::term::FrameBuffer;
use tui_terrain::types::{Bounds2D, Direction, Entity, Graphics, Position, Rectangle, Rgb, TileType};

const SAND: Graphics = Graphics::glyph(':', Rgb::new(200, 180, 90));
const FOG: Graphics = Graphics::glyph('~', Rgb::GREY);

fn sand(x: i32, y: i32) -> Entity {
    Entity::tile(SAND, Position::new(x, y), TileType::WALKABLE)
}

fn beach(w: i32, h: i32) -> Vec<Entity> {
    Rectangle::new(Position::ZERO, w, h)
        .positions()
        .map(|p| sand(p.x, p.y))
        .collect()
}

#[test]
fn test_printable_bounds_start_as_the_rendered_area() {
    let area = Rectangle::new(Position::new(2, 1), 4, 3);
    let printer = Printer::new(area, FOG);
    assert_eq!(printer.printable_bounds(), Bounds2D::from_scalars(2, 5, 1, 3));
    assert!(printer.is_printable(Position::new(5, 3)));
    assert!(!printer.is_printable(Position::new(6, 3)));
}

#[test]
fn test_draw_set_paints_a_framebuffer() {
    let printer = Printer::new(Rectangle::new(Position::ZERO, 3, 2), FOG);
    let mut fb = FrameBuffer::new(3, 2);
    assert!(printer.draw_set(&beach(3, 2), &mut fb));
    assert_eq!(fb.row_text(0), ":::");
    assert_eq!(fb.row_text(1), ":::");
}

#[test]
fn test_scrolled_view_uses_the_placeholder() {
    let mut printer = Printer::new(Rectangle::new(Position::ZERO, 4, 1), FOG);
    printer.shift_view(Direction::Right, 1);
    let mut fb = FrameBuffer::new(4, 1);
    assert!(printer.draw_set(&beach(4, 1), &mut fb));
    assert_eq!(fb.row_text(0), "~:::");
}

#[test]
fn test_entities_outside_the_rendered_area_are_ignored() {
    let printer = Printer::new(Rectangle::new(Position::ZERO, 2, 2), FOG);
    let mut fb = FrameBuffer::new(4, 4);
    assert!(!printer.draw(&sand(3, 3), &mut fb));
    assert!(printer.draw_set(&beach(4, 4), &mut fb));
    assert_eq!(fb.row_text(0), "::  ");
    assert_eq!(fb.row_text(3), "    ");
}

#[test]
fn test_duplicate_positions_keep_the_last_entity() {
    let rock_glyph = Graphics::glyph('^', Rgb::GREY);
    let rock = Entity::tile(rock_glyph, Position::new(1, 0), TileType::empty());
    let mut set = beach(3, 1);
    set.push(rock);
    let index = PositionIndex::new(&set);
    assert_eq!(index.len(), 3);
    assert_eq!(index.entity_at(Position::new(1, 0)), Some(&rock));

    let printer = Printer::new(Rectangle::new(Position::ZERO, 3, 1), FOG);
    let mut fb = FrameBuffer::new(3, 1);
    assert!(printer.draw_set(&set, &mut fb));
    assert_eq!(fb.row_text(0), ":^:");
}

#[test]
fn test_hash_map_is_a_cell_lookup() {
    let cells: HashMap<Position, Entity> =
        beach(2, 2).into_iter().map(|e| (e.position, e)).collect();
    let printer = Printer::new(Rectangle::new(Position::ZERO, 2, 2), FOG);
    let mut fb = FrameBuffer::new(2, 2);
    assert!(printer.draw_entities(&cells, &mut fb, None));
    assert_eq!(fb.row_text(1), "::");
}

/// Surface smaller than the printer's rendered area.
struct Narrow(FrameBuffer);

impl Surface for Narrow {
    fn put(&mut self, position: Position, graphics: Graphics) -> Result<(), SurfaceError> {
        self.0.put(position, graphics)
    }
}

#[test]
fn test_surface_faults_are_reported_as_false() {
    let printer = Printer::new(Rectangle::new(Position::ZERO, 3, 1), FOG);
    let mut narrow = Narrow(FrameBuffer::new(2, 1));
    assert!(!printer.draw_set(&beach(3, 1), &mut narrow));
    assert_eq!(narrow.0.row_text(0), "::");
}

#[test]
fn test_fill_ignores_the_view() {
    let mut printer = Printer::new(Rectangle::new(Position::ZERO, 3, 1), FOG);
    printer.shift_view(Direction::Left, 10);
    let mut fb = FrameBuffer::new(3, 1);
    assert!(printer.fill(SAND, &mut fb));
    assert_eq!(fb.row_text(0), ":::");
}
