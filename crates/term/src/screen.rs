//! TerminalSurface: a board surface backed by a framebuffer and a renderer.
//!
//! Board cells are placed on screen with a fixed origin and a per-cell width
//! (2x1 by default, which roughly compensates for terminal glyph aspect
//! ratio). Writes land in the framebuffer; `flush` presents it.

use std::io::{self, Write};

use crate::core::{Surface, SurfaceError};
use crate::fb::{Cell, FrameBuffer};
use crate::renderer::TerminalRenderer;
use crate::types::{Graphics, Position};

/// Screen placement of board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Screen cell of board position (0, 0).
    pub origin: (u16, u16),
    /// Terminal columns per board cell.
    pub cell_w: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            cell_w: 2,
        }
    }
}

impl Layout {
    /// Leftmost screen cell for `position`.
    pub fn screen_coords(&self, position: Position) -> Option<(u16, u16)> {
        let x = u16::try_from(position.x).ok()?;
        let y = u16::try_from(position.y).ok()?;
        let sx = x.checked_mul(self.cell_w)?.checked_add(self.origin.0)?;
        let sy = y.checked_add(self.origin.1)?;
        Some((sx, sy))
    }
}

pub struct TerminalSurface<W: Write = io::Stdout> {
    frame: FrameBuffer,
    layout: Layout,
    renderer: TerminalRenderer<W>,
}

impl TerminalSurface<io::Stdout> {
    pub fn new(width: u16, height: u16, layout: Layout) -> Self {
        Self::with_renderer(width, height, layout, TerminalRenderer::new())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn with_renderer(
        width: u16,
        height: u16,
        layout: Layout,
        renderer: TerminalRenderer<W>,
    ) -> Self {
        Self {
            frame: FrameBuffer::new(width, height),
            layout,
            renderer,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Direct access for text outside the board (status lines and the like).
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    /// Resize the backing frame and force a full redraw on the next flush.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame.resize(width, height);
        self.renderer.invalidate();
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn put(&mut self, position: Position, graphics: Graphics) -> Result<(), SurfaceError> {
        let (sx, sy) = self
            .layout
            .screen_coords(position)
            .filter(|&(sx, sy)| {
                sx.saturating_add(self.layout.cell_w) <= self.frame.width()
                    && sy < self.frame.height()
            })
            .ok_or(SurfaceError::OutOfSurface(position))?;

        let cell = Cell::from(graphics);
        self.frame.set(sx, sy, cell);
        // Padding columns share the background colour.
        for dx in 1..self.layout.cell_w {
            self.frame.set(sx + dx, sy, Cell { ch: ' ', ..cell });
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.renderer
            .present(&self.frame)
            .map_err(|err| SurfaceError::Io(io::Error::other(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    fn surface(width: u16, height: u16, layout: Layout) -> TerminalSurface<Vec<u8>> {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        TerminalSurface::with_renderer(width, height, layout, renderer)
    }

    #[test]
    fn cells_are_widened_and_offset() {
        let layout = Layout {
            origin: (1, 1),
            cell_w: 2,
        };
        let mut s = surface(8, 3, layout);
        s.put(Position::new(1, 0), Graphics::glyph('@', Rgb::WHITE)).unwrap();
        assert_eq!(s.frame().row_text(1), "   @    ");
    }

    #[test]
    fn cells_past_the_frame_are_rejected() {
        let mut s = surface(4, 2, Layout::default());
        let g = Graphics::glyph('#', Rgb::WHITE);
        assert!(s.put(Position::new(1, 1), g).is_ok());
        assert!(s.put(Position::new(2, 0), g).is_err());
        assert!(s.put(Position::new(0, 2), g).is_err());
        assert!(s.put(Position::new(-1, 0), g).is_err());
    }

    #[test]
    fn flush_writes_to_the_terminal() {
        let mut s = surface(4, 1, Layout::default());
        s.put(Position::ZERO, Graphics::glyph('x', Rgb::WHITE)).unwrap();
        s.flush().unwrap();
        let out = String::from_utf8(s.renderer_mut().writer().clone()).unwrap();
        assert!(out.contains('x'));
    }
}
