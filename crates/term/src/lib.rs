//! Terminal rendering for terrain boards.
//!
//! Boards draw onto any [`Surface`](crate::core::Surface). This crate provides
//! two: a plain [`FrameBuffer`] (one board cell per character, handy for
//! tests) and a [`TerminalSurface`] that lays board cells out on screen and
//! presents changes to a real terminal through [`TerminalRenderer`].
//!
//! Rendering avoids widget/layout libraries: everything goes through a
//! framebuffer that is diffed against the previous frame.

pub mod fb;
pub mod keys;
pub mod renderer;
pub mod screen;

pub use tui_terrain_core as core;
pub use tui_terrain_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use keys::{handle_key_event, should_quit, ViewerAction};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Layout, TerminalSurface};
