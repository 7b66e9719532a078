//! TUI Terrain (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_terrain::{types, core, term}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_terrain_core as core;
pub use tui_terrain_term as term;
pub use tui_terrain_types as types;
