//! Terminal terrain viewer (default binary).
//!
//! Generates a walled chunk of terrain, drops a player on a random spawn
//! point and lets you walk around it. Arrows scroll the view, WASD/HJKL move
//! the player, `r` takes a random step, `n` respawns, `q` quits.
//!
//! Logs go to `terrain-view.log` in `TERRAIN_LOG_DIR` (default: the system
//! temp dir) because the terminal itself is the display.

use std::path::PathBuf;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use tui_terrain::core::{Board, ChunkSpec, EditOperation, MoveLog, Surface, TerrainConfig};
use tui_terrain::term::{
    handle_key_event, should_quit, CellStyle, Layout, TerminalSurface, ViewerAction,
};
use tui_terrain::types::{Entity, Graphics, Health, Position, Rectangle, Rgb, TileType};

const FLOOR: Graphics = Graphics::glyph('.', Rgb::new(70, 110, 70));
const WALL: Graphics = Graphics::new('#', Rgb::new(200, 200, 200), Rgb::new(60, 60, 60));
const ROCK: Graphics = Graphics::glyph('^', Rgb::new(150, 120, 90));
const PLAYER: Graphics = Graphics::glyph('@', Rgb::new(255, 220, 0));

/// Share of floor cells turned into rocks, in percent.
const ROCK_DENSITY: u32 = 12;
const MAX_VIEW: (u16, u16) = (40, 20);

type TermBoard = Board<TerminalSurface>;

fn main() -> Result<()> {
    let _guard = init_logging()?;
    let config = TerrainConfig::from_env();
    info!(?config, "starting terrain-view");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let layout = Layout {
        origin: (0, 1),
        ..Layout::default()
    };
    let mut board = build_board(w, h, layout, &config, &mut rng)?;

    board.surface_mut().renderer_mut().enter()?;
    let result = run(&mut board, &config, &mut rng);

    // Always try to restore terminal state.
    let _ = board.surface_mut().renderer_mut().exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "terrain-view failed");
    }
    result
}

fn init_logging() -> Result<WorkerGuard> {
    let log_dir = std::env::var("TERRAIN_LOG_DIR")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "terrain-view.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    // File only: stdout belongs to the terminal surface.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

fn build_board(
    term_w: u16,
    term_h: u16,
    layout: Layout,
    config: &TerrainConfig,
    rng: &mut StdRng,
) -> Result<TermBoard> {
    let cols = (term_w / layout.cell_w).min(MAX_VIEW.0);
    let rows = term_h.saturating_sub(layout.origin.1).min(MAX_VIEW.1);
    if cols < 3 || rows < 3 {
        bail!("terminal too small: {term_w}x{term_h}");
    }

    let area = Rectangle::try_new(Position::ZERO, i32::from(cols), i32::from(rows))?;
    let chunk =
        ChunkSpec::new(area, FLOOR, TileType::WALKABLE).with_border(WALL, TileType::empty());
    let surface = TerminalSurface::new(term_w, term_h, layout);

    let mut board = Board::from_chunk(area, &chunk, surface);
    board.configure(config);
    board.set_replacement_tile(Some(Entity::tile(FLOOR, Position::ZERO, TileType::WALKABLE)))?;

    let floor: Vec<Position> = board
        .entities()
        .filter(|e| e.is_walkable())
        .map(|e| e.position)
        .collect();
    for position in floor {
        if rng.random_range(0..100) < ROCK_DENSITY {
            let rock = Entity::tile(ROCK, position, TileType::empty());
            board.edit_entities(&rock, EditOperation::Update);
        }
    }

    debug!(tiles = board.len(), bounds = ?board.terrain_bounds(), "terrain generated");
    Ok(board)
}

fn spawn_player(board: &mut TermBoard, config: &TerrainConfig, rng: &mut StdRng) -> Result<Entity> {
    let search = board.spawn_search(&config.spawn_query(), rng);
    let Some(position) = search.position else {
        bail!("no spawn point found after {} tries", search.tries);
    };
    info!(?position, tries = search.tries, "player spawned");

    let player = Entity::character(PLAYER, position, Health::full(10));
    board.edit_entities(&player, EditOperation::UpdateOrCreate);
    Ok(player)
}

fn run(board: &mut TermBoard, config: &TerrainConfig, rng: &mut StdRng) -> Result<()> {
    let moves = MoveLog::new();
    board.subscribe(Box::new(moves.clone()));

    let mut player = spawn_player(board, config, rng)?;
    board.draw();
    status_line(board, &player, moves.moves().len())?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                debug!(?action, "key");
                match action {
                    ViewerAction::ScrollView(direction) => {
                        board.move_view(direction, 1, true);
                    }
                    ViewerAction::Step(direction) => {
                        board.move_entity(&mut player, direction, 1);
                    }
                    ViewerAction::RandomStep => {
                        board.move_entity_in_random_direction(&mut player, rng);
                    }
                    ViewerAction::Respawn => {
                        board.edit_entities(&player, EditOperation::Delete);
                        player = spawn_player(board, config, rng)?;
                    }
                }
            }
            Event::Resize(w, h) => {
                board.surface_mut().resize(w, h);
                board.clear_surface();
                board.draw();
            }
            _ => continue,
        }
        status_line(board, &player, moves.moves().len())?;
    }
}

fn status_line(board: &mut TermBoard, player: &Entity, move_count: usize) -> Result<()> {
    let bounds = board.printable_bounds();
    let text = format!(
        " @ {:>3},{:<3} moves {:<5} view x {}..{} y {}..{}",
        player.position.x,
        player.position.y,
        move_count,
        bounds.x.min,
        bounds.x.max,
        bounds.y.min,
        bounds.y.max,
    );

    let surface = board.surface_mut();
    let width = surface.frame().width();
    let style = CellStyle::default().bold();
    surface.frame_mut().put_str(0, 0, &format!("{text:<width$}", width = width as usize), style);
    surface.flush()?;
    Ok(())
}
