//! Environment-driven configuration.

use std::env;
use std::str::FromStr;

use crate::board::SpawnQuery;
use crate::types::{Graphics, Rgb};

/// Placeholder painted over cells outside the printable bounds.
pub const DEFAULT_OUT_OF_BOUNDS_GLYPH: char = '░';
const OUT_OF_BOUNDS_FG: Rgb = Rgb::new(90, 90, 90);

/// Runtime knobs for boards and the demo viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    pub spawn: SpawnQuery,
    pub out_of_bounds_glyph: char,
    /// Seed for the viewer's random source, `None` for entropy.
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnQuery::default(),
            out_of_bounds_glyph: DEFAULT_OUT_OF_BOUNDS_GLYPH,
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Create from `TERRAIN_*` environment variables.
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TerrainConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let spawn = SpawnQuery {
            walkable_percentage: parsed(&lookup, "TERRAIN_SPAWN_PERCENT")
                .unwrap_or(defaults.spawn.walkable_percentage),
            radius: parsed(&lookup, "TERRAIN_SPAWN_RADIUS").unwrap_or(defaults.spawn.radius),
            max_tries: parsed(&lookup, "TERRAIN_SPAWN_TRIES").unwrap_or(defaults.spawn.max_tries),
            count_missing: lookup("TERRAIN_SPAWN_COUNT_MISSING")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.spawn.count_missing),
            ..defaults.spawn
        };

        let out_of_bounds_glyph = lookup("TERRAIN_OOB_GLYPH")
            .and_then(|s| single_char(s.trim()))
            .unwrap_or(defaults.out_of_bounds_glyph);

        Self {
            spawn,
            out_of_bounds_glyph,
            seed: parsed(&lookup, "TERRAIN_SEED"),
        }
    }

    pub fn spawn_query(&self) -> SpawnQuery {
        self.spawn
    }

    pub fn out_of_bounds(&self) -> Graphics {
        Graphics::new(self.out_of_bounds_glyph, OUT_OF_BOUNDS_FG, Rgb::BLACK)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
