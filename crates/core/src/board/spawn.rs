//! Random spawn-point search.
//!
//! An accept/reject sampler: pick a random entity, keep it as a candidate if
//! it is a suitable tile, then accept it if enough of its neighbourhood is
//! walkable. Runs at most `max_tries` rounds; exhaustion is a normal outcome.

use rand::Rng;
use tracing::{debug, trace};

use super::Board;
use crate::surface::Surface;
use crate::types::{Entity, Position};

/// Parameters of a spawn-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnQuery {
    /// Minimum share of walkable cells around the candidate, in `[0, 100]`.
    pub walkable_percentage: f64,
    /// Neighbourhood radius; the scanned square is `2 * radius + 1` wide.
    pub radius: i32,
    /// Count cells without a tile as non-walkable instead of skipping them.
    pub count_missing: bool,
    /// Only accept candidates that are walkable themselves.
    pub require_walkable: bool,
    pub max_tries: u32,
}

impl Default for SpawnQuery {
    fn default() -> Self {
        Self {
            walkable_percentage: 60.0,
            radius: 1,
            count_missing: false,
            require_walkable: true,
            max_tries: 64,
        }
    }
}

impl SpawnQuery {
    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.walkable_percentage) && self.radius >= 1 && self.max_tries >= 1
    }
}

/// Outcome of [`Board::spawn_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSearch {
    pub position: Option<Position>,
    /// Sampling rounds consumed (zero for a rejected query).
    pub tries: u32,
}

impl<S: Surface> Board<S> {
    /// Position of a random tile with a sufficiently walkable neighbourhood.
    pub fn random_spawn_point<R: Rng>(&self, query: &SpawnQuery, rng: &mut R) -> Option<Position> {
        self.spawn_search(query, rng).position
    }

    /// Like [`Board::random_spawn_point`], also reporting how many rounds ran.
    pub fn spawn_search<R: Rng>(&self, query: &SpawnQuery, rng: &mut R) -> SpawnSearch {
        if !query.is_valid() {
            debug!(?query, "spawn query rejected");
            return SpawnSearch {
                position: None,
                tries: 0,
            };
        }

        let area = self.drawable_area();
        for attempt in 1..=query.max_tries {
            let Some(candidate) = self.random_entity(rng) else {
                continue;
            };
            if !candidate.is_tile()
                || !area.contains(candidate.position)
                || (query.require_walkable && !candidate.is_walkable())
            {
                trace!(attempt, position = ?candidate.position, "not a spawn candidate");
                continue;
            }

            let share = self.walkable_share(candidate.position, query.radius, query.count_missing);
            trace!(attempt, position = ?candidate.position, ?share, "spawn candidate");
            if share.is_some_and(|share| share >= query.walkable_percentage) {
                return SpawnSearch {
                    position: Some(candidate.position),
                    tries: attempt,
                };
            }
        }

        debug!(tries = query.max_tries, "spawn search exhausted");
        SpawnSearch {
            position: None,
            tries: query.max_tries,
        }
    }

    /// Percentage of walkable tiles in the square of `radius` around
    /// `center`. `None` when nothing in the square is counted.
    pub fn walkable_share(
        &self,
        center: Position,
        radius: i32,
        count_missing: bool,
    ) -> Option<f64> {
        let mut checked = 0u32;
        let mut walkable = 0u32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                match self.entities.get(&center.offset(dx, dy)) {
                    Some(entity) if entity.is_tile() => {
                        checked += 1;
                        if entity.is_walkable() {
                            walkable += 1;
                        }
                    }
                    _ if count_missing => checked += 1,
                    _ => {}
                }
            }
        }

        if checked == 0 {
            return None;
        }
        Some(walkable as f64 / checked as f64 * 100.0)
    }

    fn random_entity<R: Rng>(&self, rng: &mut R) -> Option<&Entity> {
        if self.entities.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.entities.len());
        self.entities.values().nth(index)
    }
}
