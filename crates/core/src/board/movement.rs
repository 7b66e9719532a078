//! Entity movement.
//!
//! A move succeeds only for an entity the board actually holds, and only
//! onto a walkable tile that lies inside the current printable bounds.
//! Observers hear about every attempt before it is validated and about every
//! completed move afterwards.

use rand::Rng;
use tracing::debug;

use super::{Board, EditOperation};
use crate::observer::MoveTransition;
use crate::surface::Surface;
use crate::types::{Direction, Entity, Position};

impl<S: Surface> Board<S> {
    /// Move `entity` `amount` cells in `direction`.
    pub fn move_entity(
        &mut self,
        entity: &mut Entity,
        direction: Direction,
        amount: i32,
    ) -> Option<MoveTransition> {
        let Some(target) = entity.position.checked_relative(direction, amount) else {
            debug!(
                from = ?entity.position,
                ?direction,
                amount,
                "move blocked: target off the grid"
            );
            return None;
        };
        self.move_entity_to(entity, target)
    }

    /// Move `entity` onto `target`.
    ///
    /// On success the entity leaves a replacement tile behind, takes the
    /// place of the destination tile, and `entity.position` is updated. On
    /// failure nothing changes and `None` is returned. The board must hold
    /// exactly `*entity` at `entity.position`; a stale or foreign copy is
    /// refused.
    pub fn move_entity_to(
        &mut self,
        entity: &mut Entity,
        target: Position,
    ) -> Option<MoveTransition> {
        for observer in &mut self.observers {
            observer.on_entity_moving(entity, target);
        }

        let destination = match self.entities.get(&target) {
            Some(occupant) if occupant.is_walkable() => *occupant,
            Some(_) => {
                debug!(?target, "move blocked: destination not walkable");
                return None;
            }
            None => {
                debug!(?target, "move blocked: no tile at destination");
                return None;
            }
        };
        if !self.printer.is_printable(target) {
            debug!(?target, "move blocked: destination outside printable bounds");
            return None;
        }

        let from = entity.position;
        if self.entities.get(&from) != Some(&*entity) {
            debug!(?from, "move blocked: mover not on the board");
            return None;
        }

        self.edit_entities(entity, EditOperation::Delete);
        entity.position = target;
        self.edit_entities(entity, EditOperation::UpdateOrCreate);

        let transition = MoveTransition {
            entity: *entity,
            from,
            to: target,
            destination,
        };
        for observer in &mut self.observers {
            observer.on_entity_moved(&transition);
        }
        Some(transition)
    }

    /// Try a one-cell move in a uniformly chosen direction.
    pub fn move_entity_in_random_direction<R: Rng>(
        &mut self,
        entity: &mut Entity,
        rng: &mut R,
    ) -> Option<MoveTransition> {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        self.move_entity(entity, direction, 1)
    }
}
