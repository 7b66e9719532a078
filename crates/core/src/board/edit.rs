//! Create/update/delete protocol.

use std::str::FromStr;

use tracing::debug;

use super::Board;
use crate::surface::Surface;
use crate::types::{Entity, Position, TerrainError};

/// How [`Board::edit_entities`] treats the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOperation {
    /// Insert into an empty cell.
    Create,
    /// Replace the occupant of a cell.
    Update,
    /// Remove this exact entity and backfill its cell.
    Delete,
    /// `Create`, falling back to `Update` when the cell is occupied.
    UpdateOrCreate,
}

impl EditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditOperation::Create => "create",
            EditOperation::Update => "update",
            EditOperation::Delete => "delete",
            EditOperation::UpdateOrCreate => "update-or-create",
        }
    }
}

impl FromStr for EditOperation {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(EditOperation::Create),
            "update" => Ok(EditOperation::Update),
            "delete" => Ok(EditOperation::Delete),
            "update-or-create" | "upsert" => Ok(EditOperation::UpdateOrCreate),
            _ => Err(TerrainError::invalid_enum("edit operation", s)),
        }
    }
}

impl<S: Surface> Board<S> {
    /// Apply `operation` to the cell at `entity.position`.
    ///
    /// Returns `false`, leaving the board untouched, when the cell is not in
    /// the state the operation needs (occupied for `Create`, empty for
    /// `Update`, holding a different entity for `Delete`).
    pub fn edit_entities(&mut self, entity: &Entity, operation: EditOperation) -> bool {
        let done = match operation {
            EditOperation::Create => self.create(entity),
            EditOperation::Update => self.update(entity),
            EditOperation::Delete => self.delete(entity),
            EditOperation::UpdateOrCreate => self.create(entity) || self.update(entity),
        };
        if !done {
            debug!(op = operation.as_str(), position = ?entity.position, "edit rejected");
        }
        done
    }

    fn create(&mut self, entity: &Entity) -> bool {
        if self.entities.contains_key(&entity.position) {
            return false;
        }
        self.insert(*entity);
        self.render_cell(entity.position);
        true
    }

    fn update(&mut self, entity: &Entity) -> bool {
        match self.entities.get_mut(&entity.position) {
            Some(slot) => *slot = *entity,
            None => return false,
        }
        self.render_cell(entity.position);
        true
    }

    fn delete(&mut self, entity: &Entity) -> bool {
        if self.entities.get(&entity.position) != Some(entity) {
            return false;
        }
        self.entities.remove(&entity.position);

        let replacement = self.replacement_at(entity.position);
        self.insert(replacement);
        self.render_cell(entity.position);
        true
    }

    fn replacement_at(&self, position: Position) -> Entity {
        match &self.replacement_tile {
            Some(tile) => tile.at(position),
            None => Entity::empty_tile(position),
        }
    }
}
