//! Movement notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Entity, Position};

/// Record of a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveTransition {
    /// The entity as it now stands on the board.
    pub entity: Entity,
    pub from: Position,
    pub to: Position,
    /// The tile that occupied the destination before the move.
    pub destination: Entity,
}

/// Receives movement notifications from a board.
///
/// `on_entity_moving` fires before the move is validated and cannot stop it;
/// `on_entity_moved` fires only after a successful move.
pub trait MoveObserver {
    fn on_entity_moving(&mut self, _entity: &Entity, _target: Position) {}

    fn on_entity_moved(&mut self, _transition: &MoveTransition) {}
}

#[derive(Debug, Default)]
struct MoveLogInner {
    attempts: Vec<(Entity, Position)>,
    moves: Vec<MoveTransition>,
}

/// Observer that keeps every notification it receives.
///
/// Clones share the same log, so one handle can be registered with a board
/// while another is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    inner: Rc<RefCell<MoveLogInner>>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every "about to move" notification, in order.
    pub fn attempts(&self) -> Vec<(Entity, Position)> {
        self.inner.borrow().attempts.clone()
    }

    /// Every completed move, in order.
    pub fn moves(&self) -> Vec<MoveTransition> {
        self.inner.borrow().moves.clone()
    }

    pub fn last_move(&self) -> Option<MoveTransition> {
        self.inner.borrow().moves.last().copied()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.attempts.clear();
        inner.moves.clear();
    }
}

impl MoveObserver for MoveLog {
    fn on_entity_moving(&mut self, entity: &Entity, target: Position) {
        self.inner.borrow_mut().attempts.push((*entity, target));
    }

    fn on_entity_moved(&mut self, transition: &MoveTransition) {
        self.inner.borrow_mut().moves.push(*transition);
    }
}
