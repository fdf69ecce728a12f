//! Error types for the piece inventory
//!
//! There are exactly two kinds of failure:
//!
//! - [`AllocationError`]: a container buffer could not be set up. Fatal, and
//!   only possible before the first turn.
//! - [`Precondition`]: a transfer found its source empty or its destination
//!   full. Non-fatal; the transfer is abandoned before any container is touched.
//!
//! [`GameError`] wraps both for callers that deal with either.

use crate::memory::AllocationError;
use thiserror::Error;

/// A transfer operation refused to run; no container was modified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("Queue is empty! There is no piece to play.")]
    NothingToPlay,

    #[error("Queue is empty! There is no piece to reserve.")]
    NothingToReserve,

    #[error("Reserve stack is full! No more pieces can be reserved.")]
    ReserveFull,

    #[error("Reserve stack is empty! There is no piece to use.")]
    ReserveEmpty,

    #[error("Queue is full! The reserved piece cannot be used.")]
    QueueFullForReserved,

    #[error("Cannot swap: reserve stack or queue is empty.")]
    NothingToSwap,

    #[error("Undo stack is empty! There is no play to revert.")]
    NothingToUndo,

    #[error("Queue is full! The last play cannot be undone.")]
    QueueFullForUndo,
}

/// Any failure the game core can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("allocation failure: {0}")]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Precondition(#[from] Precondition),
}

impl GameError {
    /// Whether the session has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::Allocation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages_are_distinct() {
        let all = [
            Precondition::NothingToPlay,
            Precondition::NothingToReserve,
            Precondition::ReserveFull,
            Precondition::ReserveEmpty,
            Precondition::QueueFullForReserved,
            Precondition::NothingToSwap,
            Precondition::NothingToUndo,
            Precondition::QueueFullForUndo,
        ];
        let mut messages: Vec<String> = all.iter().map(|p| p.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_fatality() {
        let alloc: GameError = AllocationError::ZeroCapacity { container: "queue" }.into();
        assert!(alloc.is_fatal());
        assert_eq!(
            alloc.to_string(),
            "allocation failure: cannot allocate a queue with zero capacity"
        );

        let soft: GameError = Precondition::ReserveFull.into();
        assert!(!soft.is_fatal());
        assert_eq!(soft.to_string(), Precondition::ReserveFull.to_string());
    }
}
