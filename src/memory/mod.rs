//! Bounded containers for the piece inventory
//!
//! This module provides the core storage abstractions:
//! - [`piece`]: The [`piece::Piece`] token moved between containers
//! - [`queue`]: Fixed-capacity circular FIFO ([`queue::CircularQueue`])
//! - [`stack`]: Fixed-capacity LIFO ([`stack::BoundedStack`])
//!
//! # Allocation
//!
//! Every container allocates its backing buffer exactly once, at construction,
//! through [`Vec::try_reserve_exact`]. Nothing grows afterwards: inserting into a
//! full container is a no-op, so the buffer is never reallocated.
//!
//! ```text
//! queue:  [ _ | A2 | A3 | A1 | _ ]     front=1 rear=3 len=3
//! stack:  [ B1 | B2 | _ | _ | _ ]      top=1
//! ```

pub mod piece;
pub mod queue;
pub mod stack;

use thiserror::Error;

/// Failure to set up a container's backing buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A container with no slots cannot hold or cycle anything
    #[error("cannot allocate a {container} with zero capacity")]
    ZeroCapacity { container: &'static str },

    /// The allocator refused the request
    #[error("failed to allocate {capacity} slots for {container}")]
    OutOfMemory {
        container: &'static str,
        capacity: usize,
    },
}

/// Reserve exactly `capacity` slots up front, or report why not
pub(crate) fn allocate_slots<T>(
    container: &'static str,
    capacity: usize,
) -> Result<Vec<T>, AllocationError> {
    if capacity == 0 {
        return Err(AllocationError::ZeroCapacity { container });
    }
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| AllocationError::OutOfMemory {
            container,
            capacity,
        })?;
    Ok(slots)
}
