//! Transfer operations between the queue and the stacks
//!
//! Each operation takes the containers it touches explicitly. Preconditions are
//! checked before anything is moved, so a refused operation leaves every
//! container exactly as it was.
//!
//! Both [`use_reserved`] and [`undo`] return their piece to the REAR of the
//! queue. The queue only inserts at the rear; putting the piece back at the
//! front would need a double-ended queue.

use super::errors::Precondition;
use crate::memory::{piece::Piece, queue::CircularQueue, stack::BoundedStack};
use std::fmt;

/// What a successful transfer did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A piece left the queue for good. `reversible` is false when the undo
    /// stack had no room and the piece was not recorded.
    Played { piece: Piece, reversible: bool },
    Reserved(Piece),
    Used(Piece),
    /// `to_queue` came off the stack top, `to_reserve` off the queue front
    Swapped { to_queue: Piece, to_reserve: Piece },
    Undone(Piece),
    Inverted { queue_len: usize, reserve_len: usize },
}

impl Outcome {
    /// Extra line to show before the outcome itself
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Outcome::Played {
                reversible: false, ..
            } => Some("Undo stack is full! This play cannot be reverted."),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played { piece, .. } => {
                write!(f, "Piece '{}' played (removed from the queue).", piece)
            }
            Outcome::Reserved(piece) => {
                write!(f, "Piece '{}' reserved (queue -> reserve stack).", piece)
            }
            Outcome::Used(piece) => write!(
                f,
                "Piece '{}' used (reserve stack -> queue). It joins the rear of the queue.",
                piece
            ),
            Outcome::Swapped {
                to_queue,
                to_reserve,
            } => write!(
                f,
                "Swap done: '{}' (from stack) <-> '{}' (from queue).",
                to_queue, to_reserve
            ),
            Outcome::Undone(piece) => write!(
                f,
                "Last play undone: piece '{}' returned to the queue (joins the rear).",
                piece
            ),
            Outcome::Inverted { .. } => write!(
                f,
                "FULL INVERSION: queue and reserve stack contents exchanged."
            ),
        }
    }
}

/// 1 - Play the front piece, recording it for undo when there is room
pub fn play(
    queue: &mut CircularQueue<Piece>,
    undo: &mut BoundedStack<Piece>,
) -> Result<Outcome, Precondition> {
    let piece = queue.dequeue().ok_or(Precondition::NothingToPlay)?;
    let reversible = undo.push(piece.clone());
    Ok(Outcome::Played { piece, reversible })
}

/// 2 - Move the front piece onto the reserve stack
pub fn reserve(
    queue: &mut CircularQueue<Piece>,
    reserve: &mut BoundedStack<Piece>,
) -> Result<Outcome, Precondition> {
    if queue.is_empty() {
        return Err(Precondition::NothingToReserve);
    }
    if reserve.is_full() {
        return Err(Precondition::ReserveFull);
    }
    let piece = queue.dequeue().ok_or(Precondition::NothingToReserve)?;
    reserve.push(piece.clone());
    Ok(Outcome::Reserved(piece))
}

/// 3 - Move the reserve top back into the queue (at the rear)
pub fn use_reserved(
    queue: &mut CircularQueue<Piece>,
    reserve: &mut BoundedStack<Piece>,
) -> Result<Outcome, Precondition> {
    if reserve.is_empty() {
        return Err(Precondition::ReserveEmpty);
    }
    if queue.is_full() {
        return Err(Precondition::QueueFullForReserved);
    }
    let piece = reserve.pop().ok_or(Precondition::ReserveEmpty)?;
    queue.enqueue(piece.clone());
    Ok(Outcome::Used(piece))
}

/// 4 - Exchange the reserve top and the queue front in place
pub fn swap_top_front(
    reserve: &mut BoundedStack<Piece>,
    queue: &mut CircularQueue<Piece>,
) -> Result<Outcome, Precondition> {
    let (Some(top), Some(front)) = (reserve.top_mut(), queue.front_mut()) else {
        return Err(Precondition::NothingToSwap);
    };
    std::mem::swap(top, front);
    Ok(Outcome::Swapped {
        to_queue: front.clone(),
        to_reserve: top.clone(),
    })
}

/// 5 - Return the most recently played piece to the queue (at the rear)
pub fn undo(
    queue: &mut CircularQueue<Piece>,
    undo: &mut BoundedStack<Piece>,
) -> Result<Outcome, Precondition> {
    if undo.is_empty() {
        return Err(Precondition::NothingToUndo);
    }
    if queue.is_full() {
        return Err(Precondition::QueueFullForUndo);
    }
    let piece = undo.pop().ok_or(Precondition::NothingToUndo)?;
    queue.enqueue(piece.clone());
    Ok(Outcome::Undone(piece))
}

/// 6 - Exchange the whole contents of the queue and the reserve stack
///
/// The order of the three phases is what makes the result asymmetric:
///
/// 1. drain the queue front to rear into a scratch list
/// 2. pop the stack empty, enqueueing each piece (old top becomes the front)
/// 3. push the scratch list in order (old queue rear becomes the top)
///
/// Running it twice does not, in general, give back the starting state.
pub fn invert_all(
    queue: &mut CircularQueue<Piece>,
    reserve: &mut BoundedStack<Piece>,
) -> Outcome {
    let drained: Vec<Piece> = std::iter::from_fn(|| queue.dequeue()).collect();

    while let Some(piece) = reserve.pop() {
        queue.enqueue(piece);
    }

    for piece in drained {
        reserve.push(piece);
    }

    Outcome::Inverted {
        queue_len: queue.len(),
        reserve_len: reserve.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(names: &[&str], capacity: usize) -> CircularQueue<Piece> {
        let mut queue = CircularQueue::with_capacity(capacity).unwrap();
        for (id, name) in names.iter().enumerate() {
            queue.enqueue(Piece::new(*name, id as i32));
        }
        queue
    }

    // Pushed bottom first
    fn stack_of(names: &[&str], capacity: usize) -> BoundedStack<Piece> {
        let mut stack = BoundedStack::with_capacity(capacity).unwrap();
        for (id, name) in names.iter().enumerate() {
            stack.push(Piece::new(*name, 100 + id as i32));
        }
        stack
    }

    fn queue_names(queue: &CircularQueue<Piece>) -> Vec<&str> {
        queue.iter().map(Piece::name).collect()
    }

    // Bottom to top, the way the stacks are seeded
    fn stack_names(stack: &BoundedStack<Piece>) -> Vec<&str> {
        let mut names: Vec<&str> = stack.iter().map(Piece::name).collect();
        names.reverse();
        names
    }

    #[test]
    fn test_play_records_for_undo() {
        let mut queue = queue_of(&["A1", "A2"], 5);
        let mut history = stack_of(&[], 5);

        let outcome = play(&mut queue, &mut history).unwrap();
        assert!(matches!(outcome, Outcome::Played { reversible: true, .. }));
        assert_eq!(outcome.warning(), None);
        assert_eq!(queue_names(&queue), vec!["A2"]);
        assert_eq!(stack_names(&history), vec!["A1"]);
    }

    #[test]
    fn test_play_with_full_undo_still_plays() {
        let mut queue = queue_of(&["A1", "A2"], 5);
        let mut history = stack_of(&["H1", "H2"], 2);

        let outcome = play(&mut queue, &mut history).unwrap();
        assert!(matches!(outcome, Outcome::Played { reversible: false, .. }));
        assert!(outcome.warning().is_some());
        assert_eq!(queue_names(&queue), vec!["A2"]);
        assert_eq!(stack_names(&history), vec!["H1", "H2"]);
    }

    #[test]
    fn test_play_on_empty_queue_refused() {
        let mut queue = queue_of(&[], 5);
        let mut history = stack_of(&["H1"], 5);
        assert_eq!(
            play(&mut queue, &mut history),
            Err(Precondition::NothingToPlay)
        );
        assert_eq!(stack_names(&history), vec!["H1"]);
    }

    #[test]
    fn test_reserve_preconditions() {
        let mut empty = queue_of(&[], 5);
        let mut stack = stack_of(&[], 5);
        assert_eq!(
            reserve(&mut empty, &mut stack),
            Err(Precondition::NothingToReserve)
        );

        let mut queue = queue_of(&["A1"], 5);
        let mut full = stack_of(&["B1", "B2"], 2);
        assert_eq!(reserve(&mut queue, &mut full), Err(Precondition::ReserveFull));
        assert_eq!(queue_names(&queue), vec!["A1"]);
        assert_eq!(stack_names(&full), vec!["B1", "B2"]);
    }

    #[test]
    fn test_use_reserved_goes_to_rear() {
        let mut queue = queue_of(&["A2", "A3"], 5);
        let mut stack = stack_of(&["B1", "B2", "A1"], 5);

        let outcome = use_reserved(&mut queue, &mut stack).unwrap();
        assert_eq!(outcome, Outcome::Used(Piece::new("A1", 102)));
        assert_eq!(queue_names(&queue), vec!["A2", "A3", "A1"]);
        assert_eq!(stack_names(&stack), vec!["B1", "B2"]);
    }

    #[test]
    fn test_use_reserved_preconditions() {
        let mut queue = queue_of(&["A1"], 5);
        let mut empty = stack_of(&[], 5);
        assert_eq!(
            use_reserved(&mut queue, &mut empty),
            Err(Precondition::ReserveEmpty)
        );

        let mut full = queue_of(&["A1", "A2"], 2);
        let mut stack = stack_of(&["B1"], 5);
        assert_eq!(
            use_reserved(&mut full, &mut stack),
            Err(Precondition::QueueFullForReserved)
        );
        assert_eq!(stack_names(&stack), vec!["B1"]);
    }

    #[test]
    fn test_swap_exchanges_in_place() {
        let mut queue = queue_of(&["A2", "A3", "A1"], 5);
        let mut stack = stack_of(&["B1", "B2"], 5);

        let outcome = swap_top_front(&mut stack, &mut queue).unwrap();
        assert_eq!(
            outcome.to_string(),
            "Swap done: 'B2' (from stack) <-> 'A2' (from queue)."
        );
        assert_eq!(queue_names(&queue), vec!["B2", "A3", "A1"]);
        assert_eq!(stack_names(&stack), vec!["B1", "A2"]);
        assert_eq!(queue.len(), 3);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_swap_needs_both_sides() {
        let mut queue = queue_of(&["A1"], 5);
        let mut stack = stack_of(&[], 5);
        assert_eq!(
            swap_top_front(&mut stack, &mut queue),
            Err(Precondition::NothingToSwap)
        );

        let mut empty = queue_of(&[], 5);
        let mut stack = stack_of(&["B1"], 5);
        assert_eq!(
            swap_top_front(&mut stack, &mut empty),
            Err(Precondition::NothingToSwap)
        );
        assert_eq!(stack_names(&stack), vec!["B1"]);
    }

    #[test]
    fn test_play_then_undo_returns_piece_to_rear() {
        let mut queue = queue_of(&["A1", "A2", "A3"], 5);
        let mut history = stack_of(&[], 5);

        play(&mut queue, &mut history).unwrap();
        let outcome = undo(&mut queue, &mut history).unwrap();

        assert!(matches!(outcome, Outcome::Undone(ref p) if p.name() == "A1"));
        assert_eq!(queue_names(&queue), vec!["A2", "A3", "A1"]);
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_preconditions() {
        let mut queue = queue_of(&["A1"], 5);
        let mut history = stack_of(&[], 5);
        assert_eq!(
            undo(&mut queue, &mut history),
            Err(Precondition::NothingToUndo)
        );

        let mut full = queue_of(&["A1", "A2"], 2);
        let mut history = stack_of(&["H1"], 5);
        assert_eq!(
            undo(&mut full, &mut history),
            Err(Precondition::QueueFullForUndo)
        );
        assert_eq!(stack_names(&history), vec!["H1"]);
        assert_eq!(queue_names(&full), vec!["A1", "A2"]);
    }

    #[test]
    fn test_invert_all_follows_three_phases() {
        let mut queue = queue_of(&["A2", "A3", "A1"], 5);
        let mut stack = stack_of(&["B1", "B2"], 5);

        let outcome = invert_all(&mut queue, &mut stack);

        assert_eq!(
            outcome,
            Outcome::Inverted {
                queue_len: 2,
                reserve_len: 3
            }
        );
        assert_eq!(queue_names(&queue), vec!["B2", "B1"]);
        assert_eq!(stack_names(&stack), vec!["A2", "A3", "A1"]);
        assert_eq!(stack.top().map(Piece::name), Some("A1"));
    }

    #[test]
    fn test_invert_all_twice_is_not_identity() {
        let mut queue = queue_of(&["A1", "A2", "A3"], 5);
        let mut stack = stack_of(&["B1", "B2"], 5);

        invert_all(&mut queue, &mut stack);
        invert_all(&mut queue, &mut stack);

        // queue <- stack popped [A3, A2, A1]; stack <- queue [B2, B1]
        assert_eq!(queue_names(&queue), vec!["A3", "A2", "A1"]);
        assert_eq!(stack_names(&stack), vec!["B2", "B1"]);
    }

    #[test]
    fn test_invert_all_with_empty_sides() {
        let mut queue = queue_of(&[], 5);
        let mut stack = stack_of(&[], 5);
        invert_all(&mut queue, &mut stack);
        assert!(queue.is_empty());
        assert!(stack.is_empty());

        let mut queue = queue_of(&["A1", "A2"], 5);
        invert_all(&mut queue, &mut stack);
        assert!(queue.is_empty());
        assert_eq!(stack_names(&stack), vec!["A1", "A2"]);
    }
}
