//! Game session state
//!
//! [`Game`] owns the three containers (the play queue, the reserve stack and the
//! undo stack) together with the [`Journal`] of messages and a per-action tally.
//! Presenters hold a `Game` and drive it one [`Action`] at a time through
//! [`Game::apply`]; they read state back through the accessors.

use super::action::Action;
use super::constants::{RELEASE_MESSAGE, SEED_QUEUE_PIECES, SEED_RESERVE_PIECES};
use super::errors::{GameError, Precondition};
use super::ops::{self, Outcome};
use crate::journal::{Journal, Severity};
use crate::memory::{piece::Piece, queue::CircularQueue, stack::BoundedStack};
use rustc_hash::FxHashMap;

/// The piece inventory and everything needed to present it
#[derive(Debug)]
pub struct Game {
    queue: CircularQueue<Piece>,
    reserve: BoundedStack<Piece>,
    undo: BoundedStack<Piece>,
    journal: Journal,
    tally: FxHashMap<Action, usize>,
}

impl Game {
    /// Allocate empty containers, each with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, GameError> {
        let queue = CircularQueue::with_capacity(capacity)?;
        let reserve = BoundedStack::with_capacity(capacity)?;
        let undo = BoundedStack::with_capacity(capacity)?;
        tracing::info!(capacity, "containers allocated");

        Ok(Game {
            queue,
            reserve,
            undo,
            journal: Journal::new(),
            tally: FxHashMap::default(),
        })
    }

    /// Allocate and fill with the starting pieces
    pub fn seeded(capacity: usize) -> Result<Self, GameError> {
        let mut game = Self::new(capacity)?;
        game.seed();
        Ok(game)
    }

    /// Put the starting pieces in place: `Piece_A*` in the queue, `Piece_B*` on
    /// the reserve stack. Pieces that do not fit are dropped like any other
    /// insert into a full container.
    pub fn seed(&mut self) {
        self.journal.record(Severity::Info, "--- Starting game ---");

        let queued = (1..=SEED_QUEUE_PIECES)
            .filter(|i| self.queue.enqueue(Piece::new(format!("Piece_A{}", i), *i)))
            .count();
        self.journal.record(
            Severity::Success,
            format!("Play queue filled ({} pieces).", queued),
        );

        let reserved = (1..=SEED_RESERVE_PIECES)
            .filter(|i| {
                self.reserve.push(Piece::new(
                    format!("Piece_B{}", i),
                    SEED_QUEUE_PIECES + i,
                ))
            })
            .count();
        self.journal.record(
            Severity::Success,
            format!("Reserve stack filled ({} pieces).", reserved),
        );

        tracing::debug!(queued, reserved, "seeded starting pieces");
    }

    /// Run one transfer, journaling its outcome or the reason it was refused
    pub fn apply(&mut self, action: Action) -> Result<Outcome, Precondition> {
        self.journal.next_turn();

        let result = match action {
            Action::Play => ops::play(&mut self.queue, &mut self.undo),
            Action::Reserve => ops::reserve(&mut self.queue, &mut self.reserve),
            Action::UseReserved => ops::use_reserved(&mut self.queue, &mut self.reserve),
            Action::SwapTopFront => ops::swap_top_front(&mut self.reserve, &mut self.queue),
            Action::Undo => ops::undo(&mut self.queue, &mut self.undo),
            Action::InvertAll => Ok(ops::invert_all(&mut self.queue, &mut self.reserve)),
        };

        match &result {
            Ok(outcome) => {
                if let Some(warning) = outcome.warning() {
                    tracing::warn!(?action, "{}", warning);
                    self.journal.record(Severity::Warning, warning);
                }
                tracing::debug!(
                    ?action,
                    queue = self.queue.len(),
                    reserve = self.reserve.len(),
                    undo = self.undo.len(),
                    "transfer applied"
                );
                self.journal.record(Severity::Success, outcome.to_string());
                *self.tally.entry(action).or_insert(0) += 1;
            }
            Err(reason) => {
                tracing::info!(?action, %reason, "transfer refused");
                self.journal.record(Severity::Refused, reason.to_string());
            }
        }

        result
    }

    /// End the session, releasing every container
    pub fn finish(self) -> &'static str {
        tracing::info!(
            turns = self.journal.turn(),
            applied = self.total_applied(),
            "session finished"
        );
        RELEASE_MESSAGE
    }

    pub fn queue(&self) -> &CircularQueue<Piece> {
        &self.queue
    }

    pub fn reserve(&self) -> &BoundedStack<Piece> {
        &self.reserve
    }

    pub fn undo_stack(&self) -> &BoundedStack<Piece> {
        &self.undo
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Record a presenter-level message (bad input, farewell, ...)
    pub fn note(&mut self, severity: Severity, text: impl Into<String>) {
        self.journal.record(severity, text);
    }

    /// Successful runs of `action` so far
    pub fn applied(&self, action: Action) -> usize {
        self.tally.get(&action).copied().unwrap_or(0)
    }

    pub fn total_applied(&self) -> usize {
        self.tally.values().sum()
    }
}
