//! # Introduction
//!
//! piecetty keeps a puzzle-piece inventory in three bounded containers and lets
//! the player move pieces between them from the terminal: a circular queue of
//! pieces in play, a reserve stack and an undo stack. The state is drawn with
//! [ratatui](https://docs.rs/ratatui) or, with `--plain`, as text.
//!
//! ## Layers
//!
//! ```text
//! memory (Piece, CircularQueue, BoundedStack) → game (ops, Game) → ui
//! ```
//!
//! 1. [`memory`]: the fixed-capacity [`memory::queue::CircularQueue`] and
//!    [`memory::stack::BoundedStack`], and the [`memory::piece::Piece`] they hold.
//! 2. [`game`]: the six transfer operations and the [`game::engine::Game`]
//!    session that owns the containers.
//! 3. [`journal`]: the record of every message a session produced.
//! 4. [`ui`]: the ratatui TUI and the line-oriented prompt; not part of the
//!    stable library API.
//!
//! ## Actions
//!
//! Play, reserve, use reserved, swap reserve top with queue front, undo, and
//! invert queue with stack. Pieces returned to the queue always join its rear.

pub mod game;
pub mod journal;
pub mod memory;
pub mod ui;
