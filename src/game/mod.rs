//! Game core: the transfers and the session that runs them
//!
//! This module provides:
//! - [`action`]: Menu numbers and the six transfer [`action::Action`]s
//! - [`ops`]: The transfer operations over explicit container references
//! - [`engine`]: [`engine::Game`], which owns the containers and the journal
//! - [`errors`]: Allocation and precondition failures
//!
//! # Turn Model
//!
//! One menu selection is one turn. A transfer either completes or is refused
//! before touching any container; there is no partial state between turns.
//!
//! ```text
//! 1 play      queue ──front──▶ undo
//! 2 reserve   queue ──front──▶ reserve
//! 3 use       reserve ──top──▶ queue (rear)
//! 4 swap      reserve.top ⇄ queue.front
//! 5 undo      undo ──top──▶ queue (rear)
//! 6 invert    queue ⇄ reserve (whole contents)
//! ```

pub mod action;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod ops;
