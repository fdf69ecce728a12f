//! Presenters built on top of the game core.
//!
//! - **[`app`]**: ratatui application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (queue,
//!   reserve and undo stacks, menu, journal, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//! - **[`prompt`]**: line-oriented presenter for plain terminals and pipes
//!
//! The entry point for the TUI is [`App`]: construct it with a [`Game`] and
//! call [`App::run`] to start the event loop. The plain presenter is
//! [`prompt::run_prompt`].
//!
//! [`Game`]: crate::game::engine::Game
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod prompt;
pub mod theme;

pub use app::App;
