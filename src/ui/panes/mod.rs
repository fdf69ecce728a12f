//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*` function that draws one
//! region of the screen from borrowed game state. Panes hold no state of their
//! own; scroll offsets live in [`crate::ui::App`] and are passed in by
//! reference so a pane can clamp them to its content.
//!
//! # Pane Modules
//!
//! - [`queue`]: The play queue, front to rear
//! - [`stack`]: A bounded stack, top to bottom (reserve and undo)
//! - [`menu`]: The numbered action menu
//! - [`journal`]: Messages produced by each turn
//! - [`status`]: Status bar with the last message, tallies and keybindings
//! - `utils`: Shared block, list and piece formatting helpers

mod utils;

pub mod journal;
pub mod menu;
pub mod queue;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use journal::render_journal_pane;
pub use menu::render_menu_pane;
pub use queue::render_queue_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
