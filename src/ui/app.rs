//! Main TUI application state and logic

use crate::game::action::{Selection, SelectionError};
use crate::game::engine::Game;
use crate::journal::Severity;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Queue,
    Reserve,
    Undo,
    Journal,
}

impl FocusedPane {
    /// Move focus to the next pane (queue -> reserve -> undo -> journal)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Queue => FocusedPane::Reserve,
            FocusedPane::Reserve => FocusedPane::Undo,
            FocusedPane::Undo => FocusedPane::Journal,
            FocusedPane::Journal => FocusedPane::Queue,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Queue => FocusedPane::Journal,
            FocusedPane::Reserve => FocusedPane::Queue,
            FocusedPane::Undo => FocusedPane::Reserve,
            FocusedPane::Journal => FocusedPane::Undo,
        }
    }
}

/// The main application state
pub struct App {
    /// The game being played
    pub game: Game,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub queue_scroll: usize,
    pub reserve_scroll: usize,
    pub undo_scroll: usize,
    pub journal_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a game
    pub fn new(game: Game) -> Self {
        App {
            game,
            focused_pane: FocusedPane::Queue,
            queue_scroll: 0,
            reserve_scroll: 0,
            undo_scroll: 0,
            journal_scroll: usize::MAX,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Hand the game back once the event loop is over
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Queue (top) | Reserve + Undo (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[0]);

        let stacks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(left_rows[1]);

        // Right column: Menu (fixed) | Journal (rest)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_queue_pane(
            frame,
            left_rows[0],
            self.game.queue(),
            self.focused_pane == FocusedPane::Queue,
            &mut self.queue_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            stacks[0],
            "LIFO Reserve",
            self.game.reserve(),
            self.focused_pane == FocusedPane::Reserve,
            &mut self.reserve_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            stacks[1],
            "LIFO Undo",
            self.game.undo_stack(),
            self.focused_pane == FocusedPane::Undo,
            &mut self.undo_scroll,
        );

        super::panes::render_menu_pane(frame, right_rows[0]);

        super::panes::render_journal_pane(
            frame,
            right_rows[1],
            self.game.journal(),
            self.focused_pane == FocusedPane::Journal,
            &mut self.journal_scroll,
        );

        super::panes::render_status_bar(frame, status_area, &self.game);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.select(Selection::Exit);
            }
            KeyCode::Char(c @ '0'..='9') => {
                let number = c.to_digit(10).map(i64::from).unwrap_or_default();
                match Selection::from_number(number) {
                    Ok(selection) => self.select(selection),
                    Err(e @ SelectionError::UnknownOption(_)) => {
                        self.game.note(Severity::Refused, e.to_string());
                    }
                    Err(SelectionError::NotANumber) => {}
                }
                // Follow the newest message
                self.journal_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn select(&mut self, selection: Selection) {
        match selection {
            Selection::Run(action) => {
                // Refusals are already journaled by the game
                let _ = self.game.apply(action);
            }
            Selection::Exit => {
                self.game.note(Severity::Info, "Game over.");
                self.should_quit = true;
            }
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Queue => &mut self.queue_scroll,
            FocusedPane::Reserve => &mut self.reserve_scroll,
            FocusedPane::Undo => &mut self.undo_scroll,
            FocusedPane::Journal => &mut self.journal_scroll,
        }
    }
}
