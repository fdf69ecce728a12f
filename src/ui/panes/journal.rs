//! Journal pane rendering

use super::utils::{pane_block, render_list, severity_color};
use crate::journal::Journal;
use ratatui::{layout::Rect, style::Style, widgets::ListItem, Frame};

/// Render the journal of game messages
pub fn render_journal_pane(
    frame: &mut Frame,
    area: Rect,
    journal: &Journal,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Journal ".to_string(), is_focused);

    let items: Vec<ListItem<'static>> = journal
        .lines()
        .iter()
        .map(|line| {
            ListItem::new(line.text.clone())
                .style(Style::default().fg(severity_color(line.severity)))
        })
        .collect();

    render_list(frame, area, block, items, "(no messages)", scroll_offset);
}
