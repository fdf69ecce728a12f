//! Stack pane rendering
//!
//! Used for both the reserve stack and the undo stack. Rows run top to
//! bottom; the first is tagged `TOP` and the last `BASE`.

use super::utils::{occupancy_title, pane_block, piece_line, render_list};
use crate::memory::{piece::Piece, stack::BoundedStack};
use ratatui::{layout::Rect, widgets::ListItem, Frame};

/// Render a stack pane titled `name`
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    stack: &BoundedStack<Piece>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(
        occupancy_title(name, stack.len(), stack.capacity()),
        is_focused,
    );

    let top = stack.top_index().unwrap_or(0);
    let items: Vec<ListItem<'static>> = stack
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let slot = top - i;
            let marker = match slot {
                s if s == top => Some("TOP"),
                0 => Some("BASE"),
                _ => None,
            };
            ListItem::new(piece_line(marker, slot, piece))
        })
        .collect();

    render_list(frame, area, block, items, "[EMPTY]", scroll_offset);
}
