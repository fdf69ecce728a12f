//! Queue pane rendering
//!
//! Shows the play queue front to rear, one piece per row, with the ring slot
//! each piece occupies. The first row is tagged `FRONT` and the last `REAR`.

use super::utils::{occupancy_title, pane_block, piece_line, render_list};
use crate::memory::{piece::Piece, queue::CircularQueue};
use ratatui::{layout::Rect, widgets::ListItem, Frame};

/// Render the queue pane
pub fn render_queue_pane(
    frame: &mut Frame,
    area: Rect,
    queue: &CircularQueue<Piece>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(
        occupancy_title("FIFO Play Queue", queue.len(), queue.capacity()),
        is_focused,
    );

    let last = queue.len().saturating_sub(1);
    let items: Vec<ListItem<'static>> = queue
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let marker = match i {
                0 => Some("FRONT"),
                i if i == last => Some("REAR"),
                _ => None,
            };
            let slot = (queue.front_index() + i) % queue.capacity();
            ListItem::new(piece_line(marker, slot, piece))
        })
        .collect();

    render_list(frame, area, block, items, "[EMPTY]", scroll_offset);
}
