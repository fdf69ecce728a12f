use crate::journal::Severity;
use crate::memory::piece::Piece;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of the marker column ("FRONT", "REAR", "TOP", "BASE")
const MARKER_WIDTH: usize = 6;

/// Format one container row: marker, slot index, piece name and id
pub(crate) fn piece_line(marker: Option<&str>, slot: usize, piece: &Piece) -> Line<'static> {
    let marker_span = match marker {
        Some(label) => Span::styled(
            format!("{:<width$}", label, width = MARKER_WIDTH),
            Style::default()
                .fg(DEFAULT_THEME.marker)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(" ".repeat(MARKER_WIDTH)),
    };

    Line::from(vec![
        marker_span,
        Span::styled(
            format!("[{}] ", slot),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("[{}]", piece.name()),
            Style::default().fg(DEFAULT_THEME.piece),
        ),
        Span::styled(
            format!(" #{}", piece.id()),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ])
}

/// Occupancy shown in pane titles, e.g. ` Queue 3/5 `
pub(crate) fn occupancy_title(name: &str, len: usize, capacity: usize) -> String {
    format!(" {} {}/{} ", name, len, capacity)
}

/// Text color for a journal line
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => DEFAULT_THEME.fg,
        Severity::Success => DEFAULT_THEME.success,
        Severity::Warning => DEFAULT_THEME.warning,
        Severity::Refused => DEFAULT_THEME.error,
    }
}
