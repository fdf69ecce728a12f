//! Action menu rendering

use super::utils::pane_block;
use crate::game::action::Action;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the list of actions and their keys
pub fn render_menu_pane(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines: Vec<Line> = Action::ALL
        .iter()
        .map(|action| {
            Line::from(vec![
                Span::styled(format!(" {} ", action.key()), key_style),
                Span::styled(format!(" {}", action.label()), desc_style),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(" 0 ", key_style),
        Span::styled(" Quit", desc_style),
    ]));

    let paragraph = Paragraph::new(lines).block(pane_block(" Strategic Actions ".to_string(), false));
    frame.render_widget(paragraph, area);
}
