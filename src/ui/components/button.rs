//! Button component for TUI

use crate::state::Theme;
use ratatui::{
    layout::Rect,
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    theme: Theme,
) {
    let border_style = if is_selected {
        theme.border_focused()
    } else {
        theme.border()
    };

    let text_style = if is_selected {
        theme.accent().add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        theme.muted()
    } else {
        theme.text()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
