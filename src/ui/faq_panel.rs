//! FAQ accordion view

use crate::app::App;
use crate::state::{FaqState, FAQ_ITEMS};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Indent applied to answer lines, in cells
const ANSWER_INDENT: usize = 2;

/// Draw the FAQ panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme;
    let faq = &app.state.faq;
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut content: Vec<Line> = Vec::new();
    for (idx, item) in FAQ_ITEMS.iter().enumerate() {
        let marker = if faq.is_open(idx) { "▾ " } else { "▸ " };
        let style = if faq.cursor() == idx {
            theme.accent().add_modifier(Modifier::BOLD)
        } else {
            theme.text()
        };
        content.push(Line::from(Span::styled(
            format!("{marker}{}", item.question),
            style,
        )));

        if faq.is_open(idx) {
            for line in wrap_lines(item.answer, inner_width.saturating_sub(ANSWER_INDENT)) {
                content.push(Line::from(Span::styled(
                    format!("{}{line}", " ".repeat(ANSWER_INDENT)),
                    theme.muted(),
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" FAQ ", theme.title()));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Map a click position to the question rendered on that row.
/// Mirrors the row layout produced by `draw`; answer rows map to nothing.
pub fn item_at(area: Rect, column: u16, row: u16, faq: &FaqState) -> Option<usize> {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    if column <= area.x
        || column >= area.x + 1 + inner_width
        || row <= area.y
        || row >= area.y + 1 + inner_height
    {
        return None;
    }

    let mut line = area.y + 1;
    for (idx, item) in FAQ_ITEMS.iter().enumerate() {
        if row == line {
            return Some(idx);
        }
        line += 1;
        if faq.is_open(idx) {
            let wrap_width = (inner_width as usize).saturating_sub(ANSWER_INDENT);
            line += wrap_lines(item.answer, wrap_width).len() as u16;
            if row < line {
                return None;
            }
        }
    }
    None
}

/// Greedy word wrap; a word longer than the width gets a line of its own
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
