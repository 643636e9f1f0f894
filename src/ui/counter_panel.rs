//! Counter demo view

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the counter panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.state.counter.value().to_string(),
            theme.accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("+", theme.accent()),
            Span::styled(" increment   ", theme.muted()),
            Span::styled("-", theme.accent()),
            Span::styled(" decrement   ", theme.muted()),
            Span::styled("0", theme.accent()),
            Span::styled(" reset", theme.muted()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Counter ", theme.title()));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
