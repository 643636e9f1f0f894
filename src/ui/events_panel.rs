//! Event demo view: mirrors recent input events back to the user

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the event log panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme;
    let log = &app.state.event_log;

    let mut content = vec![
        Line::from(Span::styled(
            "Every key press and mouse click lands here, newest first.",
            theme.muted(),
        )),
        Line::from(""),
    ];

    if log.is_empty() {
        content.push(Line::from(Span::styled(
            "Nothing yet. Press a key or click anywhere.",
            theme.muted(),
        )));
    } else {
        for entry in log.entries() {
            content.push(Line::from(vec![
                Span::styled(entry.at.format("%H:%M:%S ").to_string(), theme.muted()),
                Span::styled(&entry.description, theme.text()),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Events ", theme.title()));

    frame.render_widget(Paragraph::new(content).block(block), area);
}
