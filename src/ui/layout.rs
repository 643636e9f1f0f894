//! Layout components (tab bar, status bar)

use crate::app::App;
use crate::state::Tab;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the tab bar in rows
pub const TAB_BAR_HEIGHT: u16 = 1;

/// Create the main layout: tab bar, content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT), // Tab bar
            Constraint::Min(0),                 // Main content
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab bar
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme;

    let mut spans = vec![];
    for (idx, tab) in Tab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("│", theme.muted()));
        }
        let style = if *tab == app.state.active_tab {
            theme.tab_active()
        } else {
            theme.tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Map a click on the tab bar to the tab under it.
/// Mirrors the span widths produced by `draw_tab_bar`.
pub fn tab_at(area: Rect, column: u16) -> Option<Tab> {
    if column < area.x || column >= area.x + area.width {
        return None;
    }

    let mut start = area.x;
    for (idx, tab) in Tab::ALL.iter().enumerate() {
        if idx > 0 {
            start += 1; // separator
        }
        let width = tab.label().chars().count() as u16 + 2;
        if column >= start && column < start + width {
            return Some(*tab);
        }
        start += width;
    }
    None
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let theme = app.state.theme;
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = format!(" {}  |  ^T:theme", get_tab_hints(app.state.active_tab));
    let status = Paragraph::new(Line::from(Span::raw(hints))).style(theme.status_bar());
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint).style(theme.status_bar());
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the active tab
fn get_tab_hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Events => "←/→:tabs  c:clear",
        Tab::Counter => "←/→:tabs  +/-:count  0:reset",
        Tab::Faq => "←/→:tabs  j/k:move  Enter:toggle",
        Tab::SignUp => "Tab:next field  Enter:submit  Esc:reset",
    }
}
