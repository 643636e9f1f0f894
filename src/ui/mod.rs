//! UI module for rendering the TUI

mod components;
mod counter_panel;
mod events_panel;
pub mod faq_panel;
pub mod form_panel;
pub mod layout;

use crate::app::App;
use crate::state::Tab;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (tab_area, content_area, _) = layout::create_layout(area);

    layout::draw_tab_bar(frame, tab_area, app);

    // Draw main content based on active tab
    match app.state.active_tab {
        Tab::Events => events_panel::draw(frame, content_area, app),
        Tab::Counter => counter_panel::draw(frame, content_area, app),
        Tab::Faq => faq_panel::draw(frame, content_area, app),
        Tab::SignUp => form_panel::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
