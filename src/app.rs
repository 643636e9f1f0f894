//! Application state and core logic

use crate::state::{AppState, FormFocus, Tab, Theme};
use crate::ui::{faq_panel, form_panel, layout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Terminal size for click mapping (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(theme: Theme) -> Self {
        Self {
            state: AppState::new(theme),
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance timed state; called on every tick
    pub fn on_tick(&mut self, now: Instant) {
        let was_submitted = self.state.signup.is_submitted();
        self.state.signup.tick(now);
        if was_submitted && !self.state.signup.is_submitted() {
            tracing::info!("sign-up form reset after the post-submit delay");
            self.state.event_log.record("Form reset after submission");
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global shortcuts first; these never reach the event log
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit = true;
                    return;
                }
                KeyCode::Char('t') => {
                    self.state.theme.toggle();
                    tracing::debug!("theme switched to {}", self.state.theme.name());
                    self.state
                        .event_log
                        .record(format!("Theme switched to {}", self.state.theme.name()));
                    return;
                }
                _ => {}
            }
        }

        self.state.event_log.record(describe_key(&key));

        // Tab switching works from every tab
        match key.code {
            KeyCode::Left => {
                self.state.active_tab = self.state.active_tab.prev();
                return;
            }
            KeyCode::Right => {
                self.state.active_tab = self.state.active_tab.next();
                return;
            }
            _ => {}
        }

        match self.state.active_tab {
            Tab::Events => self.handle_events_key(key),
            Tab::Counter => self.handle_counter_key(key),
            Tab::Faq => self.handle_faq_key(key),
            Tab::SignUp => self.handle_signup_key(key),
        }
    }

    /// Handle keys in the Events tab
    fn handle_events_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') => self.state.event_log.clear(),
            _ => {}
        }
    }

    /// Handle keys in the Counter tab
    fn handle_counter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.state.counter.increment();
            }
            KeyCode::Char('-') | KeyCode::Down => self.state.counter.decrement(),
            KeyCode::Char('0') => self.state.counter.reset(),
            _ => {}
        }
    }

    /// Handle keys in the FAQ tab
    fn handle_faq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.faq.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.faq.move_up(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_selected(),
            _ => {}
        }
    }

    /// Handle keys in the Sign Up tab. Printable characters go into the
    /// focused field, so there is no quit key here.
    fn handle_signup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.signup.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.signup.focus_prev(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => {
                self.state.signup.reset();
                tracing::debug!("sign-up form reset by hand");
            }
            KeyCode::Backspace => self.state.signup.backspace(),
            KeyCode::Char(c) => self.state.signup.input_char(c),
            _ => {}
        }
    }

    /// Run the submit path of the sign-up form
    fn submit_form(&mut self) {
        if self.state.signup.is_submitted() {
            return;
        }
        if self.state.signup.submit(Instant::now()) {
            tracing::info!("sign-up accepted");
            self.state.event_log.record("Sign-up submitted");
        } else {
            tracing::debug!("sign-up rejected, required fields incomplete");
            self.state.event_log.record("Sign-up rejected (invalid fields)");
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.state.event_log.record(format!(
                "Click at column {}, row {}",
                mouse.column, mouse.row
            ));
            self.handle_click(mouse.column, mouse.row);
        }
    }

    /// Map a click to whatever was rendered at that position.
    /// Recomputes the frame layout from the stored terminal size.
    fn handle_click(&mut self, column: u16, row: u16) {
        let Some((height, width)) = self.terminal_size else {
            return;
        };
        let (tab_area, content_area, _) =
            layout::create_layout(Rect::new(0, 0, width, height));

        if contains(tab_area, column, row) {
            if let Some(tab) = layout::tab_at(tab_area, column) {
                self.state.active_tab = tab;
            }
            return;
        }

        if !contains(content_area, column, row) {
            return;
        }

        match self.state.active_tab {
            Tab::Faq => {
                if let Some(index) =
                    faq_panel::item_at(content_area, column, row, &self.state.faq)
                {
                    self.state.faq.toggle_at(index);
                }
            }
            Tab::SignUp => {
                if self.state.signup.is_submitted() {
                    return;
                }
                if let Some(focus) = form_panel::focus_at(content_area, column, row) {
                    self.state.signup.focus_on(focus);
                    if focus == FormFocus::Submit {
                        self.submit_form();
                    }
                }
            }
            Tab::Events | Tab::Counter => {}
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Human-readable description of a key press for the event log
fn describe_key(key: &KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => format!("'{c}'"),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Pressed Ctrl+{name}")
    } else {
        format!("Pressed {name}")
    }
}
