//! Application state definitions

use crate::state::{Counter, EventLog, FaqState, SignupForm, Theme};

/// Top-level tabs of the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Events,
    Counter,
    Faq,
    SignUp,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Events, Tab::Counter, Tab::Faq, Tab::SignUp];

    pub fn next(&self) -> Self {
        match self {
            Self::Events => Self::Counter,
            Self::Counter => Self::Faq,
            Self::Faq => Self::SignUp,
            Self::SignUp => Self::Events,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Events => Self::SignUp,
            Self::Counter => Self::Events,
            Self::Faq => Self::Counter,
            Self::SignUp => Self::Faq,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Counter => "Counter",
            Self::Faq => "FAQ",
            Self::SignUp => "Sign Up",
        }
    }

    /// Position of this tab in display order
    pub fn index(&self) -> usize {
        match self {
            Self::Events => 0,
            Self::Counter => 1,
            Self::Faq => 2,
            Self::SignUp => 3,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub active_tab: Tab,
    pub theme: Theme,

    // Per-tab state
    pub event_log: EventLog,
    pub counter: Counter,
    pub faq: FaqState,
    pub signup: SignupForm,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}
