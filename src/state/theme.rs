//! Color theme definitions

use ratatui::style::{Color, Modifier, Style};

/// Selectable color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other theme
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a theme name as it appears in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn border(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::DarkGray),
            Self::Light => Style::default().fg(Color::Gray),
        }
    }

    pub fn border_focused(&self) -> Style {
        self.accent()
    }

    pub fn text(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::White),
            Self::Light => Style::default().fg(Color::Black),
        }
    }

    pub fn muted(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::DarkGray),
            Self::Light => Style::default().fg(Color::Gray),
        }
    }

    pub fn title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::Cyan),
            Self::Light => Style::default().fg(Color::Blue),
        }
    }

    /// Decoration for a field holding a valid value
    pub fn ok(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    /// Decoration for a field holding an invalid value
    pub fn err(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar(&self) -> Style {
        match self {
            Self::Dark => Style::default().fg(Color::White).bg(Color::DarkGray),
            Self::Light => Style::default().fg(Color::Black).bg(Color::Gray),
        }
    }

    pub fn tab_active(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        self.muted()
    }
}
