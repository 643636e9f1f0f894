//! Sign-up form view

use crate::app::App;
use crate::state::{Field, FormFocus, FormPhase, SignupForm, Theme, FIELD_COUNT};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Rows per field cell: a 3-row input box plus a 1-row message
const FIELD_CELL_HEIGHT: u16 = 4;
/// Width of the submit button in cells
const SUBMIT_WIDTH: u16 = 24;

/// Where each part of the form lands inside the panel content area
pub struct FormLayout {
    pub fields: [Rect; FIELD_COUNT],
    pub messages: [Rect; FIELD_COUNT],
    pub submit: Rect,
}

/// Compute the form grid: two columns of three field cells, a spacer row,
/// then a centered submit button. Fields run down the left column first.
pub fn form_layout(content: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_CELL_HEIGHT),
            Constraint::Length(FIELD_CELL_HEIGHT),
            Constraint::Length(FIELD_CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(content);

    let mut fields = [Rect::default(); FIELD_COUNT];
    let mut messages = [Rect::default(); FIELD_COUNT];

    for row in 0..3 {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        for col in 0..2 {
            let index = col * 3 + row;
            let cell = columns[col];
            let input_height = cell.height.saturating_sub(1);
            fields[index] = Rect {
                height: input_height,
                ..cell
            };
            messages[index] = Rect {
                x: cell.x,
                y: cell.y + input_height,
                width: cell.width,
                height: cell.height - input_height,
            };
        }
    }

    let button_row = rows[4];
    let submit_width = button_row.width.min(SUBMIT_WIDTH);
    let submit = Rect {
        x: button_row.x + (button_row.width - submit_width) / 2,
        y: button_row.y,
        width: submit_width,
        height: button_row.height,
    };

    FormLayout {
        fields,
        messages,
        submit,
    }
}

/// Draw the sign-up panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme;
    let form = &app.state.signup;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Sign Up ", theme.title()));
    frame.render_widget(block, area);

    let content = content_area(area);

    if let FormPhase::Submitted { at, .. } = form.phase() {
        draw_submitted_card(frame, content, *at, form, theme);
        return;
    }

    let content = shake_shift(content, form.shake_offset, frame.area());
    let layout = form_layout(content);

    for field in Field::ALL {
        draw_field(frame, layout.fields[field.index()], form, field, theme);
        draw_message(frame, layout.messages[field.index()], form, field, theme);
    }

    render_button(
        frame,
        layout.submit,
        form.submit_label(),
        form.focus() == FormFocus::Submit,
        form.is_submittable(),
        theme,
    );
}

/// Map a click inside the panel to the field or button under it
pub fn focus_at(area: Rect, column: u16, row: u16) -> Option<FormFocus> {
    let layout = form_layout(content_area(area));
    for field in Field::ALL {
        if hit(layout.fields[field.index()], column, row) {
            return Some(FormFocus::Field(field));
        }
    }
    if hit(layout.submit, column, row) {
        return Some(FormFocus::Submit);
    }
    None
}

fn content_area(panel: Rect) -> Rect {
    Rect {
        x: panel.x + 1,
        y: panel.y + 1,
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Shift the content sideways while the rejection cue plays, clipped so
/// nothing lands outside the frame
fn shake_shift(area: Rect, offset: f32, bounds: Rect) -> Rect {
    let dx = offset.round() as i16;
    if dx == 0 {
        return area;
    }
    let shifted = Rect {
        x: area.x.saturating_add_signed(dx),
        ..area
    };
    shifted.intersection(bounds)
}

fn draw_field(frame: &mut Frame, area: Rect, form: &SignupForm, field: Field, theme: Theme) {
    let is_active = form.focus() == FormFocus::Field(field);
    let value = form.value(field);
    let result = form.result(field);

    // An empty field shows no verdict either way
    let border_style = if value.is_empty() {
        if is_active {
            theme.border_focused()
        } else {
            theme.border()
        }
    } else if result.valid {
        theme.ok()
    } else {
        theme.err()
    };

    let title_style = if is_active { theme.accent() } else { theme.muted() };

    let shown: String = if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = Vec::new();
    if shown.is_empty() && !is_active {
        spans.push(Span::styled(field.placeholder(), theme.muted()));
    } else {
        spans.push(Span::styled(shown, theme.text()));
    }
    if is_active {
        spans.push(Span::styled("▌", theme.accent()));
    }

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_message(frame: &mut Frame, area: Rect, form: &SignupForm, field: Field, theme: Theme) {
    // Messages follow the same rule as the borders: nothing while empty
    if form.value(field).is_empty() {
        return;
    }
    let result = form.result(field);
    if result.valid || result.message.is_empty() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" ✗ {}", result.message),
            theme.err(),
        ))),
        area,
    );
}

fn draw_submitted_card(
    frame: &mut Frame,
    content: Rect,
    at: DateTime<Local>,
    form: &SignupForm,
    theme: Theme,
) {
    let seconds = form.reset_countdown(Instant::now());
    let lines = vec![
        Line::from(Span::styled(
            "✓ Account created",
            theme.ok().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Submitted at {}", at.format("%H:%M:%S")),
            theme.text(),
        )),
        Line::from(Span::styled(
            format!("The form clears itself in {seconds}s"),
            theme.muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Esc to start over now", theme.muted())),
    ];

    let card = centered(content, 44, 8);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.ok());
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = area.width.min(width);
    let height = area.height.min(height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
