//! Login screen with username, password, and a Login control

use gate_core::Field;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Focus};
use crate::ui::layout::{centered_rect_fixed, render_footer, render_header, ScreenLayout};

/// Mask character for the password input
const MASK: char = '•';

/// Draw the login screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, &app.breadcrumb(), theme);

    // Center the form dialog
    let dialog = centered_rect_fixed(44, 15, layout.content);

    let block = Block::default()
        .title(" Sign In ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(1), // Username label
            Constraint::Length(3), // Username input
            Constraint::Length(1), // Password label
            Constraint::Length(3), // Password input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Login button
            Constraint::Min(0),
        ])
        .split(inner);

    draw_field(frame, chunks[0], chunks[1], Field::Username, app);
    draw_field(frame, chunks[2], chunks[3], Field::Password, app);

    let button_focused = app.state.focus == Focus::LoginButton;
    let button = Paragraph::new("[ Login ]")
        .style(theme.button(button_focused))
        .alignment(Alignment::Center);
    frame.render_widget(button, centered_rect_fixed(11, 1, chunks[5]));

    render_footer(
        frame,
        layout.footer,
        &[
            ("Tab", "Next field"),
            ("Enter", "Login"),
            ("Esc", "Quit"),
        ],
        theme,
    );
}

/// Label plus bordered input for one form field
fn draw_field(frame: &mut Frame, label_area: Rect, input_area: Rect, field: Field, app: &App) {
    let theme = &app.theme;
    let focused = app.state.focus.field() == Some(field);

    let label = Paragraph::new(format!("{}:", field.label())).style(if focused {
        theme.title()
    } else {
        theme.text_secondary()
    });
    frame.render_widget(label, label_area);

    let value = app.gate.form().value(field);
    let shown = if field.is_masked() {
        mask(value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(shown).style(theme.input(focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                theme.border_focused()
            } else {
                theme.border()
            }),
    );
    frame.render_widget(input, input_area);
}

/// One mask character per typed character
fn mask(value: &str) -> String {
    value.chars().map(|_| MASK).collect()
}
