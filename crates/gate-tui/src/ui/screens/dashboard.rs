//! Dashboard screen - the protected view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout::{render_footer, render_header, ScreenLayout};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, &app.breadcrumb(), theme);

    let who = app.state.signed_in_as.as_deref().unwrap_or("unknown user");
    let lines = vec![
        Line::from(Span::styled("✓ Access granted", theme.success())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Signed in as ", theme.text_secondary()),
            Span::styled(who, theme.title()),
        ]),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Dashboard ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(body, layout.content);

    render_footer(frame, layout.footer, &[("q", "Quit")], theme);
}
