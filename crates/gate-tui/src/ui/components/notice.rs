//! Blocking notice dialog
//!
//! Acts as the gate's notifier: a raised notice is drawn as a modal over the
//! current screen and stays there until acknowledged.

use gate_core::Notifier;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::{layout::centered_rect_fixed, Theme};

/// Holds at most one pending notice
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<String>,
}

impl NoticeBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Message awaiting acknowledgement
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    /// Render the pending notice as a centered modal
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(message) = self.current() else {
            return;
        };

        let width = (message.len() as u16 + 10).clamp(30, 60);
        let dialog_area = centered_rect_fixed(width, 7, area);

        // Clear the background
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Notice ")
            .title_style(theme.danger())
            .borders(Borders::ALL)
            .border_style(theme.danger());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        let message_widget = Paragraph::new(message)
            .style(theme.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        let help_widget = Paragraph::new("[Enter] OK")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(help_widget, chunks[1]);
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, message: &str) {
        self.current = Some(message.to_string());
    }

    fn dismiss(&mut self) {
        self.current = None;
    }
}
