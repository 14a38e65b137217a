//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - delegates to the routed screen, then overlays any
/// pending notice
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.current_screen() {
        Screen::Login => screens::login::draw(frame, area, app),
        Screen::Dashboard => screens::dashboard::draw(frame, area, app),
    }

    app.gate.notifier().render(frame, area, &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_keys(app: &mut App, keys: &[KeyCode]) {
        for code in keys {
            app.handle_key(KeyEvent::new(*code, KeyModifiers::NONE));
        }
    }

    fn chars(text: &str) -> Vec<KeyCode> {
        text.chars().map(KeyCode::Char).collect()
    }

    #[test]
    fn test_login_form_labels() {
        let app = App::default();
        let text = screen_text(&app);

        assert!(text.contains("Username:"));
        assert!(text.contains("Password:"));
        assert!(text.contains("Login"));
        assert!(text.contains("Sign In"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = App::default();
        type_keys(&mut app, &chars("admin"));
        type_keys(&mut app, &[KeyCode::Tab]);
        type_keys(&mut app, &chars("hunter2"));

        let text = screen_text(&app);
        assert!(text.contains("admin"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_notice_overlay() {
        let mut app = App::default();
        type_keys(&mut app, &[KeyCode::Enter]);

        let text = screen_text(&app);
        assert!(text.contains("Invalid credentials"));
        assert!(text.contains("[Enter] OK"));

        type_keys(&mut app, &[KeyCode::Enter]);
        assert!(!screen_text(&app).contains("Invalid credentials"));
    }

    #[test]
    fn test_dashboard_after_sign_in() {
        let mut app = App::default();
        type_keys(&mut app, &chars("admin"));
        type_keys(&mut app, &[KeyCode::Tab]);
        type_keys(&mut app, &chars("password"));
        type_keys(&mut app, &[KeyCode::Enter]);

        let text = screen_text(&app);
        assert!(text.contains("Access granted"));
        assert!(text.contains("Signed in as admin"));
        assert!(!text.contains("Username:"));
    }
}
