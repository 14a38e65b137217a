//! Application state and event handling

mod config;
mod router;
mod state;

pub use config::{ConfigError, GateConfig};
pub use router::{Router, LOGIN_PATH};
pub use state::{AppState, Focus, Screen};

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gate_core::{Field, FixedPairValidator, LoginGate, SubmissionOutcome};
use ratatui::prelude::*;

use crate::ui::{self, components::notice::NoticeBoard, Theme};

/// The gate as wired for the terminal front end
pub type TuiGate = LoginGate<FixedPairValidator, Router, NoticeBoard>;

/// Main application struct
pub struct App {
    /// Credential gate: form, check, router, and notice board
    pub gate: TuiGate,

    /// Front-end state
    pub state: AppState,

    /// Color palette
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Last tick time
    last_tick: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}

impl App {
    /// Create a new application instance from startup configuration
    pub fn new(config: &GateConfig) -> Self {
        let destination = config.destination();
        let gate = LoginGate::new(
            FixedPairValidator::new(config.accepted()),
            Router::new(&destination),
            NoticeBoard::new(),
        )
        .with_route(destination);

        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Self {
            gate,
            state: AppState::new(),
            theme,
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
        }
    }

    /// Screen selected by the router
    pub fn current_screen(&self) -> Screen {
        self.gate.navigator().current_screen()
    }

    /// Breadcrumb trail for the header
    pub fn breadcrumb(&self) -> String {
        self.gate.navigator().breadcrumb().join(" › ")
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.last_tick.elapsed() >= tick_rate {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Handle a key press event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit handler
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.current_screen() {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key.code),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        // The notice is modal: nothing else gets through until it is acknowledged
        if self.gate.state().notice_pending() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                if let Err(e) = self.gate.acknowledge_notice() {
                    tracing::debug!("Acknowledge refused: {}", e);
                }
            }
            return;
        }

        // Only plain or shifted characters are text
        let typing = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = self.state.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.state.focus == Focus::LoginButton => self.submit(),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.gate.form_mut().pop(field);
                }
            }
            KeyCode::Char(c) if typing => {
                if let Some(field) = self.focused_field() {
                    self.gate.form_mut().push(field, c);
                }
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }

    /// Text input under focus, if any
    fn focused_field(&self) -> Option<Field> {
        self.state.focus.field()
    }

    /// Submit the form
    fn submit(&mut self) {
        let username = self.gate.form().username().to_string();

        match self.gate.submit() {
            Ok(SubmissionOutcome::Accepted) => {
                tracing::info!("Sign-in accepted");
                self.state.signed_in_as = Some(username);
            }
            Ok(SubmissionOutcome::Rejected) => {}
            Err(e) => tracing::debug!("Submit refused: {}", e),
        }
    }
}
