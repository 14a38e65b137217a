//! Application state

use gate_core::Field;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Credential form
    #[default]
    Login,

    /// Protected view reached after a successful sign-in
    Dashboard,
}

impl Screen {
    /// Title for the header breadcrumb
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Dashboard => "Dashboard",
        }
    }
}

/// Focusable control on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
    LoginButton,
}

impl Focus {
    /// Next control in tab order, wrapping
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::LoginButton,
            Focus::LoginButton => Focus::Username,
        }
    }

    /// Previous control in tab order, wrapping
    pub fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::LoginButton,
            Focus::Password => Focus::Username,
            Focus::LoginButton => Focus::Password,
        }
    }

    /// Form field behind this control, if it is a text input
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Username => Some(Field::Username),
            Focus::Password => Some(Field::Password),
            Focus::LoginButton => None,
        }
    }
}

/// Front-end state that lives outside the gate
#[derive(Debug, Default)]
pub struct AppState {
    /// Focused control on the login form
    pub focus: Focus,

    /// Username captured at the moment of acceptance
    pub signed_in_as: Option<String>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::default();
        focus = focus.next();
        assert_eq!(focus, Focus::Password);
        focus = focus.next();
        assert_eq!(focus, Focus::LoginButton);
        focus = focus.next();
        assert_eq!(focus, Focus::Username);
        assert_eq!(focus.prev(), Focus::LoginButton);
    }

    #[test]
    fn test_focus_field() {
        assert_eq!(Focus::Username.field(), Some(Field::Username));
        assert_eq!(Focus::Password.field(), Some(Field::Password));
        assert_eq!(Focus::LoginButton.field(), None);
    }
}
