//! Navigation router for screen transitions

use gate_core::{Navigator, Route};

use super::state::Screen;

/// Path of the login form
pub const LOGIN_PATH: &str = "/login";

/// Router manages the route table and navigation history
pub struct Router {
    /// Known paths and the screen each one shows
    table: Vec<(Route, Screen)>,
    /// Navigation history stack
    history: Vec<Route>,
    /// Maximum history depth
    max_depth: usize,
}

impl Router {
    /// Create a router starting on the login form, with `protected` mapped
    /// to the dashboard
    pub fn new(protected: &Route) -> Self {
        let login = Route::new(LOGIN_PATH);
        Self {
            table: vec![
                (login.clone(), Screen::Login),
                (protected.clone(), Screen::Dashboard),
            ],
            history: vec![login],
            max_depth: 20,
        }
    }

    /// Screen registered for a route
    pub fn resolve(&self, route: &Route) -> Option<Screen> {
        self.table
            .iter()
            .find(|(known, _)| known == route)
            .map(|(_, screen)| *screen)
    }

    /// Get the current route
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    /// Screen for the current route
    pub fn current_screen(&self) -> Screen {
        self.current()
            .and_then(|route| self.resolve(route))
            .unwrap_or_default()
    }

    /// Get the breadcrumb trail
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|route| self.resolve(route))
            .map(Screen::title)
            .collect()
    }

    /// Push a new route onto the history
    fn push(&mut self, route: Route) {
        // Limit history depth
        if self.history.len() >= self.max_depth {
            self.history.remove(0);
        }

        self.history.push(route);
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: &Route) {
        match self.resolve(route) {
            Some(screen) => {
                tracing::info!("Navigating to {} ({})", route, screen.title());
                self.push(route.clone());
            }
            None => tracing::warn!("No screen registered for {}", route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_login() {
        let router = Router::new(&Route::default());
        assert_eq!(router.current_screen(), Screen::Login);
        assert_eq!(router.current(), Some(&Route::new("/login")));
    }

    #[test]
    fn test_navigate_to_protected() {
        let mut router = Router::new(&Route::new("/dashboard"));
        router.navigate(&Route::new("/dashboard"));

        assert_eq!(router.current_screen(), Screen::Dashboard);
        assert_eq!(router.breadcrumb(), vec!["Sign In", "Dashboard"]);
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        let mut router = Router::new(&Route::new("/dashboard"));
        router.navigate(&Route::new("/nowhere"));

        assert_eq!(router.current_screen(), Screen::Login);
        assert_eq!(router.breadcrumb().len(), 1);
    }

    #[test]
    fn test_history_depth_is_bounded() {
        let protected = Route::new("/dashboard");
        let mut router = Router::new(&protected);
        for _ in 0..50 {
            router.navigate(&protected);
        }
        assert_eq!(router.breadcrumb().len(), 20);
    }
}
