//! Navigation controller
//!
//! Holds the current route and a back stack. The shell starts on
//! [`Route::Home`]; every transition goes through [`Navigator::navigate`].

use crate::types::Route;
use anyhow::{Context, Result};

/// Owns the navigation state of the shell
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
    back_stack: Vec<Route>,
}

impl Navigator {
    /// Create a navigator positioned on the home screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switch to `route`, remembering where we came from
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::debug!(from = %self.current, to = %route, "navigate");
        self.back_stack.push(self.current);
        self.current = route;
    }

    /// Navigate by string key. Unknown keys are rejected and leave the state untouched.
    pub fn navigate_to_key(&mut self, key: &str) -> Result<()> {
        let route: Route = key
            .parse()
            .with_context(|| format!("Cannot navigate to '{}'", key))?;
        self.navigate(route);
        Ok(())
    }

    /// Return to the previous route. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "back");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.back());
    }

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Reminders);
        assert_eq!(nav.current(), Route::Reminders);

        assert!(nav.back());
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_navigate_to_same_route_does_not_grow_stack() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Labs);
        nav.navigate(Route::Labs);
        assert!(nav.back());
        assert!(!nav.back());
    }

    #[test]
    fn test_navigate_by_key() {
        let mut nav = Navigator::new();
        nav.navigate_to_key("medicines").unwrap();
        assert_eq!(nav.current(), Route::Medicines);
    }

    #[test]
    fn test_unknown_key_leaves_state_unchanged() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Records);

        let err = nav.navigate_to_key("billing").unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown route 'billing'"));
        assert_eq!(nav.current(), Route::Records);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::Home);
    }
}
