//! Route navigation
//!
//! The dashboard only asks to go somewhere; where a path leads is decided by
//! whatever implements [`Navigator`].

use std::collections::VecDeque;
use tracing::{debug, info};

/// Primary destinations listed in the sidebar
pub const DASHBOARD: &str = "/dashboard";
pub const SHOWS: &str = "/shows";
pub const NEW_SHOW: &str = "/shows/new";
pub const ANALYTICS: &str = "/analytics";
pub const PROFILE_EDIT: &str = "/profile/edit";
pub const BUSINESS_CREATE: &str = "/business/create";
pub const BUSINESS_MANAGE: &str = "/business/manage";

/// Route to a single show
pub fn show_path(show_id: &str) -> String {
    format!("{}/{}", SHOWS, show_id)
}

/// Route to a creator's public page
pub fn public_profile_path(username: &str) -> String {
    format!("/creator/{}", username)
}

/// Receives navigation requests
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Maximum number of paths kept in [`RouteHistory`]
const HISTORY_LIMIT: usize = 50;

/// Navigator that records where the user went
#[derive(Debug, Clone)]
pub struct RouteHistory {
    current: String,
    history: VecDeque<String>,
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new(DASHBOARD)
    }
}

impl RouteHistory {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: VecDeque::new(),
        }
    }

    /// Currently active path
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previously visited paths, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Whether [`back`](Self::back) has anywhere to go
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the previous path, if any
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                info!("Navigating back to {}", previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Navigator for RouteHistory {
    fn navigate(&mut self, path: &str) {
        if path == self.current {
            debug!("Already at {}", path);
            return;
        }

        info!("Navigating to {}", path);
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push_back(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_records_history() {
        let mut routes = RouteHistory::default();
        routes.navigate(SHOWS);
        routes.navigate(&show_path("show-2"));

        assert_eq!(routes.current(), "/shows/show-2");
        assert_eq!(routes.history().collect::<Vec<_>>(), vec![DASHBOARD, SHOWS]);
    }

    #[test]
    fn test_navigate_to_current_path_is_ignored() {
        let mut routes = RouteHistory::default();
        routes.navigate(DASHBOARD);

        assert_eq!(routes.current(), DASHBOARD);
        assert_eq!(routes.history().count(), 0);
    }

    #[test]
    fn test_back() {
        let mut routes = RouteHistory::default();
        assert!(!routes.back());

        routes.navigate(ANALYTICS);
        assert!(routes.back());
        assert_eq!(routes.current(), DASHBOARD);
    }

    #[test]
    fn test_can_go_back_follows_history() {
        let mut routes = RouteHistory::default();
        assert!(!routes.can_go_back());

        routes.navigate(SHOWS);
        assert!(routes.can_go_back());

        routes.back();
        assert!(!routes.can_go_back());

        routes.navigate(DASHBOARD);
        assert!(!routes.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut routes = RouteHistory::default();
        for i in 0..(HISTORY_LIMIT + 10) {
            routes.navigate(&show_path(&i.to_string()));
        }

        assert_eq!(routes.history().count(), HISTORY_LIMIT);
    }

    #[test]
    fn test_public_profile_path() {
        assert_eq!(public_profile_path("alexmorgan"), "/creator/alexmorgan");
    }
}
