//! Dashboard view state management

use crate::dashboard::layout::DashboardLayout;
use crate::dashboard::tip_dialog::TipSettingsDialog;
use crate::navigation;

/// Primary destinations in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Shows,
    Analytics,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Shows,
        NavItem::Analytics,
        NavItem::Profile,
    ];

    /// Get the display name for this item
    pub fn name(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Shows => "Shows",
            NavItem::Analytics => "Analytics",
            NavItem::Profile => "Profile",
        }
    }

    /// Get the icon character for this item
    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "D",
            NavItem::Shows => "S",
            NavItem::Analytics => "A",
            NavItem::Profile => "P",
        }
    }

    /// Route this item navigates to
    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Dashboard => navigation::DASHBOARD,
            NavItem::Shows => navigation::SHOWS,
            NavItem::Analytics => navigation::ANALYTICS,
            NavItem::Profile => navigation::PROFILE_EDIT,
        }
    }

    /// Whether `path` is this item's route or below it
    pub fn matches(&self, path: &str) -> bool {
        let base = match self {
            NavItem::Profile => "/profile",
            other => other.path(),
        };
        path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Overall dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Home view state
    pub home: HomeViewState,
    /// Tip settings dialog
    pub tip_dialog: TipSettingsDialog,
}

/// Home view state
#[derive(Debug, Default)]
pub struct HomeViewState {
    /// Layout derived from the snapshot; rebuilt when cleared
    pub layout: Option<DashboardLayout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_matches_nested_routes() {
        assert!(NavItem::Shows.matches("/shows"));
        assert!(NavItem::Shows.matches("/shows/new"));
        assert!(!NavItem::Shows.matches("/showsfoo"));
        assert!(NavItem::Profile.matches("/profile/edit"));
        assert!(!NavItem::Dashboard.matches("/analytics"));
    }

    #[test]
    fn test_default_state_has_closed_dialog() {
        let state = DashboardState::default();
        assert!(!state.tip_dialog.is_open());
        assert!(state.home.layout.is_none());
    }
}
