//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so navigation
//! chrome can evolve independently of call data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// An entry of the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        href: "/",
        label: "Tableau de bord",
        admin_only: false,
    },
    NavItem {
        href: "/calls",
        label: "Tous les appels",
        admin_only: false,
    },
    NavItem {
        href: "/calls/today",
        label: "Appels du jour",
        admin_only: false,
    },
    NavItem {
        href: "/calls/history",
        label: "Historique",
        admin_only: false,
    },
    NavItem {
        href: "/reminders",
        label: "Rappels",
        admin_only: false,
    },
    NavItem {
        href: "/admin/users",
        label: "Utilisateurs",
        admin_only: true,
    },
];

/// Navigation entries visible to the current user.
#[must_use]
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    NAV_ITEMS.into_iter().filter(|item| is_admin || !item.admin_only).collect()
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_expanded: true,
        }
    }
}
